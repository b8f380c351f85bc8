//! A module containing [`Vector`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a Vector;
//! borrowed iteration reuses [`Iter`](super::slice::Iter) and [`IterMut`](super::slice::IterMut)
//! from the slice module.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod vector;

mod tests;

pub use iter::*;
pub use vector::*;
