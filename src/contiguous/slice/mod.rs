//! A module containing [`Slice`], [`SliceMut`] and their borrowed iterators.
//!
//! Both views are re-exported under the parent module.

mod iter;
mod slice;

mod tests;

pub use iter::*;
pub use slice::*;
