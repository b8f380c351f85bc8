//! Contiguous-memory views and containers.
//!
//! [`Slice`] and [`SliceMut`] are non-owning bounds-checked views - a pointer and a length, with
//! all the safety hanging off the lifetime parameter. [`Vector`] is the owning growable buffer
//! exposing the same view interface by delegation.

pub mod slice;
pub mod vector;

#[doc(inline)]
pub use slice::{Slice, SliceMut};
#[doc(inline)]
pub use vector::Vector;
