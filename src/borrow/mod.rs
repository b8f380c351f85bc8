//! A module containing the [`Borrow`] capability and the [`Ref`] / [`RefMut`] handle types.
//!
//! [`Borrow`] describes how to derive a [`Slice`](crate::contiguous::Slice) view from a source
//! shape - an owning container, a fixed-size array, a C string or an existing view - and is what
//! makes methods like [`starts_with`](crate::contiguous::Slice::starts_with) polymorphic over all
//! of them.
//!
//! [`Ref`] and [`RefMut`] are thin non-owning handles over single elements. Borrowed iteration
//! yields them instead of bare references so that a pipeline over borrows looks the same as one
//! over owned values and can be lowered back to owned values with
//! [`copied`](crate::iter::Iterator::copied). Their liveness needs no runtime check: the borrow
//! checker makes a dangling handle unrepresentable.

mod borrow;
mod handle;


pub use borrow::*;
pub use handle::*;
