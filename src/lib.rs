//! This crate is my attempt at writing the core vocabulary types of a standard library from
//! scratch: an [`Option`](option::Option), a lazy pull-based [`Iterator`](iter::Iterator) with
//! composable adapters, borrow-aware [`Slice`](contiguous::Slice) /
//! [`Vector`](contiguous::Vector) views and the glue between them.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no
//! expectation for it to be used in production. None of these types are hard to find elsewhere -
//! the point is to build them myself and understand why they're shaped the way they are,
//! especially the parts that look effortless from the outside: why `unwrap` should consume its
//! receiver, why deriving an iterator has to invalidate its source, and why a slice view is
//! nothing but a pointer and a length with all the safety hanging off of the lifetime.
//!
//! # Method
//! Everything here shadows its prelude counterpart rather than re-exporting it. The crate's
//! [`Option`](option::Option) is its own enum, the [`Iterator`](iter::Iterator) trait is pull-only
//! with a deliberately small adapter set, and [`Vector`](contiguous::Vector) manages its own
//! uninitialized buffer instead of wrapping [`Vec`]. Interop with `std` exists only at explicit
//! boundaries: lossless conversions for `Option` and `Vector`, and a bridge type for driving
//! these iterators from a `for` loop.
//!
//! # Error Handling
//! Every failure in this crate is a contract violation: unwrapping an empty Option, indexing out
//! of bounds, or sub-slicing with an invalid range. These aren't expected runtime conditions that
//! deserve a [`Result`] - callers have `is_some`, `get` and friends to stay off the failure path -
//! so they panic with a strongly typed error message and unwind to whoever is prepared to catch
//! them.
//!
//! # Dependencies
//! Only `derive_more`, because hand-writing `From` and `Display` for every error enum variant is
//! very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod borrow;
pub mod contiguous;
pub mod error;
pub mod iter;
pub mod option;
pub mod tuple;

pub(crate) mod util;
