//! A module containing [`Pair`], the two-element heterogeneous grouping produced by
//! [`zip`](crate::iter::Iterator::zip) and [`enumerate`](crate::iter::Iterator::enumerate).
//!
//! Native tuples already cover arbitrary arity, destructure and print via [`Debug`]; [`Pair`]
//! exists so that the iterator pipeline's element type also has the stable `(a, b)` [`Display`]
//! rendering. It converts losslessly to and from `(A, B)`.
//!
//! [`Display`]: std::fmt::Display
//! [`Debug`]: std::fmt::Debug

mod pair;


pub use pair::*;
