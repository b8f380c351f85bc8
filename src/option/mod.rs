//! A module containing [`Option`], a tagged, possibly-empty single-value container.
//!
//! This is the crate's own enum, not a re-export of the prelude's. Importing it (and its
//! variants) shadows the prelude versions, which is intentional: every other type in this crate
//! speaks this `Option` at its API boundary. Conversions to and from
//! [`std::option::Option`] exist for interop.

mod option;

mod tests;

pub use option::*;
