//! A module containing the crate's pull-based [`Iterator`] trait and everything around it:
//! the [`SizeHint`] advisory bound, the lazy adapters returned by its combinators, the
//! [`FromIterator`] collection protocol and the sources / bridges which connect it to `std`'s
//! iteration world.
//!
//! # Ownership
//! Every combinator takes `self` by value. Deriving an iterator from an iterator *moves* the
//! source into the adapter, so the source can't be driven independently afterwards - the borrow
//! checker enforces the single-owner rule that a lazy pipeline needs to stay coherent.
//!
//! # Laziness
//! No adapter does any work until its consumer pulls [`next`](Iterator::next). The terminal
//! operations ([`collect`](Iterator::collect), [`sum`](Iterator::sum), [`any`](Iterator::any))
//! are the only methods that drive a pipeline to completion.

mod adapters;
mod bridge;
mod collect;
mod iterator;
mod size_hint;
mod sources;


pub use adapters::*;
pub use bridge::*;
pub use collect::*;
pub use iterator::*;
pub use size_hint::*;
pub use sources::*;
