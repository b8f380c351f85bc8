use std::cmp;

use crate::option::Option::{self, None, Some};

/// An advisory bound on the number of elements an iterator has left: a lower bound, and an upper
/// bound if one is known.
///
/// Size hints exist purely so terminal consumers can pre-allocate; they must never be trusted for
/// correctness. An iterator reporting `exact(5)` and producing three elements is misbehaving, but
/// a consumer relying on the five is the one with the bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    pub lower: usize,
    pub upper: Option<usize>,
}

impl SizeHint {
    /// No information at all: at least zero elements, no upper bound.
    pub const UNKNOWN: SizeHint = SizeHint { lower: 0, upper: None };

    /// An exact count: both bounds equal to `len`.
    pub const fn exact(len: usize) -> SizeHint {
        SizeHint {
            lower: len,
            upper: Some(len),
        }
    }

    /// A lower bound with no known upper bound.
    pub const fn at_least(lower: usize) -> SizeHint {
        SizeHint { lower, upper: None }
    }

    /// Combines two hints the way [`zip`](crate::iter::Iterator::zip) requires: the result is
    /// bounded by the shorter side, so both bounds take the minimum of whatever is known.
    pub fn min(self, other: SizeHint) -> SizeHint {
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(cmp::min(a, b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };

        SizeHint {
            lower: cmp::min(self.lower, other.lower),
            upper,
        }
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
