use std::fmt::{self, Display, Formatter};

/// A fixed-arity ordered grouping of two values of (possibly) different types.
///
/// Fields are addressed by compile-time index (`.0`, `.1`) and the whole value destructures
/// structurally:
///
/// ```
/// use mini_std::tuple::Pair;
///
/// let pair = Pair(1, "one");
/// let Pair(number, name) = pair;
/// assert_eq!((number, name), (1, "one"));
/// assert_eq!(pair.to_string(), "(1, one)");
/// ```
///
/// The derived ordering is lexicographic, first element first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Returns the pair with its elements swapped.
    pub fn swap(self) -> Pair<B, A> {
        Pair(self.1, self.0)
    }

    /// Converts into the native tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from(value: (A, B)) -> Self {
        Pair(value.0, value.1)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        (value.0, value.1)
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
