use std::ops::{Add, Deref};

use crate::iter::{Copied, Enumerate, FromIterator, Map, SizeHint, StdBridge, Zip};
use crate::option::Option::{self, None, Some};

/// A stateful, pull-based lazy sequence: values are produced one at a time, on demand, by
/// [`next`](Iterator::next).
///
/// An iterator has a single observable state transition - from "has more" to "exhausted" - and
/// the only way to observe it is to pull. Once `next` has produced an empty
/// [`Option`](crate::option::Option), the iterator is exhausted for that pass and further calls
/// aren't required to produce anything new.
///
/// All combinators consume `self`: the derived iterator owns its source outright and the moved-
/// from binding can't be driven again. Terminal operations ([`any`](Iterator::any),
/// [`sum`](Iterator::sum), [`collect`](Iterator::collect)) likewise consume the iterator while
/// draining it.
///
/// # Examples
/// ```
/// use mini_std::contiguous::Vector;
/// use mini_std::iter::Iterator;
///
/// let vec = Vector::from([1, 2, 3, 4]);
/// let squares: Vector<i32> = vec.iter().copied().map(|v| v * v).collect();
/// assert_eq!(squares.to_string(), "[1, 4, 9, 16]");
/// ```
pub trait Iterator: Sized {
    type Item;

    /// Produces the next value, mutating the internal cursor state. Returns an empty Option once
    /// the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns an advisory bound on the remaining length, used by terminal consumers to
    /// pre-allocate and never for correctness.
    fn size_hint(&self) -> SizeHint {
        SizeHint::UNKNOWN
    }

    /// Lazily transforms each produced value with `f`. Nothing runs until the derived iterator is
    /// pulled.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Pairs each produced value with its position, counting from 0.
    fn enumerate(self) -> Enumerate<Self> {
        Enumerate::new(self)
    }

    /// Pairs this iterator with another iterable, stopping permanently the first time either side
    /// is exhausted.
    fn zip<J>(self, other: J) -> Zip<Self, J::IntoIter>
    where
        J: IntoIterator,
    {
        Zip::new(self, other.into_iter())
    }

    /// Converts an iterator over borrow handles (or anything else that dereferences) into an
    /// iterator over owned values, by copying out of each handle.
    fn copied(self) -> Copied<Self>
    where
        Self::Item: Deref,
        <Self::Item as Deref>::Target: Copy,
    {
        Copied::new(self)
    }

    /// Returns true if `predicate` holds for any produced value, pulling no further values once a
    /// match is found.
    fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        while let Some(value) = self.next() {
            if predicate(&value) {
                return true;
            }
        }

        false
    }

    /// Folds all produced values with `+`, in production order, seeded by the first value. An
    /// empty iterator yields the additive identity, spelled [`Default`].
    fn sum(mut self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Default,
    {
        let mut total = match self.next() {
            Some(first) => first,
            None => return Self::Item::default(),
        };

        while let Some(value) = self.next() {
            total = total + value;
        }

        total
    }

    /// Drains the iterator into a freshly constructed container, pre-sized from
    /// [`size_hint`](Iterator::size_hint). The container type is picked by type inference when
    /// not named explicitly:
    ///
    /// ```
    /// use mini_std::contiguous::Vector;
    /// use mini_std::iter::{self, Iterator};
    ///
    /// let vec: Vector<u32> = iter::from_std(0..4).collect();
    /// assert_eq!(vec.to_string(), "[0, 1, 2, 3]");
    /// ```
    fn collect<C>(self) -> C
    where
        C: FromIterator<Self::Item>,
    {
        C::from_iter(self)
    }

    /// Bridges into [`std::iter::Iterator`] so the sequence can drive a `for` loop, which pulls
    /// [`next`](Iterator::next) until an empty Option is produced.
    fn into_std(self) -> StdBridge<Self> {
        StdBridge::new(self)
    }
}

/// A conversion into an [`Iterator`], implemented by the containers and views of this crate.
///
/// Every `Iterator` trivially implements this by returning itself, which is what lets
/// [`zip`](Iterator::zip) accept iterators and containers interchangeably.
pub trait IntoIterator {
    type Item;
    type IntoIter: Iterator<Item = Self::Item>;

    fn into_iter(self) -> Self::IntoIter;
}

impl<I: Iterator> IntoIterator for I {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self
    }
}
