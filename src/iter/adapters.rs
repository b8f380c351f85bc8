use std::ops::Deref;

use crate::iter::{Iterator, SizeHint};
use crate::option::Option::{self, None, Some};
use crate::tuple::Pair;

/// A lazy transforming iterator, created by [`map`](Iterator::map).
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Map<I, F> {
        Map { inner, f }
    }
}

impl<I, U, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.inner.next().map(&mut self.f)
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// An iterator of `(index, value)` pairs, created by [`enumerate`](Iterator::enumerate).
pub struct Enumerate<I> {
    inner: I,
    index: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(inner: I) -> Enumerate<I> {
        Enumerate { inner, index: 0 }
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = Pair<usize, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next() {
            Some(value) => {
                let index = self.index;
                self.index += 1;
                Some(Pair(index, value))
            }
            None => None,
        }
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// An iterator pairing two sources, created by [`zip`](Iterator::zip).
///
/// The first exhaustion on either side stops the pair permanently: the `done` flag guarantees
/// that no further pulls reach either source, even if the non-exhausted side could still produce.
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Zip<A, B> {
        Zip { a, b, done: false }
    }
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = Pair<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(a) = self.a.next() else {
            self.done = true;
            return None;
        };
        // A value already pulled from the first side is discarded here if the second side has
        // nothing to pair it with.
        let Some(b) = self.b.next() else {
            self.done = true;
            return None;
        };

        Some(Pair(a, b))
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::exact(0)
        } else {
            self.a.size_hint().min(self.b.size_hint())
        }
    }
}

/// An iterator lowering borrow handles to owned copies, created by [`copied`](Iterator::copied).
pub struct Copied<I> {
    inner: I,
}

impl<I> Copied<I> {
    pub(crate) fn new(inner: I) -> Copied<I> {
        Copied { inner }
    }
}

impl<I> Iterator for Copied<I>
where
    I: Iterator,
    I::Item: Deref,
    <I::Item as Deref>::Target: Copy,
{
    type Item = <I::Item as Deref>::Target;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|handle| *handle)
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}
