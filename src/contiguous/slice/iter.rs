use std::mem;

use crate::borrow::{Ref, RefMut};
use crate::iter::{IntoIterator, Iterator, SizeHint};
use crate::option::Option::{self, None, Some};

use crate::contiguous::Slice;

/// A borrowed iterator over contiguous elements, yielding [`Ref`] handles in position order.
pub struct Iter<'a, T> {
    items: &'a [T],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Iter<'a, T> {
        Iter { items }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Ref<'a, T>;

    fn next(&mut self) -> Option<Ref<'a, T>> {
        match self.items.split_first() {
            std::option::Option::Some((first, rest)) => {
                self.items = rest;
                Some(Ref::new(first))
            }
            std::option::Option::None => None,
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.items.len())
    }
}

/// A mutably borrowed iterator over contiguous elements, yielding [`RefMut`] handles in position
/// order.
pub struct IterMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> IterMut<'a, T> {
        IterMut { items }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = RefMut<'a, T>;

    fn next(&mut self) -> Option<RefMut<'a, T>> {
        // Detach the remaining elements from self so the yielded handle isn't tied to this
        // borrow of the iterator.
        let items = mem::take(&mut self.items);
        match items.split_first_mut() {
            std::option::Option::Some((first, rest)) => {
                self.items = rest;
                Some(RefMut::new(first))
            }
            std::option::Option::None => None,
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.items.len())
    }
}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = Ref<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
