use std::mem::MaybeUninit;

use crate::contiguous::Vector;
use crate::iter::{IntoIterator, Iterator, SizeHint};
use crate::option::Option::{self, None, Some};

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, len) = self.into_parts();
        IntoIter { buf, index: 0, len }
    }
}

/// An owned iterator over a [`Vector`], draining its elements in position order.
///
/// Elements which are never pulled are dropped along with the iterator.
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    index: usize,
    len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index == self.len {
            None
        } else {
            // SAFETY: Slots in index..len are initialized and not yet moved out; index is bumped
            // before anything can observe the slot again.
            let value = unsafe { self.buf[self.index].as_ptr().read() };
            self.index += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.len - self.index)
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.index..self.len {
            // SAFETY: Slots in index..len are initialized and still owned by the iterator.
            unsafe { self.buf[i].assume_init_drop() };
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = crate::borrow::Ref<'a, T>;
    type IntoIter = crate::contiguous::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = crate::borrow::RefMut<'a, T>;
    type IntoIter = crate::contiguous::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
