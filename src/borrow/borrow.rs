use std::ffi::CStr;

use crate::contiguous::{Slice, SliceMut, Vector};

/// A capability describing how to derive a [`Slice`] view from a source type.
///
/// Anything with contiguous elements and a knowable length can implement this: owning containers
/// ([`Vector`], [`Vec`]), fixed-size arrays, existing views and C strings. Generic consumers like
/// [`starts_with`](Slice::starts_with) accept `impl Borrow<T>` so that every one of those shapes
/// works as an argument.
///
/// A [`CStr`] borrows as its logical bytes: everything up to, and excluding, the nul terminator.
/// A plain byte array has no terminator convention and borrows at its full length.
pub trait Borrow<T> {
    /// Derives a [`Slice`] view over the borrowed elements.
    fn borrow(&self) -> Slice<'_, T>;
}

impl<T> Borrow<T> for [T] {
    fn borrow(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T, const N: usize> Borrow<T> for [T; N] {
    fn borrow(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl<T> Borrow<T> for Slice<'_, T> {
    fn borrow(&self) -> Slice<'_, T> {
        *self
    }
}

impl<T> Borrow<T> for SliceMut<'_, T> {
    fn borrow(&self) -> Slice<'_, T> {
        self.as_slice()
    }
}

impl<T> Borrow<T> for Vector<T> {
    fn borrow(&self) -> Slice<'_, T> {
        self.as_slice()
    }
}

impl<T> Borrow<T> for Vec<T> {
    fn borrow(&self) -> Slice<'_, T> {
        Slice::new(self)
    }
}

impl Borrow<u8> for CStr {
    fn borrow(&self) -> Slice<'_, u8> {
        Slice::new(self.to_bytes())
    }
}
