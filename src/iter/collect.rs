use crate::contiguous::Vector;
use crate::iter::Iterator;
use crate::option::Option::Some;

/// Conversion from an [`Iterator`]: how a container builds itself by draining a sequence.
///
/// Implementors should pre-size from the iterator's lower size-hint bound - and treat it as
/// nothing more than a hint.
pub trait FromIterator<A>: Sized {
    fn from_iter<I: Iterator<Item = A>>(iter: I) -> Self;
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: Iterator<Item = T>>(mut iter: I) -> Self {
        let mut vec = Vector::with_cap(iter.size_hint().lower);

        while let Some(value) = iter.next() {
            vec.push(value);
        }

        vec
    }
}

impl<T> FromIterator<T> for Vec<T> {
    fn from_iter<I: Iterator<Item = T>>(mut iter: I) -> Self {
        let mut vec = Vec::with_capacity(iter.size_hint().lower);

        while let Some(value) = iter.next() {
            vec.push(value);
        }

        vec
    }
}
