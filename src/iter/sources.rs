use crate::iter::{Iterator, SizeHint};
use crate::option::Option;

/// Creates an iterator from nothing but a "produce next value" closure.
///
/// The hint defaults to [`UNKNOWN`](SizeHint::UNKNOWN) and can be attached with
/// [`with_hint`](FromFn::with_hint) when the closure knows more than it lets on.
///
/// # Examples
/// ```
/// use mini_std::iter::{self, Iterator};
/// use mini_std::option::Option::{None, Some};
///
/// let mut countdown = 3;
/// let mut it = iter::from_fn(move || {
///     if countdown == 0 {
///         None
///     } else {
///         countdown -= 1;
///         Some(countdown)
///     }
/// });
///
/// assert_eq!(it.next(), Some(2));
/// assert_eq!(it.next(), Some(1));
/// assert_eq!(it.next(), Some(0));
/// assert_eq!(it.next(), None);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn {
        f,
        hint: SizeHint::UNKNOWN,
    }
}

/// An iterator wrapping a bare production closure, created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
    hint: SizeHint,
}

impl<F> FromFn<F> {
    /// Attaches an advisory size hint. The hint is static: it doesn't shrink as values are
    /// produced, which is fine for something consumers may only use for pre-allocation.
    pub fn with_hint(self, hint: SizeHint) -> FromFn<F> {
        FromFn { hint, ..self }
    }
}

impl<T, F> Iterator for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.f)()
    }

    fn size_hint(&self) -> SizeHint {
        self.hint
    }
}

/// Adapts any [`std::iter::IntoIterator`] into this crate's [`Iterator`], carrying its size hint
/// across.
///
/// # Examples
/// ```
/// use mini_std::iter::{self, Iterator};
///
/// assert_eq!(iter::from_std(1..=4).map(|v| v * v).sum(), 30);
/// ```
pub fn from_std<I>(iter: I) -> FromStd<I::IntoIter>
where
    I: std::iter::IntoIterator,
{
    FromStd(iter.into_iter())
}

/// An iterator driving a `std` iterator, created by [`from_std`].
pub struct FromStd<I>(I);

impl<I: std::iter::Iterator> Iterator for FromStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.0.next().into()
    }

    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.0.size_hint();
        SizeHint {
            lower,
            upper: upper.into(),
        }
    }
}
