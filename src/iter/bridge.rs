use crate::iter::Iterator;

/// Drives one of this crate's iterators through the standard iteration protocol, created by
/// [`into_std`](Iterator::into_std).
///
/// This is what makes `for` loops work: the loop pulls [`next`](Iterator::next) until an empty
/// Option is produced.
///
/// # Examples
/// ```
/// use mini_std::contiguous::Vector;
/// use mini_std::iter::Iterator;
///
/// let vec = Vector::from([1, 2, 3]);
/// let mut total = 0;
/// for value in vec.iter().copied().into_std() {
///     total += value;
/// }
/// assert_eq!(total, 6);
/// ```
pub struct StdBridge<I>(I);

impl<I> StdBridge<I> {
    pub(crate) fn new(inner: I) -> StdBridge<I> {
        StdBridge(inner)
    }
}

impl<I: Iterator> std::iter::Iterator for StdBridge<I> {
    type Item = I::Item;

    fn next(&mut self) -> std::option::Option<I::Item> {
        self.0.next().into()
    }

    fn size_hint(&self) -> (usize, std::option::Option<usize>) {
        let hint = self.0.size_hint();
        (hint.lower, hint.upper.into())
    }
}
