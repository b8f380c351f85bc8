use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Bound, Deref, DerefMut, Index, IndexMut, RangeBounds};
use std::ptr::NonNull;
use std::slice;

use crate::borrow::{Borrow, Ref, RefMut};
use crate::contiguous::slice::{Iter, IterMut};
use crate::error::{ContractViolation, EndOutOfBounds, IndexOutOfBounds, StartAfterEnd};
use crate::option::Option::{self, None};
use crate::util::fmt::write_list;
use crate::util::result::ResultExtension;

/// Resolves a [`RangeBounds`] against a view of length `len` into a concrete `(start, end)`
/// pair: start defaults to 0 and end to `len`. The two possible violations are reported
/// distinctly, start > end first.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(
    range: R,
    len: usize,
) -> Result<(usize, usize), ContractViolation> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end + 1,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        return Err(StartAfterEnd { start, end }.into());
    }
    if end > len {
        return Err(EndOutOfBounds { end, len }.into());
    }

    Ok((start, end))
}

/// A non-owning, read-only view over a contiguous range of elements: a raw start pointer and a
/// length.
///
/// A `Slice` never owns memory. The lifetime parameter ties it to the storage it was derived
/// from, so - unlike the raw-parts constructor suggests - a safely obtained Slice can't outlive
/// its elements. Sub-slicing re-derives a narrower view over the same storage.
///
/// # Examples
/// ```
/// use mini_std::contiguous::Slice;
///
/// let items = [1, 2, 3, 4];
/// let slice = Slice::new(&items);
/// assert_eq!(slice.slice(1..3).to_string(), "[2, 3]");
/// assert_eq!(slice.slice(2..).to_string(), "[3, 4]");
/// assert_eq!(slice.slice(..2).to_string(), "[1, 2]");
/// assert!(slice.starts_with(&[1, 2]));
/// ```
pub struct Slice<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> Slice<'a, T> {
    /// Creates a Slice over an existing borrowed sequence.
    pub const fn new(items: &'a [T]) -> Slice<'a, T> {
        // SAFETY: A slice's data pointer is never null.
        let ptr = unsafe { NonNull::new_unchecked(items.as_ptr().cast_mut()) };
        Slice {
            ptr,
            len: items.len(),
            _marker: PhantomData,
        }
    }

    /// Constructs a Slice from a pointer and a length, with no validation at all.
    ///
    /// # Safety
    /// The caller must guarantee that `ptr` points to `len` initialized elements which stay live
    /// and unmutated for the lifetime `'a`. Nothing checks this; a Slice over a dead range is
    /// undefined behavior at the first access.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> Slice<'a, T> {
        Slice {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the view.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view covers no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reborrows the view as a plain borrowed sequence, at the full lifetime `'a`.
    pub const fn items(&self) -> &'a [T] {
        // SAFETY: ptr and len describe a live borrowed range for 'a by construction.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a borrow handle over the element at `index`, or an empty Option if `index` is out
    /// of bounds.
    pub fn get(&self, index: usize) -> Option<Ref<'a, T>> {
        Option::from(self.items().get(index)).map(Ref::new)
    }

    /// Returns the element at `index` without any bounds check.
    ///
    /// # Safety
    /// The caller asserts that `index < len()`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        // SAFETY: The caller asserts that index is in bounds.
        unsafe { self.items().get_unchecked(index) }
    }

    /// Returns a borrow handle over the first element, or an empty Option when the view is empty.
    pub fn first(&self) -> Option<Ref<'a, T>> {
        self.get(0)
    }

    /// Returns a borrow handle over the last element, or an empty Option when the view is empty.
    pub fn last(&self) -> Option<Ref<'a, T>> {
        match self.len {
            0 => None,
            len => self.get(len - 1),
        }
    }

    /// Re-derives a narrower view over the given range; the start bound defaults to 0 and the end
    /// bound to [`len`](Slice::len).
    ///
    /// # Panics
    /// Panics if the resolved start is greater than the resolved end, or the end exceeds the
    /// length; the two violations carry distinct messages.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Slice<'a, T> {
        self.try_slice(range).throw()
    }

    /// The non-panicking form of [`slice`](Slice::slice).
    pub fn try_slice<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<Slice<'a, T>, ContractViolation> {
        let (start, end) = resolve_range(range, self.len)?;

        // SAFETY: start <= end <= len, so the derived range stays within the borrowed storage.
        Ok(unsafe { Slice::from_raw_parts(NonNull::new_unchecked(self.ptr.as_ptr().add(start)), end - start) })
    }

    /// Produces a borrowed iterator over the elements in position order. Iteration is single-pass
    /// but a fresh iterator can be derived by calling `iter()` again.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.items())
    }

    /// Returns true iff the view is at least as long as `needle` and its leading elements equal
    /// the needle's, pairwise.
    ///
    /// The needle may be anything with a [`Borrow`] rule: another view, an owning container, a
    /// fixed-size array or a C string.
    pub fn starts_with<B>(&self, needle: &B) -> bool
    where
        B: Borrow<T> + ?Sized,
        T: PartialEq,
    {
        let needle = needle.borrow();
        needle.len() <= self.len && self.items()[..needle.len()] == *needle.items()
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
            .throw()
        }
    }
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(value: &'a [T]) -> Self {
        Slice::new(value)
    }
}

impl<'a, T> From<Slice<'a, T>> for &'a [T] {
    fn from(value: Slice<'a, T>) -> Self {
        value.items()
    }
}

impl<T> Deref for Slice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items()
    }
}

impl<T> Index<usize> for Slice<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.check_index(index);
        // SAFETY: check_index would have panicked if index were out of bounds.
        unsafe { self.get_unchecked(index) }
    }
}

impl<T: PartialEq> PartialEq for Slice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // Slice equality on the std side compares length first and short-circuits on the first
        // mismatching pair.
        self.items() == other.items()
    }
}

impl<T: Eq> Eq for Slice<'_, T> {}

impl<T: Hash> Hash for Slice<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items().hash(state);
    }
}

impl<T: Debug> Debug for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("contents", &self.items())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for Slice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.items())
    }
}

/// The exclusive counterpart of [`Slice`]: a non-owning view which can also mutate, reorder and
/// hand out mutable borrow handles over its elements.
///
/// An exclusive view can't be duplicated, so `SliceMut` is not [`Copy`] and consuming operations
/// ([`slice_mut`](SliceMut::slice_mut), [`into_slice`](SliceMut::into_slice)) take it by value.
pub struct SliceMut<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceMut<'a, T> {
    /// Creates a SliceMut over an existing exclusively borrowed sequence.
    pub const fn new(items: &'a mut [T]) -> SliceMut<'a, T> {
        let len = items.len();
        // SAFETY: A slice's data pointer is never null.
        let ptr = unsafe { NonNull::new_unchecked(items.as_mut_ptr()) };
        SliceMut {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Constructs a SliceMut from a pointer and a length, with no validation at all.
    ///
    /// # Safety
    /// The caller must guarantee that `ptr` points to `len` initialized elements which stay live,
    /// and exclusively reachable through this view, for the lifetime `'a`.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, len: usize) -> SliceMut<'a, T> {
        SliceMut {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn items(&self) -> &[T] {
        // SAFETY: ptr and len describe a live exclusively borrowed range by construction; the
        // result reborrows it immutably for as long as self is borrowed.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) const fn items_mut(&mut self) -> &mut [T] {
        // SAFETY: ptr and len describe a live exclusively borrowed range by construction; the
        // result reborrows it for as long as self is mutably borrowed.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Reborrows as a shared [`Slice`] for as long as self is borrowed.
    pub const fn as_slice(&self) -> Slice<'_, T> {
        // SAFETY: ptr and len describe a live borrowed range by construction.
        unsafe { Slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Downgrades into a shared [`Slice`] at the full lifetime, giving up mutable access.
    pub const fn into_slice(self) -> Slice<'a, T> {
        // SAFETY: ptr and len describe a live borrowed range for 'a by construction.
        unsafe { Slice::from_raw_parts(self.ptr, self.len) }
    }

    pub fn get(&self, index: usize) -> Option<Ref<'_, T>> {
        self.as_slice().get(index)
    }

    /// Returns a mutable borrow handle over the element at `index`, or an empty Option if `index`
    /// is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<RefMut<'_, T>> {
        Option::from(self.items_mut().get_mut(index)).map(RefMut::new)
    }

    pub fn first(&self) -> Option<Ref<'_, T>> {
        self.get(0)
    }

    /// Returns a mutable borrow handle over the first element, or an empty Option when the view
    /// is empty.
    pub fn first_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.get_mut(0)
    }

    pub fn last(&self) -> Option<Ref<'_, T>> {
        self.as_slice().last()
    }

    /// Re-derives a narrower shared view; see [`Slice::slice`].
    ///
    /// # Panics
    /// Panics on an invalid range, like [`Slice::slice`].
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Slice<'_, T> {
        self.as_slice().slice(range)
    }

    /// Re-derives a narrower exclusive view, consuming self: two exclusive views over the same
    /// storage must never coexist.
    ///
    /// # Panics
    /// Panics on an invalid range, like [`Slice::slice`].
    pub fn slice_mut<R: RangeBounds<usize>>(self, range: R) -> SliceMut<'a, T> {
        let (start, end) = resolve_range(range, self.len).throw();

        // SAFETY: start <= end <= len, so the derived range stays within the borrowed storage,
        // and self is consumed so the exclusive borrow moves rather than duplicates.
        unsafe {
            SliceMut::from_raw_parts(NonNull::new_unchecked(self.ptr.as_ptr().add(start)), end - start)
        }
    }

    /// Produces a borrowed iterator over the elements in position order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.items())
    }

    /// Produces a mutably borrowed iterator over the elements in position order, yielding
    /// [`RefMut`] handles.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.items_mut())
    }

    /// Sorts the elements in place. The sort is stable: equal elements keep their relative order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        let items = self.items_mut();

        // Insertion sort by adjacent swaps. Quadratic, but in-place and stable by construction:
        // an element only ever moves past strictly greater neighbours.
        for sorted_until in 1..items.len() {
            let mut index = sorted_until;
            while index > 0 && items[index - 1] > items[index] {
                items.swap(index - 1, index);
                index -= 1;
            }
        }
    }

    /// See [`Slice::starts_with`].
    pub fn starts_with<B>(&self, needle: &B) -> bool
    where
        B: Borrow<T> + ?Sized,
        T: PartialEq,
    {
        self.as_slice().starts_with(needle)
    }
}

impl<'a, T> From<&'a mut [T]> for SliceMut<'a, T> {
    fn from(value: &'a mut [T]) -> Self {
        SliceMut::new(value)
    }
}

impl<T> Deref for SliceMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items()
    }
}

impl<T> DerefMut for SliceMut<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.items_mut()
    }
}

impl<T> Index<usize> for SliceMut<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.as_slice().check_index(index);
        // SAFETY: check_index would have panicked if index were out of bounds.
        unsafe { self.items().get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for SliceMut<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.as_slice().check_index(index);
        // SAFETY: check_index would have panicked if index were out of bounds.
        unsafe { self.items_mut().get_unchecked_mut(index) }
    }
}

impl<T: PartialEq> PartialEq for SliceMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items() == other.items()
    }
}

impl<T: Eq> Eq for SliceMut<'_, T> {}

impl<T: Debug> Debug for SliceMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceMut")
            .field("contents", &self.items())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SliceMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.items())
    }
}

// SAFETY: A Slice is a shared view; it is Send/Sync exactly when a shared reference to the
// elements would be.
unsafe impl<T: Sync> Send for Slice<'_, T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Slice<'_, T> {}

// SAFETY: A SliceMut is an exclusive view; it is Send exactly when an exclusive reference to the
// elements would be.
unsafe impl<T: Send> Send for SliceMut<'_, T> {}
// SAFETY: Shared access through &SliceMut only reaches &T, so Sync requires T: Sync.
unsafe impl<T: Sync> Sync for SliceMut<'_, T> {}
