use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut, RangeBounds};
use std::ptr;
use std::slice;

use crate::borrow::{Borrow, Ref, RefMut};
use crate::contiguous::slice::{Iter, IterMut, Slice, SliceMut};
use crate::option::Option::{self, None, Some};
use crate::util::fmt::write_list;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// An owning, variable-size contiguous collection exposing the whole [`Slice`] interface by
/// delegation.
///
/// The buffer is a boxed run of possibly-uninitialized slots; the first `len` of them are always
/// initialized. Unlike [`Vec`], the capacity is guaranteed to be exactly the value provided to
/// any of the capacity manipulation functions (growth on [`push`](Vector::push) doubles, starting
/// from 2).
///
/// Conversion to and from [`Vec`] hands the allocation across without copying.
///
/// # Examples
/// ```
/// use mini_std::contiguous::Vector;
///
/// let mut vec = Vector::new();
/// for i in 1..=3 {
///     vec.push(i);
/// }
/// assert_eq!(vec.to_string(), "[1, 2, 3]");
/// ```
pub struct Vector<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            buf: Box::new_uninit_slice(0),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// for i in 1..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Box::new_uninit_slice(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap)
    /// to do so. Using this method on a Vector without spare capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees len < cap, so the slot exists and is writable.
        unsafe { self.buf.get_unchecked_mut(self.len).write(value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::contiguous::Vector;
    /// use mini_std::option::Option::{None, Some};
    ///
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.pop(), Some(2));
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading so the slot is logically uninitialized again.
            self.len -= 1;

            // SAFETY: len has just been decremented and all values < len were initialized. The
            // read makes a bitwise copy and the slot is never touched as initialized again, which
            // is as close as we can get to actually moving the value off of the heap.
            let value = unsafe { self.buf.get_unchecked(self.len).as_ptr().read() };
            Some(value)
        }
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap <= self.cap() {
            return;
        }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Drops all elements, keeping the allocation.
    pub fn clear(&mut self) {
        let len = self.len;
        // Protect against double drops if an element's Drop panics: everything is logically gone
        // before the first drop runs.
        self.len = 0;

        for i in 0..len {
            // SAFETY: All values < the old len are initialized and dropped exactly once here.
            unsafe { self.buf[i].assume_init_drop() };
        }
    }

    /// Reborrows the initialized prefix as a plain borrowed sequence.
    pub fn items(&self) -> &[T] {
        // SAFETY: The first len slots are always initialized, and MaybeUninit<T> has the same
        // layout as T.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast(), self.len) }
    }

    /// Reborrows the initialized prefix as a plain mutable borrowed sequence.
    pub fn items_mut(&mut self) -> &mut [T] {
        // SAFETY: As for items, with exclusivity inherited from the &mut self borrow.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast(), self.len) }
    }

    /// Derives a read-only [`Slice`] view over all elements.
    pub fn as_slice(&self) -> Slice<'_, T> {
        Slice::new(self.items())
    }

    /// Derives an exclusive [`SliceMut`] view over all elements.
    pub fn as_slice_mut(&mut self) -> SliceMut<'_, T> {
        SliceMut::new(self.items_mut())
    }

    /// See [`Slice::get`].
    pub fn get(&self, index: usize) -> Option<Ref<'_, T>> {
        self.as_slice().get(index)
    }

    /// See [`Slice::first`].
    pub fn first(&self) -> Option<Ref<'_, T>> {
        self.as_slice().first()
    }

    /// See [`SliceMut::first_mut`].
    pub fn first_mut(&mut self) -> Option<RefMut<'_, T>> {
        Option::from(self.items_mut().first_mut()).map(RefMut::new)
    }

    /// See [`Slice::last`].
    pub fn last(&self) -> Option<Ref<'_, T>> {
        self.as_slice().last()
    }

    /// Derives a narrower [`Slice`] view; see [`Slice::slice`].
    ///
    /// # Panics
    /// Panics on an invalid range, like [`Slice::slice`].
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Slice<'_, T> {
        self.as_slice().slice(range)
    }

    /// Produces a borrowed iterator over the elements, yielding [`Ref`] handles.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.items())
    }

    /// Produces a mutably borrowed iterator over the elements, yielding [`RefMut`] handles.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.items_mut())
    }

    /// Sorts the elements in place; see [`SliceMut::sort`].
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_slice_mut().sort();
    }

    /// See [`Slice::starts_with`].
    pub fn starts_with<B>(&self, needle: &B) -> bool
    where
        B: Borrow<T> + ?Sized,
        T: PartialEq,
    {
        self.as_slice().starts_with(needle)
    }

    /// Decomposes the Vector into its raw buffer and length, without dropping anything.
    pub(crate) fn into_parts(self) -> (Box<[MaybeUninit<T>]>, usize) {
        let mut this = ManuallyDrop::new(self);
        (mem::take(&mut this.buf), this.len)
    }

    /// Reallocates the buffer with the provided capacity, which must be >= len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        if new_cap == self.cap() {
            return;
        }

        let mut new_buf = Box::new_uninit_slice(new_cap);

        // SAFETY: Both buffers hold at least len slots and don't overlap. The values are moved
        // bitwise; the old buffer holds only MaybeUninit slots afterwards, so dropping it
        // deallocates without touching them.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        self.buf = new_buf;
    }

    /// Grows the buffer to allow for the insertion of additional elements. After calling this,
    /// the Vector can take at least one more element.
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).expect("Capacity overflow!"),
            MIN_CAP,
        );

        self.realloc_with_cap(new_cap);
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();

        // Implicitly drop self.buf, containing only MaybeUninit slots with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.items_mut()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.as_slice().check_index(index);
        // SAFETY: check_index would have panicked if index were out of bounds.
        unsafe { self.items().get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.as_slice().check_index(index);
        // SAFETY: check_index would have panicked if index were out of bounds.
        unsafe { self.items_mut().get_unchecked_mut(index) }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: std::iter::IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> std::iter::FromIterator<T> for Vector<T> {
    fn from_iter<I: std::iter::IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with capacity for all N elements.
            unsafe { vec.push_unchecked(item) };
        }

        vec
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        let (buf, len) = value.into_parts();
        let cap = buf.len();
        let ptr = Box::into_raw(buf).cast::<T>();

        // SAFETY: The buffer is a Global allocation of exactly cap slots of T's layout, with the
        // first len initialized, which is precisely the Vec contract. Ownership is transferred,
        // nothing is copied.
        unsafe { Vec::from_raw_parts(ptr, len, cap) }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        let mut value = ManuallyDrop::new(value);
        let (ptr, len, cap) = (value.as_mut_ptr(), value.len(), value.capacity());

        let buf = ptr::slice_from_raw_parts_mut(ptr.cast::<MaybeUninit<T>>(), cap);
        Vector {
            // SAFETY: A Vec's buffer is a Global allocation of exactly cap slots, matching the
            // layout of a boxed slice of cap MaybeUninit<T>. Ownership is transferred, nothing is
            // copied.
            buf: unsafe { Box::from_raw(buf) },
            len,
        }
    }
}

impl From<String> for Vector<u8> {
    fn from(value: String) -> Self {
        Vec::from(value).into()
    }
}

impl TryFrom<Vector<u8>> for String {
    type Error = <String as TryFrom<Vec<u8>>>::Error;

    fn try_from(value: Vector<u8>) -> Result<Self, Self::Error> {
        Vec::from(value).try_into()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len);

        for value in self.items() {
            // SAFETY: vec has been created with capacity for all len elements.
            unsafe { vec.push_unchecked(value.clone()) };
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items() == other.items()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items().hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.items())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, self.items())
    }
}
