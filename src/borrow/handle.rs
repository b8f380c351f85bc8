use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

/// A non-owning, read-only handle over a single element.
///
/// A `Ref` is nothing but a shared reference with a name; it exists so that borrowed iteration
/// and [`as_ref`](crate::option::Option::as_ref) hand out a dedicated element-handle type rather
/// than a bare reference. Dereference it (or call [`get`](Ref::get)) to reach the element.
pub struct Ref<'a, T>(&'a T);

impl<'a, T> Ref<'a, T> {
    pub const fn new(value: &'a T) -> Ref<'a, T> {
        Ref(value)
    }

    /// Returns the underlying reference at its full lifetime.
    pub const fn get(&self) -> &'a T {
        self.0
    }

    /// Returns an owned copy of the referenced element.
    pub fn copied(&self) -> T
    where
        T: Copy,
    {
        *self.0
    }

    /// Returns an owned clone of the referenced element.
    pub fn cloned(&self) -> T
    where
        T: Clone,
    {
        self.0.clone()
    }
}

impl<T> Clone for Ref<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ref<'_, T> {}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: PartialEq> PartialEq for Ref<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Ref<'_, T> {}

impl<T: PartialOrd> PartialOrd for Ref<'_, T> {
    fn partial_cmp(&self, other: &Self) -> std::option::Option<Ordering> {
        self.0.partial_cmp(other.0)
    }
}

impl<T: Ord> Ord for Ref<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}

impl<T: Debug> Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.0).finish()
    }
}

impl<T: Display> Display for Ref<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}

/// A non-owning, mutable handle over a single element.
///
/// The exclusive counterpart of [`Ref`], handed out by mutable borrowed iteration and
/// [`as_mut`](crate::option::Option::as_mut). An exclusive borrow can't be duplicated, so unlike
/// [`Ref`] this type is neither [`Copy`] nor [`Clone`].
pub struct RefMut<'a, T>(&'a mut T);

impl<'a, T> RefMut<'a, T> {
    pub const fn new(value: &'a mut T) -> RefMut<'a, T> {
        RefMut(value)
    }

    pub const fn get(&self) -> &T {
        self.0
    }

    pub const fn get_mut(&mut self) -> &mut T {
        self.0
    }

    /// Overwrites the referenced element, returning the previous value.
    pub const fn set(&mut self, value: T) -> T {
        std::mem::replace(self.0, value)
    }

    /// Returns an owned copy of the referenced element.
    pub fn copied(&self) -> T
    where
        T: Copy,
    {
        *self.0
    }
}

impl<T> Deref for RefMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T> DerefMut for RefMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<T: PartialEq> PartialEq for RefMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for RefMut<'_, T> {}

impl<T: Debug> Debug for RefMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefMut").field(&self.0).finish()
    }
}

impl<T: Display> Display for RefMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}
