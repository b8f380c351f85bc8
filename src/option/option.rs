use std::fmt::{self, Display, Formatter};

use crate::borrow::{Ref, RefMut};
use crate::error::EmptyOption;
use crate::util::result::ResultExtension;

use self::Option::{None, Some};

/// A container holding either exactly one value of type `T` or nothing at all, used in place of
/// null or sentinel values.
///
/// `None` is declared before `Some` so that the derived ordering places an empty Option before a
/// populated one.
///
/// # Examples
/// ```
/// use mini_std::option::Option::{self, None, Some};
///
/// let populated = Some(5);
/// assert!(populated.is_some());
/// assert_eq!(populated.map(|v| v * 2), Some(10));
///
/// let empty: Option<i32> = None;
/// assert!(empty.is_none());
/// assert!(empty < populated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Option<T> {
    #[default]
    None,
    Some(T),
}

impl<T> Option<T> {
    /// Returns true if the Option holds a value.
    pub const fn is_some(&self) -> bool {
        matches!(*self, Some(_))
    }

    /// Returns true if the Option is empty.
    pub const fn is_none(&self) -> bool {
        matches!(*self, None)
    }

    /// Transforms the held value with `f`, wrapping the result in a new Option. An empty Option
    /// maps to an empty Option and `f` is never invoked for it.
    ///
    /// # Examples
    /// ```
    /// use mini_std::option::Option::{self, None, Some};
    ///
    /// assert_eq!(Some(3).map(|v| v * v), Some(9));
    /// assert_eq!(None::<i32>.map(|v| v * v), None);
    /// ```
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self {
            Some(value) => Some(f(value)),
            None => None,
        }
    }

    /// Monadic bind: applies `f` (which itself produces an Option) to the held value, or
    /// propagates emptiness.
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    /// Moves the held value out of the Option.
    ///
    /// This consumes the Option, so a value can only ever be unwrapped once; re-using the source
    /// afterwards is a compile error. To extract from an Option that has to stay in place, go
    /// through [`take`](Option::take).
    ///
    /// # Panics
    /// Panics if the Option is empty.
    ///
    /// # Examples
    /// ```
    /// use mini_std::option::Option::Some;
    ///
    /// let opt = Some(3);
    /// assert_eq!(opt.unwrap(), 3);
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Some(value) => value,
            None => Err(EmptyOption).throw(),
        }
    }

    /// Returns the held value, or `default` if the Option is empty.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            None => default,
        }
    }

    /// Moves the contents out of the Option, leaving it empty.
    ///
    /// The first call on a populated Option returns its value; any later call finds the Option
    /// empty and returns `None`.
    ///
    /// # Examples
    /// ```
    /// use mini_std::option::Option::{None, Some};
    ///
    /// let mut opt = Some(3);
    /// assert_eq!(opt.take(), Some(3));
    /// assert_eq!(opt.take(), None);
    /// ```
    pub const fn take(&mut self) -> Option<T> {
        std::mem::replace(self, None)
    }

    /// Replaces the contents of the Option with `value`, returning the previous contents.
    pub const fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Some(value))
    }

    /// Produces a borrowing Option over the held value without consuming the source.
    pub const fn as_ref(&self) -> Option<Ref<'_, T>> {
        match self {
            Some(value) => Some(Ref::new(value)),
            None => None,
        }
    }

    /// Produces a mutably borrowing Option over the held value without consuming the source.
    pub const fn as_mut(&mut self) -> Option<RefMut<'_, T>> {
        match self {
            Some(value) => Some(RefMut::new(value)),
            None => None,
        }
    }
}

impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Some(value)
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            std::option::Option::Some(value) => Some(value),
            std::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => std::option::Option::Some(value),
            None => std::option::Option::None,
        }
    }
}

impl<T: Display> Display for Option<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => write!(f, "Some({value})"),
            None => write!(f, "None"),
        }
    }
}
