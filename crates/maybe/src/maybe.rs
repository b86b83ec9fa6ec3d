use core::fmt;

use crate::error::AbsentError;
use crate::iter::{IntoIter, Iter};

/// Convertible into an empty [`Maybe<T>`] for any `T`.
///
/// Lets a function declared to return `Maybe<T>` write `return Nothing.into();`
/// without naming `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nothing;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Slot<T> {
    Present(T),
    Absent,
}

/// Holds zero or one `T`.
///
/// Presence is fixed at construction: no method turns a populated `Maybe`
/// empty in place. Transformations return a new `Maybe`, and the consuming
/// ones (`flat_map`, `map_into`, `get_or_else`) move the payload instead of
/// cloning it, so `T` does not need to be `Clone`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    slot: Slot<T>,
}

/// Constructs a `Maybe` holding `val`.
pub fn present<T>(val: T) -> Maybe<T> {
    Maybe::new(val)
}

/// Constructs an empty `Maybe`.
pub fn absent<T>() -> Maybe<T> {
    Maybe::nothing()
}

#[cold]
#[track_caller]
fn absent_access() -> ! {
    tracing::error!("get() called on an absent Maybe");
    panic!("called get() on an absent Maybe")
}

impl<T> Maybe<T> {
    /// Constructs a populated `Maybe`.
    #[inline]
    pub fn new(val: T) -> Self {
        Maybe { slot: Slot::Present(val) }
    }

    /// Constructs an empty `Maybe`.
    #[inline]
    pub const fn nothing() -> Self {
        Maybe { slot: Slot::Absent }
    }

    /// Returns true if a value is held.
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Returns true if no value is held.
    #[must_use]
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is absent. Guard with [`is_present`](Self::is_present),
    /// or use [`try_get`](Self::try_get) / [`get_or_else`](Self::get_or_else).
    #[track_caller]
    pub fn get(&self) -> &T {
        match &self.slot {
            Slot::Present(val) => val,
            Slot::Absent => absent_access(),
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics if `self` is absent.
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Slot::Present(val) => val,
            Slot::Absent => absent_access(),
        }
    }

    /// Borrows the held value, or returns [`AbsentError`].
    pub fn try_get(&self) -> Result<&T, AbsentError> {
        match &self.slot {
            Slot::Present(val) => Ok(val),
            Slot::Absent => Err(AbsentError),
        }
    }

    /// Returns the held value, or `default` if absent.
    pub fn get_or_else(self, default: T) -> T {
        match self.slot {
            Slot::Present(val) => val,
            Slot::Absent => default,
        }
    }

    /// Borrowing form of [`get_or_else`](Self::get_or_else).
    pub fn get_or_else_ref<'a>(&'a self, default: &'a T) -> &'a T {
        match &self.slot {
            Slot::Present(val) => val,
            Slot::Absent => default,
        }
    }

    /// Returns the held value, or the result of `f` if absent. `f` only runs
    /// when needed.
    pub fn get_or_else_with<F: FnOnce() -> T>(self, f: F) -> T {
        match self.slot {
            Slot::Present(val) => val,
            Slot::Absent => f(),
        }
    }

    /// Applies `f` to a borrow of the held value and wraps the result.
    ///
    /// The source keeps its value. Absent stays absent and `f` is not called.
    pub fn map<U, F: FnOnce(&T) -> U>(&self, f: F) -> Maybe<U> {
        match &self.slot {
            Slot::Present(val) => Maybe::new(f(val)),
            Slot::Absent => Maybe::nothing(),
        }
    }

    /// Moves the held value into `f` and wraps the result.
    pub fn map_into<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self.slot {
            Slot::Present(val) => Maybe::new(f(val)),
            Slot::Absent => Maybe::nothing(),
        }
    }

    /// Moves the held value into `f` and returns its result as is.
    ///
    /// This is the bind that lets fallible steps chain without nesting. Once a
    /// step yields absence every later `flat_map` in the chain is skipped.
    pub fn flat_map<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self.slot {
            Slot::Present(val) => f(val),
            Slot::Absent => Maybe::nothing(),
        }
    }

    /// Borrowing form of [`flat_map`](Self::flat_map).
    pub fn flat_map_ref<U, F: FnOnce(&T) -> Maybe<U>>(&self, f: F) -> Maybe<U> {
        match &self.slot {
            Slot::Present(val) => f(val),
            Slot::Absent => Maybe::nothing(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match &self.slot {
            Slot::Present(val) => Maybe::new(val),
            Slot::Absent => Maybe::nothing(),
        }
    }

    /// Iterates over the held value, if any, by shared reference.
    ///
    /// There is no mutable counterpart: iteration never hands out `&mut T`,
    /// even from a mutable binding. Use [`get_mut`](Self::get_mut) instead.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.try_get().ok())
    }

    /// Converts into the standard library's `Option`.
    pub fn into_option(self) -> Option<T> {
        match self.slot {
            Slot::Present(val) => Some(val),
            Slot::Absent => None,
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the referenced value into an owned `Maybe<T>`.
    pub fn cloned(self) -> Maybe<T> {
        self.map_into(T::clone)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::nothing()
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Maybe::nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Maybe::new(val),
            None => Maybe::nothing(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(m: Maybe<T>) -> Self {
        m.into_option()
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_absent()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    fn eq(&self, other: &Maybe<T>) -> bool {
        other.is_absent()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(val) => f.debug_tuple("Present").field(val).finish(),
            Slot::Absent => f.write_str("Absent"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Collects into a populated `Maybe<V>` only if every element is present.
impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        let collected: Option<V> = iter.into_iter().map(Maybe::into_option).collect();
        collected.into()
    }
}
