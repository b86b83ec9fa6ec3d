//! Iterators over a [`Maybe`](crate::Maybe).
//!
//! Both yield at most one item. `Iter` only ever yields `&T`: borrowed
//! iteration is read-only whether the `Maybe` is bound mutably or not.

use core::iter::FusedIterator;

/// Borrowing iterator returned by [`Maybe::iter`](crate::Maybe::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    next: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(next: Option<&'a T>) -> Self {
        Self { next }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.is_some() as usize;
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator; moves the payload out.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    next: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(next: Option<T>) -> Self {
        Self { next }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.next.is_some() as usize;
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.next.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
