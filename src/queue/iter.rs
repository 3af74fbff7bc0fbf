use std::iter::FusedIterator;
use std::vec;

use super::QueueError;

// Borrowing iterator: walks a permutation of slot indices drawn when it was created
pub struct Iter<'a, T> {
    items: &'a [T],
    order: Vec<usize>,
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(items: &'a [T], order: Vec<usize>) -> Self {
        Iter {
            items,
            order,
            cursor: 0,
        }
    }

    /// Yields the next item, or `QueueError::EndOfSequence` once every item has been visited.
    pub fn advance(&mut self) -> Result<&'a T, QueueError> {
        self.next().ok_or(QueueError::EndOfSequence)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(&self.items[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Owning iterator over storage that was already shuffled in place
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(items: Vec<T>) -> Self {
        IntoIter {
            inner: items.into_iter(),
        }
    }

    pub fn advance(&mut self) -> Result<T, QueueError> {
        self.inner.next().ok_or(QueueError::EndOfSequence)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
