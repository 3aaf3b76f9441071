// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lazy iterators returned by [`OneBasedVec::keys()`], [`OneBasedVec::values()`] and
//! [`OneBasedVec::entries()`]. Each call produces a fresh iterator, and every slot is
//! visited (holes yield [`None`]).

use super::ResultTransform;
use crate::{OneBasedVec, Slots};
use std::{iter::{Enumerate, FusedIterator},
          ops::Range};

/// Positions `1..=len`.
#[derive(Debug, Clone)]
pub struct Keys {
    inner: Range<usize>,
    transform: ResultTransform,
}

impl Keys {
    pub(crate) fn new(inner: Range<usize>, transform: ResultTransform) -> Self {
        Self { inner, transform }
    }
}

impl Iterator for Keys {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|index| self.transform.translate_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl DoubleEndedIterator for Keys {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|index| self.transform.translate_index(index))
    }
}

impl ExactSizeIterator for Keys {}
impl FusedIterator for Keys {}

/// Element slots in order.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    inner: Slots<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(inner: Slots<'a, T>) -> Self { Self { inner } }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back() }
}

impl<T> ExactSizeIterator for Values<'_, T> {}
impl<T> FusedIterator for Values<'_, T> {}

/// `(position, slot)` pairs, positions starting at 1.
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: Enumerate<Slots<'a, T>>,
    transform: ResultTransform,
}

impl<'a, T> Entries<'a, T> {
    pub(crate) fn new(inner: Enumerate<Slots<'a, T>>, transform: ResultTransform) -> Self {
        Self { inner, transform }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, slot)| (self.transform.translate_index(index), slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(index, slot)| (self.transform.translate_index(index), slot))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}
impl<T> FusedIterator for Entries<'_, T> {}

/// Default iteration yields element slots, like [`OneBasedVec::values()`].
impl<'a, T> IntoIterator for &'a OneBasedVec<T> {
    type Item = Option<&'a T>;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.values() }
}

#[cfg(test)]
mod tests {
    use crate::one_based_vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_call_is_fresh() {
        let seq = one_based_vec!['x', 'y'];
        let mut first = seq.keys();
        assert_eq!(first.next(), Some(1));
        assert_eq!(seq.keys().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first.next(), Some(2));
        assert_eq!(first.next(), None);
    }

    #[test]
    fn test_holes_are_visited() {
        let mut seq = one_based_vec!['a'];
        assert!(seq.set(3, 'c'));
        assert_eq!(seq.keys().len(), 3);
        assert_eq!(seq.entries().collect::<Vec<_>>(), vec![
            (1, Some(&'a')),
            (2, None),
            (3, Some(&'c'))
        ]);
        assert_eq!(seq.values().rev().collect::<Vec<_>>(), vec![
            Some(&'c'),
            None,
            Some(&'a')
        ]);
    }

    #[test]
    fn test_default_iteration() {
        let seq = one_based_vec![1, 2, 3];
        let mut sum = 0;
        for value in &seq {
            sum += value.copied().unwrap_or_default();
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_enumerating_the_tail_of_a_long_sequence() {
        let mut seq = crate::OneBasedVec::with_length(4_000_000_000).unwrap();
        assert!(seq.set(4_000_000_000, 'z'));
        assert_eq!(seq.keys().next_back(), Some(4_000_000_000));
        assert_eq!(seq.entries().rev().take(2).collect::<Vec<_>>(), vec![
            (4_000_000_000, Some(&'z')),
            (3_999_999_999, None)
        ]);
        assert_eq!(seq.values().next(), Some(None));
        assert_eq!(seq.values().len(), 4_000_000_000);
    }
}
