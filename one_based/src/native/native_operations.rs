// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 0-based operation catalogue of [`NativeSequence`]: search, range, callback,
//! accumulation, enumeration and mutation operations.
//!
//! Callback driven operations visit present slots only (holes are skipped), and pass
//! the 0-based index of each visited slot. Enumeration visits every slot.

use crate::{NativeSequence, Operation, SequenceError, Slots, resolve_relative,
            resolve_relative_or};
use std::{cmp::Ordering,
          collections::BTreeMap,
          fmt::Display,
          iter::Enumerate,
          mem,
          ops::Range};

/// One argument of [`NativeSequence::concat()`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeConcatArg<T> {
    /// Slots of another sequence, spread into the result (holes preserved).
    Spread(NativeSequence<T>),
    /// A single element appended as is.
    Item(T),
}

impl<T> NativeSequence<T> {
    fn present(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> {
        self.elements.iter().map(|(index, value)| (*index, value))
    }

    /// Give every present element the index `rekey` maps it to.
    fn rekey(&mut self, rekey: impl Fn(usize) -> usize) {
        self.elements = mem::take(&mut self.elements)
            .into_iter()
            .map(|(index, value)| (rekey(index), value))
            .collect();
    }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Search                                                                    │
    // └───────────────────────────────────────────────────────────────────────────┘

    pub fn includes(&self, search: &T, from: i64) -> bool
    where
        T: PartialEq,
    {
        self.index_of(search, from).is_some()
    }

    pub fn index_of(&self, search: &T, from: i64) -> Option<usize>
    where
        T: PartialEq,
    {
        let start = resolve_relative(from, self.len());
        self.elements
            .range(start..)
            .find(|(_, value)| *value == search)
            .map(|(index, _)| *index)
    }

    /// Search backwards starting at `from` ([`None`] searches from the last slot). A
    /// negative `from` counts from the end, and if that lands before the first slot
    /// nothing is found.
    pub fn last_index_of(&self, search: &T, from: Option<i64>) -> Option<usize>
    where
        T: PartialEq,
    {
        let last = i64::try_from(self.len()).ok()? - 1;
        if last < 0 {
            return None;
        }
        let start = match from {
            None => last,
            Some(from) if from >= 0 => from.min(last),
            Some(from) => last + 1 + from,
        };
        let start = usize::try_from(start).ok()?;
        self.elements
            .range(..=start)
            .rev()
            .find(|(_, value)| *value == search)
            .map(|(index, _)| *index)
    }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Range                                                                     │
    // └───────────────────────────────────────────────────────────────────────────┘

    fn resolve_range(&self, start: Option<i64>, end: Option<i64>) -> Range<usize> {
        let len = self.len();
        let start = resolve_relative_or(start, 0, len);
        let end = resolve_relative_or(end, len, len);
        start..end.max(start)
    }

    /// Slots in `begin..end`, as a new sequence.
    #[must_use]
    pub fn slice(&self, begin: Option<i64>, end: Option<i64>) -> Self
    where
        T: Clone,
    {
        let range = self.resolve_range(begin, end);
        let elements = self
            .elements
            .range(range.clone())
            .map(|(index, value)| (index - range.start, value.clone()))
            .collect();
        Self::from_parts(range.len(), elements)
    }

    /// Copy the slots in `start..end` over the slots starting at `target`, without
    /// changing the length. Holes are copied as holes.
    pub fn copy_within(&mut self, target: i64, start: Option<i64>, end: Option<i64>)
    where
        T: Clone,
    {
        let to = resolve_relative(target, self.len());
        let source = self.resolve_range(start, end);
        let count = source.len().min(self.len() - to);
        let chunk: Vec<(usize, T)> = self
            .elements
            .range(source.start..source.start + count)
            .map(|(index, value)| (index - source.start, value.clone()))
            .collect();
        let mut overwritten = self.elements.split_off(&to);
        let mut after = overwritten.split_off(&(to + count));
        drop(overwritten);
        self.elements.append(&mut after);
        self.elements
            .extend(chunk.into_iter().map(|(offset, value)| (to + offset, value)));
    }

    pub fn fill(&mut self, value: T, start: Option<i64>, end: Option<i64>)
    where
        T: Clone,
    {
        for index in self.resolve_range(start, end) {
            self.elements.insert(index, value.clone());
        }
    }

    /// Remove `delete_count` slots at `start` ([`None`] removes through the end),
    /// insert `items` in their place, and return the removed slots.
    pub fn splice(
        &mut self,
        start: i64,
        delete_count: Option<usize>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let len = self.len();
        let start = resolve_relative(start, len);
        let available = len - start;
        let delete_count = delete_count.map_or(available, |count| count.min(available));
        let items: Vec<T> = items.into_iter().collect();
        let inserted = items.len();

        let mut removed = self.elements.split_off(&start);
        let after = removed.split_off(&(start + delete_count));
        let removed = removed
            .into_iter()
            .map(|(index, value)| (index - start, value))
            .collect();

        self.elements
            .extend(items.into_iter().enumerate().map(|(offset, item)| (start + offset, item)));
        self.elements.extend(
            after
                .into_iter()
                .map(|(index, value)| (index - delete_count + inserted, value)),
        );
        self.len = len - delete_count + inserted;

        Self::from_parts(delete_count, removed)
    }

    #[must_use]
    pub fn concat(&self, args: impl IntoIterator<Item = NativeConcatArg<T>>) -> Self
    where
        T: Clone,
    {
        let mut acc = Self::from_parts(self.len(), self.elements.clone());
        for arg in args {
            match arg {
                NativeConcatArg::Spread(spread) => {
                    let offset = acc.len;
                    acc.elements.extend(
                        spread
                            .elements
                            .into_iter()
                            .map(|(index, value)| (offset + index, value)),
                    );
                    acc.len += spread.len;
                }
                NativeConcatArg::Item(item) => acc.set_index(acc.len, item),
            }
        }
        acc
    }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Callbacks                                                                 │
    // └───────────────────────────────────────────────────────────────────────────┘

    pub fn for_each(&self, mut callback: impl FnMut(&T, usize)) {
        for (index, value) in self.present() {
            callback(value, index);
        }
    }

    pub fn every(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> bool {
        self.present().all(|(index, value)| predicate(value, index))
    }

    pub fn some(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> bool {
        self.present().any(|(index, value)| predicate(value, index))
    }

    pub fn find(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Option<&T> {
        self.present()
            .find(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value)
    }

    pub fn find_index(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Option<usize> {
        self.present()
            .find(|(index, value)| predicate(*value, *index))
            .map(|(index, _)| index)
    }

    /// The present elements matching `predicate`, packed into a new sequence.
    pub fn filter(&self, mut predicate: impl FnMut(&T, usize) -> bool) -> Self
    where
        T: Clone,
    {
        self.present()
            .filter(|(index, value)| predicate(*value, *index))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Map present slots, holes stay holes.
    pub fn map<U>(&self, mut transform: impl FnMut(&T, usize) -> U) -> NativeSequence<U> {
        let elements: BTreeMap<usize, U> = self
            .present()
            .map(|(index, value)| (index, transform(value, index)))
            .collect();
        NativeSequence::from_parts(self.len(), elements)
    }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Accumulation                                                              │
    // └───────────────────────────────────────────────────────────────────────────┘

    pub fn reduce_with<A>(&self, initial: A, mut reducer: impl FnMut(A, &T, usize) -> A) -> A {
        self.present()
            .fold(initial, |acc, (index, value)| reducer(acc, value, index))
    }

    pub fn reduce_right_with<A>(
        &self,
        initial: A,
        mut reducer: impl FnMut(A, &T, usize) -> A,
    ) -> A {
        self.present()
            .rev()
            .fold(initial, |acc, (index, value)| reducer(acc, value, index))
    }

    /// Reduce seeded with the first present element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::ReduceOfEmptySequence`] if there is no present element.
    pub fn reduce(&self, mut reducer: impl FnMut(T, &T, usize) -> T) -> Result<T, SequenceError>
    where
        T: Clone,
    {
        let mut present = self.present();
        let Some((_, first)) = present.next() else {
            return Err(SequenceError::ReduceOfEmptySequence {
                operation: Operation::Reduce,
            });
        };
        Ok(present.fold(first.clone(), |acc, (index, value)| reducer(acc, value, index)))
    }

    /// Reduce from the end, seeded with the last present element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::ReduceOfEmptySequence`] if there is no present element.
    pub fn reduce_right(
        &self,
        mut reducer: impl FnMut(T, &T, usize) -> T,
    ) -> Result<T, SequenceError>
    where
        T: Clone,
    {
        let mut present = self.present().rev();
        let Some((_, last)) = present.next() else {
            return Err(SequenceError::ReduceOfEmptySequence {
                operation: Operation::ReduceRight,
            });
        };
        Ok(present.fold(last.clone(), |acc, (index, value)| reducer(acc, value, index)))
    }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Enumeration                                                               │
    // └───────────────────────────────────────────────────────────────────────────┘

    #[must_use]
    pub fn keys(&self) -> Range<usize> { 0..self.len() }

    pub fn values(&self) -> Slots<'_, T> { self.slots() }

    pub fn entries(&self) -> Enumerate<Slots<'_, T>> { self.slots().enumerate() }

    // ┌───────────────────────────────────────────────────────────────────────────┐
    // │ Pass through                                                              │
    // └───────────────────────────────────────────────────────────────────────────┘

    /// Join the string rendering of every slot with `separator`. Holes render as the
    /// empty string.
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut acc = String::new();
        for (index, slot) in self.slots().enumerate() {
            if index > 0 {
                acc.push_str(separator);
            }
            if let Some(value) = slot {
                acc.push_str(&value.to_string());
            }
        }
        acc
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        self.elements.remove(&last)
    }

    /// Append `items`, returning the new length.
    pub fn push(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        for item in items {
            self.set_index(self.len, item);
        }
        self.len()
    }

    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.elements.remove(&0);
        self.rekey(|index| index - 1);
        self.len -= 1;
        first
    }

    /// Prepend `items` (keeping their order), returning the new length.
    pub fn unshift(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let items: Vec<T> = items.into_iter().collect();
        let count = items.len();
        self.rekey(|index| index + count);
        self.elements.extend(items.into_iter().enumerate());
        self.len += count;
        self.len()
    }

    pub fn reverse(&mut self) {
        let last = self.len.saturating_sub(1);
        self.rekey(|index| last - index);
    }

    /// Stable sort with `compare`. Holes always move to the end.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        let mut values: Vec<T> = mem::take(&mut self.elements).into_values().collect();
        values.sort_by(compare);
        self.elements = values.into_iter().enumerate().collect();
    }

    /// Stable sort by the string rendering of each element, compared as UTF-16 code
    /// units. Holes move to the end.
    pub fn sort(&mut self)
    where
        T: Display,
    {
        let mut values: Vec<T> = mem::take(&mut self.elements).into_values().collect();
        values.sort_by_cached_key(|value| value.to_string().encode_utf16().collect::<Vec<u16>>());
        self.elements = values.into_iter().enumerate().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn seq(items: &[&'static str]) -> NativeSequence<&'static str> {
        NativeSequence::from_slots(items.iter().copied().map(Some).collect())
    }

    fn dense(native: &NativeSequence<&'static str>) -> Vec<&'static str> {
        native.slots().map(|it| it.copied().unwrap_or("_")).collect()
    }

    fn slots<T: Copy>(native: &NativeSequence<T>) -> Vec<Option<T>> {
        native.slots().map(Option::<&T>::copied).collect()
    }

    #[test_case(0 => Some(0))]
    #[test_case(1 => None)]
    #[test_case(-3 => Some(0))]
    #[test_case(-2 => None)]
    #[test_case(10 => None)]
    fn test_index_of_a(from: i64) -> Option<usize> { seq(&["a", "b", "c"]).index_of(&"a", from) }

    #[test_case(None => Some(2))]
    #[test_case(Some(1) => Some(0))]
    #[test_case(Some(-4) => Some(0))]
    #[test_case(Some(-5) => None)]
    #[test_case(Some(100) => Some(2))]
    fn test_last_index_of_a(from: Option<i64>) -> Option<usize> {
        seq(&["a", "b", "a", "b"]).last_index_of(&"a", from)
    }

    #[test]
    fn test_last_index_of_on_empty() {
        assert_eq!(seq(&[]).last_index_of(&"a", None), None);
    }

    #[test]
    fn test_search_skips_holes() {
        let native = NativeSequence::from_slots(vec![None, Some("a")]);
        assert_eq!(native.index_of(&"a", 0), Some(1));
        assert!(native.includes(&"a", -1));
    }

    #[test_case(None, None => vec!["a", "b", "c"])]
    #[test_case(Some(1), None => vec!["b", "c"])]
    #[test_case(Some(-1), None => vec!["c"])]
    #[test_case(Some(0), Some(-2) => vec!["a"])]
    #[test_case(Some(2), Some(1) => Vec::<&str>::new())]
    fn test_slice(begin: Option<i64>, end: Option<i64>) -> Vec<&'static str> {
        dense(&seq(&["a", "b", "c"]).slice(begin, end))
    }

    #[test_case(1, None, None => vec!["a", "a", "b"])]
    #[test_case(-1, None, None => vec!["a", "b", "a"])]
    #[test_case(2, Some(1), None => vec!["a", "b", "b"])]
    #[test_case(2, Some(0), Some(1) => vec!["a", "b", "a"])]
    #[test_case(1, Some(0), Some(-1) => vec!["a", "a", "b"])]
    fn test_copy_within(target: i64, start: Option<i64>, end: Option<i64>) -> Vec<&'static str> {
        let mut native = seq(&["a", "b", "c"]);
        native.copy_within(target, start, end);
        dense(&native)
    }

    #[test]
    fn test_copy_within_copies_holes() {
        let mut native = NativeSequence::from_slots(vec![None, Some("b"), Some("c")]);
        native.copy_within(2, Some(0), Some(1));
        assert_eq!(slots(&native), vec![None, Some("b"), None]);
    }

    #[test_case(None, None => vec!["d", "d", "d"])]
    #[test_case(Some(1), None => vec!["a", "d", "d"])]
    #[test_case(Some(-1), None => vec!["a", "b", "d"])]
    #[test_case(Some(0), Some(2) => vec!["d", "d", "c"])]
    #[test_case(Some(1), Some(-1) => vec!["a", "d", "c"])]
    fn test_fill(start: Option<i64>, end: Option<i64>) -> Vec<&'static str> {
        let mut native = seq(&["a", "b", "c"]);
        native.fill("d", start, end);
        dense(&native)
    }

    #[test]
    fn test_splice() {
        let mut native = seq(&["a", "b", "c"]);
        let removed = native.splice(1, Some(1), ["B", "B2"]);
        assert_eq!(slots(&removed), vec![Some("b")]);
        assert_eq!(dense(&native), vec!["a", "B", "B2", "c"]);

        let removed = native.splice(-2, None, []);
        assert_eq!(slots(&removed), vec![Some("B2"), Some("c")]);
        assert_eq!(dense(&native), vec!["a", "B"]);

        let removed = native.splice(0, Some(100), ["z"]);
        assert_eq!(slots(&removed), vec![Some("a"), Some("B")]);
        assert_eq!(dense(&native), vec!["z"]);
    }

    #[test]
    fn test_concat() {
        let native = seq(&["a"]).concat([
            NativeConcatArg::Spread(NativeSequence::from_slots(vec![Some("b"), None])),
            NativeConcatArg::Item("c"),
        ]);
        assert_eq!(slots(&native), vec![Some("a"), Some("b"), None, Some("c")]);
    }

    #[test]
    fn test_callbacks_skip_holes_and_pass_native_index() {
        let native = NativeSequence::from_slots(vec![Some("a"), None, Some("c")]);
        let mut visited = vec![];
        native.for_each(|value, index| visited.push((*value, index)));
        assert_eq!(visited, vec![("a", 0), ("c", 2)]);
        assert_eq!(
            native.map(|value, index| format!("{value}{index}")),
            NativeSequence::from_slots(vec![Some("a0".to_string()), None, Some("c2".to_string())])
        );
        assert_eq!(native.find_index(|value, _| *value == "c"), Some(2));
        assert_eq!(native.find(|_, index| index > 0), Some(&"c"));
        assert!(native.every(|value, _| !value.is_empty()));
        assert!(!native.some(|value, _| *value == "b"));
        assert_eq!(native.filter(|_, index| index == 2), seq(&["c"]));
    }

    #[test]
    fn test_reduce() {
        let native = seq(&["a", "b", "c"]);
        let forward = native.reduce(|_, value, _| *value);
        assert_eq!(forward, Ok("c"));
        let backward = native.reduce_right_with(String::new(), |acc, value, _| acc + *value);
        assert_eq!(backward, "cba");
        assert_eq!(
            seq(&[]).reduce_right(|acc, _, _| acc),
            Err(SequenceError::ReduceOfEmptySequence {
                operation: Operation::ReduceRight
            })
        );
    }

    #[test]
    fn test_join() {
        let native = NativeSequence::from_slots(vec![Some("a"), None, Some("c")]);
        assert_eq!(native.join(","), "a,,c");
        assert_eq!(seq(&[]).join(","), "");
    }

    #[test]
    fn test_push_pop_shift_unshift() {
        let mut native = seq(&["a", "b", "c"]);
        assert_eq!(native.push(["d", "e"]), 5);
        assert_eq!(native.pop(), Some("e"));
        assert_eq!(native.shift(), Some("a"));
        assert_eq!(native.unshift(["x", "y"]), 5);
        assert_eq!(dense(&native), vec!["x", "y", "b", "c", "d"]);
        assert_eq!(seq(&[]).pop(), None);
        assert_eq!(seq(&[]).shift(), None);
    }

    #[test]
    fn test_sort_moves_holes_last() {
        let mut native = NativeSequence::from_slots(vec![Some(10), None, Some(9), Some(1)]);
        native.sort();
        assert_eq!(slots(&native), vec![Some(1), Some(10), Some(9), None]);
        native.sort_by(|lhs, rhs| rhs.cmp(lhs));
        assert_eq!(slots(&native), vec![Some(10), Some(9), Some(1), None]);
    }

    #[test]
    fn test_sort_compares_utf16_code_units() {
        // U+1F600 is the surrogate pair D83D DE00, which is below FF61.
        let mut native = seq(&["\u{FF61}", "\u{1F600}", "a"]);
        native.sort();
        assert_eq!(dense(&native), vec!["a", "\u{1F600}", "\u{FF61}"]);
    }

    #[test]
    fn test_operations_on_a_mostly_empty_sequence() {
        let mut native = NativeSequence::with_len(4_000_000_000).unwrap();
        native.set_index(0, "a");
        native.set_index(3_999_999_999, "z");
        assert_eq!(native.last_index_of(&"z", None), Some(3_999_999_999));
        assert_eq!(native.index_of(&"z", -1), Some(3_999_999_999));
        assert_eq!(slots(&native.slice(Some(-2), None)), vec![None, Some("z")]);

        native.reverse();
        assert_eq!(native.get_index(0), Some(&"z"));
        assert_eq!(native.get_index(3_999_999_999), Some(&"a"));

        assert_eq!(native.shift(), Some("z"));
        assert_eq!(native.len(), 3_999_999_999);
        assert_eq!(native.unshift(["y"]), 4_000_000_000);
        assert_eq!(native.get_index(3_999_999_999), Some(&"a"));

        let removed = native.splice(1, Some(2), ["b"]);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed.present_count(), 0);
        assert_eq!(native.len(), 3_999_999_999);
        assert_eq!(native.get_index(1), Some(&"b"));
        assert_eq!(native.get_index(3_999_999_998), Some(&"a"));

        assert_eq!(native.pop(), Some("a"));
        assert_eq!(native.present_count(), 2);
        native.sort();
        assert_eq!(native.len(), 3_999_999_998);
        assert_eq!(slots(&native.slice(None, Some(3))), vec![Some("b"), Some("y"), None]);
    }
}
