// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The named operations of [`OneBasedVec`]. Each one:
//! 1. Translates its position arguments via [`Operation::arg_transform()`].
//! 2. Suspends key translation (see [`TranslationGuard`]) and runs the native
//!    algorithm on the backing sequence.
//! 3. Rebuilds its result via [`Operation::result_transform()`].
//!
//! Callbacks are called with the 1-based position of the element and a reference to
//! this sequence, with translation resumed for the duration of the call.

use super::{ConcatArg, Entries, Keys, Operation, TranslationGuard, Values};
use crate::{OneBasedVec, SequenceError};
use std::{cmp::Ordering,
          fmt::{Display, Formatter}};

/// Default separator used by [`OneBasedVec::join()`].
pub const DEFAULT_JOIN_SEPARATOR: &str = ",";

impl<T> OneBasedVec<T> {
    fn translate_positions<const N: usize>(
        &self,
        operation: Operation,
        args: [Option<i64>; N],
    ) -> [Option<i64>; N] {
        operation
            .arg_transform()
            .translate_positions(args, self.len())
    }
}

mod search {
    use super::*;

    impl<T: PartialEq> OneBasedVec<T> {
        /// Is `search` present at or after 1-based position `from` (default `1`)? A
        /// negative `from` counts from the end.
        pub fn includes(&self, search: &T, from: Option<i64>) -> bool {
            let [from] = self.translate_positions(Operation::Includes, [from]);
            let _guard = self.suspend_translation(Operation::Includes);
            self.backing.includes(search, from.unwrap_or_default())
        }

        /// First 1-based position of `search` at or after `from` (default `1`).
        pub fn index_of(&self, search: &T, from: Option<i64>) -> Option<usize> {
            let [from] = self.translate_positions(Operation::IndexOf, [from]);
            let found = {
                let _guard = self.suspend_translation(Operation::IndexOf);
                self.backing.index_of(search, from.unwrap_or_default())
            };
            Operation::IndexOf.result_transform().translate_found(found)
        }

        /// Last 1-based position of `search` at or before `from` ([`None`] searches
        /// from the end).
        pub fn last_index_of(&self, search: &T, from: Option<i64>) -> Option<usize> {
            let [from] = self.translate_positions(Operation::LastIndexOf, [from]);
            let found = {
                let _guard = self.suspend_translation(Operation::LastIndexOf);
                self.backing.last_index_of(search, from)
            };
            Operation::LastIndexOf
                .result_transform()
                .translate_found(found)
        }
    }
}

mod range {
    use super::*;

    impl<T: Clone> OneBasedVec<T> {
        /// New sequence with the elements from 1-based `begin` up to, not including,
        /// `end`. Negative values count from the end, omitted values mean "from the
        /// start" and "to the end".
        #[must_use]
        pub fn slice(&self, begin: Option<i64>, end: Option<i64>) -> Self {
            let [begin, end] = self.translate_positions(Operation::Slice, [begin, end]);
            let _guard = self.suspend_translation(Operation::Slice);
            Self::from_native(self.backing.slice(begin, end))
        }

        /// Copy the elements in `start..end` to 1-based `target`, in place. The length
        /// does not change.
        pub fn copy_within(&mut self, target: i64, start: Option<i64>, end: Option<i64>) -> &mut Self {
            let [target, start, end] =
                self.translate_positions(Operation::CopyWithin, [Some(target), start, end]);
            {
                let _guard =
                    TranslationGuard::suspend(&self.translation_suspended, Operation::CopyWithin);
                self.backing
                    .copy_within(target.unwrap_or_default(), start, end);
            }
            self
        }

        /// Overwrite the elements from 1-based `start` (default `1`) up to, not
        /// including, `end` (default `len + 1`) with `value`, in place.
        pub fn fill(&mut self, value: T, start: Option<i64>, end: Option<i64>) -> &mut Self {
            let [start, end] = self.translate_positions(Operation::Fill, [start, end]);
            {
                let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Fill);
                self.backing.fill(value, start, end);
            }
            self
        }

        /// New sequence of this one followed by every `args` item. Sequences and
        /// element lists are flattened one level, single items are appended as is.
        #[must_use]
        pub fn concat<'a>(&self, args: impl IntoIterator<Item = ConcatArg<'a, T>>) -> Self
        where
            T: 'a,
        {
            let native_args = args.into_iter().map(ConcatArg::into_native);
            let _guard = self.suspend_translation(Operation::Concat);
            Self::from_native(self.backing.concat(native_args))
        }
    }

    impl<T> OneBasedVec<T> {
        /// Remove `delete_count` elements at 1-based `start` ([`None`] removes through
        /// the end) and insert `items` in their place. Returns the removed elements.
        pub fn splice(
            &mut self,
            start: i64,
            delete_count: Option<usize>,
            items: impl IntoIterator<Item = T>,
        ) -> Self {
            let [start] = self.translate_positions(Operation::Splice, [Some(start)]);
            let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Splice);
            Self::from_native(
                self.backing
                    .splice(start.unwrap_or_default(), delete_count, items),
            )
        }
    }
}

mod callbacks {
    use super::*;

    impl<T> OneBasedVec<T> {
        /// Call `callback` with each present element, its 1-based position, and this
        /// sequence.
        pub fn for_each(&self, mut callback: impl FnMut(&T, usize, &Self)) {
            let to_position = Operation::ForEach.arg_transform();
            let _guard = self.suspend_translation(Operation::ForEach);
            self.backing.for_each(|value, index| {
                let _resumed = self.resume_translation();
                callback(value, to_position.callback_position(index), self);
            });
        }

        pub fn every(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> bool {
            let to_position = Operation::Every.arg_transform();
            let _guard = self.suspend_translation(Operation::Every);
            self.backing.every(|value, index| {
                let _resumed = self.resume_translation();
                predicate(value, to_position.callback_position(index), self)
            })
        }

        pub fn some(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> bool {
            let to_position = Operation::Some.arg_transform();
            let _guard = self.suspend_translation(Operation::Some);
            self.backing.some(|value, index| {
                let _resumed = self.resume_translation();
                predicate(value, to_position.callback_position(index), self)
            })
        }

        pub fn find(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> Option<&T> {
            let to_position = Operation::Find.arg_transform();
            let _guard = self.suspend_translation(Operation::Find);
            self.backing.find(|value, index| {
                let _resumed = self.resume_translation();
                predicate(value, to_position.callback_position(index), self)
            })
        }

        /// 1-based position of the first present element matching `predicate`.
        pub fn find_index(
            &self,
            mut predicate: impl FnMut(&T, usize, &Self) -> bool,
        ) -> Option<usize> {
            let found = {
                let to_position = Operation::FindIndex.arg_transform();
                let _guard = self.suspend_translation(Operation::FindIndex);
                self.backing.find_index(|value, index| {
                    let _resumed = self.resume_translation();
                    predicate(value, to_position.callback_position(index), self)
                })
            };
            Operation::FindIndex.result_transform().translate_found(found)
        }

        /// New sequence with the present elements matching `predicate`.
        #[must_use]
        pub fn filter(&self, mut predicate: impl FnMut(&T, usize, &Self) -> bool) -> Self
        where
            T: Clone,
        {
            let to_position = Operation::Filter.arg_transform();
            let _guard = self.suspend_translation(Operation::Filter);
            Self::from_native(self.backing.filter(|value, index| {
                let _resumed = self.resume_translation();
                predicate(value, to_position.callback_position(index), self)
            }))
        }

        /// New sequence of the same length, with every present element transformed.
        /// Holes stay holes.
        #[must_use]
        pub fn map<U>(&self, mut transform: impl FnMut(&T, usize, &Self) -> U) -> OneBasedVec<U> {
            let to_position = Operation::Map.arg_transform();
            let _guard = self.suspend_translation(Operation::Map);
            OneBasedVec::from_native(self.backing.map(|value, index| {
                let _resumed = self.resume_translation();
                transform(value, to_position.callback_position(index), self)
            }))
        }
    }
}

mod accumulation {
    use super::*;

    impl<T> OneBasedVec<T> {
        /// Fold the present elements front to back, starting with `initial`.
        pub fn reduce_with<A>(
            &self,
            initial: A,
            mut reducer: impl FnMut(A, &T, usize, &Self) -> A,
        ) -> A {
            let to_position = Operation::Reduce.arg_transform();
            let _guard = self.suspend_translation(Operation::Reduce);
            self.backing.reduce_with(initial, |acc, value, index| {
                let _resumed = self.resume_translation();
                reducer(acc, value, to_position.callback_position(index), self)
            })
        }

        /// Fold the present elements back to front, starting with `initial`.
        pub fn reduce_right_with<A>(
            &self,
            initial: A,
            mut reducer: impl FnMut(A, &T, usize, &Self) -> A,
        ) -> A {
            let to_position = Operation::ReduceRight.arg_transform();
            let _guard = self.suspend_translation(Operation::ReduceRight);
            self.backing.reduce_right_with(initial, |acc, value, index| {
                let _resumed = self.resume_translation();
                reducer(acc, value, to_position.callback_position(index), self)
            })
        }

        /// Fold the present elements front to back, seeded with the first one.
        ///
        /// # Errors
        ///
        /// [`SequenceError::ReduceOfEmptySequence`] if there is no present element.
        pub fn reduce(
            &self,
            mut reducer: impl FnMut(T, &T, usize, &Self) -> T,
        ) -> Result<T, SequenceError>
        where
            T: Clone,
        {
            let to_position = Operation::Reduce.arg_transform();
            let _guard = self.suspend_translation(Operation::Reduce);
            self.backing.reduce(|acc, value, index| {
                let _resumed = self.resume_translation();
                reducer(acc, value, to_position.callback_position(index), self)
            })
        }

        /// Fold the present elements back to front, seeded with the last one.
        ///
        /// # Errors
        ///
        /// [`SequenceError::ReduceOfEmptySequence`] if there is no present element.
        pub fn reduce_right(
            &self,
            mut reducer: impl FnMut(T, &T, usize, &Self) -> T,
        ) -> Result<T, SequenceError>
        where
            T: Clone,
        {
            let to_position = Operation::ReduceRight.arg_transform();
            let _guard = self.suspend_translation(Operation::ReduceRight);
            self.backing.reduce_right(|acc, value, index| {
                let _resumed = self.resume_translation();
                reducer(acc, value, to_position.callback_position(index), self)
            })
        }
    }
}

mod enumeration {
    use super::*;

    impl<T> OneBasedVec<T> {
        /// Fresh iterator over every position `1..=len`, holes included.
        #[must_use]
        pub fn keys(&self) -> Keys {
            let _guard = self.suspend_translation(Operation::Keys);
            Keys::new(self.backing.keys(), Operation::Keys.result_transform())
        }

        /// Fresh iterator over every slot, yielding [`None`] for holes.
        #[must_use]
        pub fn values(&self) -> Values<'_, T> {
            let _guard = self.suspend_translation(Operation::Values);
            Values::new(self.backing.values())
        }

        /// Fresh iterator over `(position, slot)` pairs, positions starting at 1.
        #[must_use]
        pub fn entries(&self) -> Entries<'_, T> {
            let _guard = self.suspend_translation(Operation::Entries);
            Entries::new(self.backing.entries(), Operation::Entries.result_transform())
        }
    }
}

mod pass_through {
    use super::*;

    impl<T: Display> OneBasedVec<T> {
        /// Render every slot with `separator` in between ([`None`] uses
        /// [`DEFAULT_JOIN_SEPARATOR`]). Holes render as the empty string.
        pub fn join(&self, separator: Option<&str>) -> String {
            let _guard = self.suspend_translation(Operation::Join);
            self.backing
                .join(separator.unwrap_or(DEFAULT_JOIN_SEPARATOR))
        }

        /// Same as the [`Display`] rendering.
        pub fn to_locale_string(&self) -> String {
            let _guard = self.suspend_translation(Operation::ToLocaleString);
            self.backing.join(DEFAULT_JOIN_SEPARATOR)
        }

        /// Stable sort by the string rendering of each element, in place. Holes move to
        /// the end.
        pub fn sort(&mut self) -> &mut Self {
            {
                let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Sort);
                self.backing.sort();
            }
            self
        }
    }

    /// Comma separated elements, holes render as the empty string.
    impl<T: Display> Display for OneBasedVec<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            let _guard = self.suspend_translation(Operation::ToString);
            write!(f, "{}", self.backing.join(DEFAULT_JOIN_SEPARATOR))
        }
    }

    impl<T> OneBasedVec<T> {
        /// Remove and return the last element. [`None`] if empty, or if the last slot
        /// is a hole.
        pub fn pop(&mut self) -> Option<T> {
            let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Pop);
            self.backing.pop()
        }

        /// Append `items`, returning the new length.
        pub fn push(&mut self, items: impl IntoIterator<Item = T>) -> usize {
            let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Push);
            self.backing.push(items)
        }

        /// Remove and return the first element, shifting the rest down one position.
        pub fn shift(&mut self) -> Option<T> {
            let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Shift);
            self.backing.shift()
        }

        /// Prepend `items` (keeping their order), returning the new length.
        pub fn unshift(&mut self, items: impl IntoIterator<Item = T>) -> usize {
            let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Unshift);
            self.backing.unshift(items)
        }

        pub fn reverse(&mut self) -> &mut Self {
            {
                let _guard =
                    TranslationGuard::suspend(&self.translation_suspended, Operation::Reverse);
                self.backing.reverse();
            }
            self
        }

        /// Stable sort with `compare`, in place. Holes move to the end.
        pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) -> &mut Self {
            {
                let _guard = TranslationGuard::suspend(&self.translation_suspended, Operation::Sort);
                self.backing.sort_by(compare);
            }
            self
        }
    }
}
