// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{NativeConcatArg, OneBasedVec};

/// One argument to [`OneBasedVec::concat()`].
///
/// A [`ConcatArg::Sequence`] is expanded to its raw elements (holes included), a
/// [`ConcatArg::Elements`] is expanded as is, and a [`ConcatArg::Item`] is appended as
/// a single element.
#[derive(Debug)]
pub enum ConcatArg<'a, T> {
    Sequence(&'a OneBasedVec<T>),
    Elements(Vec<T>),
    Item(T),
}

impl<'a, T> From<&'a OneBasedVec<T>> for ConcatArg<'a, T> {
    fn from(sequence: &'a OneBasedVec<T>) -> Self { Self::Sequence(sequence) }
}

impl<T> From<Vec<T>> for ConcatArg<'_, T> {
    fn from(elements: Vec<T>) -> Self { Self::Elements(elements) }
}

impl<T: Clone> ConcatArg<'_, T> {
    pub(crate) fn into_native(self) -> NativeConcatArg<T> {
        match self {
            Self::Sequence(sequence) => NativeConcatArg::Spread(sequence.backing.slice(None, None)),
            Self::Elements(elements) => NativeConcatArg::Spread(elements.into_iter().collect()),
            Self::Item(item) => NativeConcatArg::Item(item),
        }
    }
}
