// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TranslationGuard;
use crate::{InlineVec, NativeKey, NativeSequence, Operation, PropertyDescriptor, PropertyFlags,
            PropertyKey, PropertyValue, SequenceError, to_external, to_internal};
use std::{cell::Cell,
          fmt::{Debug, Formatter}};

/// An ordered sequence whose external positions start at 1.
///
/// ```text
/// external position:    1    2    3
///                     ┌────┬────┬────┐
/// OneBasedVec         │ a  │ b  │ c  │
///                     └────┴────┴────┘
/// backing index:        0    1    2
/// ```
///
/// All the data lives in an exclusively owned [`NativeSequence`]. This type only
/// translates:
/// - Structural access ([`get_property()`], [`set_property()`], [`has_property()`],
///   [`delete_property()`], [`define_property()`], [`own_keys()`],
///   [`get_own_property_descriptor()`]) translates keys with [`to_internal()`] and
///   [`to_external()`].
/// - Named operations ([`index_of()`], [`slice()`], [`map()`], ...) translate their
///   position arguments, callback positions and results, as declared by
///   [`Operation::arg_transform()`] and [`Operation::result_transform()`].
///
/// Position `0` never refers to an element.
///
/// [`get_property()`]: Self::get_property
/// [`set_property()`]: Self::set_property
/// [`has_property()`]: Self::has_property
/// [`delete_property()`]: Self::delete_property
/// [`define_property()`]: Self::define_property
/// [`own_keys()`]: Self::own_keys
/// [`get_own_property_descriptor()`]: Self::get_own_property_descriptor
/// [`index_of()`]: Self::index_of
/// [`slice()`]: Self::slice
/// [`map()`]: Self::map
pub struct OneBasedVec<T> {
    pub(crate) backing: NativeSequence<T>,
    /// Set while an intercepted operation runs its native algorithm. See
    /// [`TranslationGuard`].
    pub(crate) translation_suspended: Cell<bool>,
}

mod construct {
    use super::*;

    impl<T> OneBasedVec<T> {
        #[must_use]
        pub fn new() -> Self { Self::from_native(NativeSequence::new()) }

        /// Wrap an existing backing sequence. Named and symbol keyed properties are
        /// kept.
        #[must_use]
        pub fn from_native(backing: NativeSequence<T>) -> Self {
            Self {
                backing,
                translation_suspended: Cell::new(false),
            }
        }

        pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
            Self::from_native(elements.into_iter().collect())
        }

        /// A sequence of `len` holes. Holes are not stored, so any valid length is
        /// cheap.
        ///
        /// # Errors
        ///
        /// [`SequenceError::InvalidLength`] if `len` exceeds
        /// [`MAX_SEQUENCE_LENGTH`](crate::MAX_SEQUENCE_LENGTH).
        pub fn with_length(len: u64) -> Result<Self, SequenceError> {
            NativeSequence::with_len(len).map(Self::from_native)
        }

        pub(crate) fn from_slots(slots: Vec<Option<T>>) -> Self {
            Self::from_native(NativeSequence::from_slots(slots))
        }

        /// Unwrap into the backing sequence.
        #[must_use]
        pub fn into_native(self) -> NativeSequence<T> { self.backing }
    }

    impl<T> Default for OneBasedVec<T> {
        fn default() -> Self { Self::new() }
    }

    impl<T> FromIterator<T> for OneBasedVec<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Self::from_elements(iter) }
    }

    impl<T> From<Vec<T>> for OneBasedVec<T> {
        fn from(elements: Vec<T>) -> Self { Self::from_elements(elements) }
    }

    /// The re-entrancy flag is transient, a clone starts with translation on.
    impl<T: Clone> Clone for OneBasedVec<T> {
        fn clone(&self) -> Self { Self::from_native(self.backing.clone()) }
    }

    impl<T: PartialEq> PartialEq for OneBasedVec<T> {
        fn eq(&self, other: &Self) -> bool { self.backing == other.backing }
    }

    impl<T: Debug> Debug for OneBasedVec<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("OneBasedVec")
                .field("backing", &self.backing)
                .finish()
        }
    }
}

/// Build a [`OneBasedVec`] from a list of elements, eg:
/// `one_based_vec![1, 2, 3]`.
#[macro_export]
macro_rules! one_based_vec {
    () => {
        $crate::OneBasedVec::new()
    };
    (
        $($item: expr),+ $(,)?
    ) => {
        $crate::OneBasedVec::from(vec![$($item),+])
    };
}

mod positional {
    use super::*;

    impl<T> OneBasedVec<T> {
        #[must_use]
        pub fn len(&self) -> usize { self.backing.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.backing.is_empty() }

        /// Truncate, or grow with holes.
        ///
        /// # Errors
        ///
        /// [`SequenceError::InvalidLength`] if `len` exceeds
        /// [`MAX_SEQUENCE_LENGTH`](crate::MAX_SEQUENCE_LENGTH).
        pub fn set_len(&mut self, len: u64) -> Result<(), SequenceError> {
            self.backing.set_len(len)
        }

        /// Element at 1-based `position`. Holes, position `0` and positions past the
        /// end yield [`None`].
        #[must_use]
        pub fn get(&self, position: usize) -> Option<&T> {
            self.get_property(&PropertyKey::from(position))
                .and_then(PropertyValue::value)
        }

        /// Write `value` at 1-based `position`, growing with holes if it is past the
        /// end. Writing position `0` creates a named property, not an element.
        pub fn set(&mut self, position: usize, value: T) -> bool {
            self.set_property(&PropertyKey::from(position), value)
        }
    }
}

mod structural {
    use super::*;

    impl<T> OneBasedVec<T> {
        /// Backing key for `key`, untranslated while an intercepted operation is
        /// running its native algorithm.
        fn native_key(&self, key: &PropertyKey) -> NativeKey {
            if self.translation_suspended.get() {
                NativeKey::from(key)
            } else {
                to_internal(key)
            }
        }

        #[must_use]
        pub fn get_property(&self, key: &PropertyKey) -> Option<PropertyValue<'_, T>> {
            self.backing.get(&to_internal(key))
        }

        /// Returns `false` if the property is read only (this includes `length`, use
        /// [`set_len()`](Self::set_len) instead).
        pub fn set_property(&mut self, key: &PropertyKey, value: T) -> bool {
            self.backing.set(to_internal(key), value)
        }

        #[must_use]
        pub fn has_property(&self, key: &PropertyKey) -> bool {
            self.backing.has(&to_internal(key))
        }

        /// Deleting an element leaves a hole and does not change the length. Returns
        /// `false` only for non-configurable properties, eg: `length`.
        pub fn delete_property(&mut self, key: &PropertyKey) -> bool {
            self.backing.delete(&to_internal(key))
        }

        /// Define an own property with explicit `flags`. Returns `false` if the
        /// definition is rejected, eg: redefining a non-configurable property.
        pub fn define_property(&mut self, key: &PropertyKey, value: T, flags: PropertyFlags) -> bool {
            self.backing.define(to_internal(key), value, flags)
        }

        /// Own keys in their external form: present positions ascending (1-based),
        /// `length`, named keys in insertion order, then symbols in insertion order.
        #[must_use]
        pub fn own_keys(&self) -> InlineVec<PropertyKey> {
            self.backing.own_keys().into_iter().map(to_external).collect()
        }

        /// Descriptor of the own property at `key`. While an intercepted operation is
        /// running its native algorithm, `key` is used untranslated.
        #[must_use]
        pub fn get_own_property_descriptor(
            &self,
            key: &PropertyKey,
        ) -> Option<PropertyDescriptor<'_, T>> {
            self.backing.get_own_property_descriptor(&self.native_key(key))
        }

        /// `true` only while an intercepted operation is running its native algorithm
        /// against this sequence. User callbacks always observe `false`.
        #[must_use]
        pub fn is_translation_suspended(&self) -> bool { self.translation_suspended.get() }

        pub(crate) fn suspend_translation(&self, operation: Operation) -> TranslationGuard<'_> {
            TranslationGuard::suspend(&self.translation_suspended, operation)
        }

        pub(crate) fn resume_translation(&self) -> TranslationGuard<'_> {
            TranslationGuard::resume(&self.translation_suspended)
        }
    }
}
