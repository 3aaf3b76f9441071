// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-based, variable length ordered sequence - see [`NativeSequence`].

use crate::{InlineString, MAX_SEQUENCE_LENGTH, NativeKey, OwnProperty, PropertyDescriptor,
            PropertyFlags, PropertyValue, SequenceError, SymbolKey};
use std::{collections::BTreeMap, iter::FusedIterator, ops::Range};

pub const LENGTH_KEY: &str = "length";

/// The backing store of a [`OneBasedVec`]. Positions here are 0-based.
///
/// Besides element slots this carries everything the ordered-sequence contract
/// exposes through reflection:
/// - The length is explicit, and only present elements are stored (keyed by index).
///   Holes cost nothing, so writing far past the end, or setting the length to
///   [`MAX_SEQUENCE_LENGTH`], does not allocate the slots in between.
/// - `length` is a pseudo-property that is writable, but neither enumerable nor
///   configurable.
/// - Named and symbol keyed own properties, each with [`PropertyFlags`], kept in
///   insertion order.
///
/// Own keys are reported in this order: present slot indices ascending, `length`,
/// names in insertion order, then symbols in insertion order.
///
/// ```text
/// len:      3
/// elements: {0: a, 2: c}                (slot 1 is a hole)
/// names:    [("tag", ..)]
/// symbols:  [(Symbol(test), ..)]
/// own keys: 0, 2, "length", "tag", Symbol(test)
/// ```
///
/// [`OneBasedVec`]: crate::OneBasedVec
#[derive(Debug, Clone, PartialEq)]
pub struct NativeSequence<T> {
    pub(crate) len: usize,
    pub(crate) elements: BTreeMap<usize, T>,
    names: Vec<(InlineString, OwnProperty<T>)>,
    symbols: Vec<(SymbolKey, OwnProperty<T>)>,
}

impl<T> Default for NativeSequence<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FromIterator<T> for NativeSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut it = Self::new();
        it.push(iter);
        it
    }
}

impl<T> NativeSequence<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            len: 0,
            elements: BTreeMap::new(),
            names: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// Build from raw slots, holes included.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<T>>) -> Self {
        Self::from_parts(
            slots.len(),
            slots
                .into_iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.map(|value| (index, value)))
                .collect(),
        )
    }

    /// `elements` must not hold an index at or past `len`.
    pub(crate) fn from_parts(len: usize, elements: BTreeMap<usize, T>) -> Self {
        debug_assert!(elements.last_key_value().is_none_or(|(last, _)| *last < len));
        Self {
            len,
            elements,
            ..Self::new()
        }
    }

    /// A sequence of `len` holes.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidLength`] if `len` exceeds [`MAX_SEQUENCE_LENGTH`].
    pub fn with_len(len: u64) -> Result<Self, SequenceError> {
        let mut it = Self::new();
        it.set_len(len)?;
        Ok(it)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Number of slots that are not holes.
    #[must_use]
    pub fn present_count(&self) -> usize { self.elements.len() }

    /// Truncate, or grow with holes.
    ///
    /// # Errors
    ///
    /// [`SequenceError::InvalidLength`] if `len` exceeds [`MAX_SEQUENCE_LENGTH`].
    pub fn set_len(&mut self, len: u64) -> Result<(), SequenceError> {
        let new_len = usize::try_from(len)
            .ok()
            .filter(|_| len <= MAX_SEQUENCE_LENGTH)
            .ok_or(SequenceError::InvalidLength { requested: len })?;
        if new_len < self.len {
            drop(self.elements.split_off(&new_len));
        }
        self.len = new_len;
        Ok(())
    }

    /// Every slot in order, [`None`] for holes.
    #[must_use]
    pub fn slots(&self) -> Slots<'_, T> {
        Slots {
            elements: &self.elements,
            range: 0..self.len,
        }
    }

    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&T> { self.elements.get(&index) }

    /// Write `value` at `index`, growing the length if needed. The slots in between
    /// become holes.
    pub fn set_index(&mut self, index: usize, value: T) {
        self.elements.insert(index, value);
        self.len = self.len.max(index + 1);
    }

    pub fn get(&self, key: &NativeKey) -> Option<PropertyValue<'_, T>> {
        match key {
            NativeKey::Index(index) => self.get_index(*index as usize).map(PropertyValue::Value),
            NativeKey::Name(name) if name.as_str() == LENGTH_KEY => {
                Some(PropertyValue::Length(self.len()))
            }
            NativeKey::Name(_) | NativeKey::Symbol(_) => self
                .own_property(key)
                .map(|property| PropertyValue::Value(&property.value)),
        }
    }

    /// Assign `value` to `key`. Returns `false` if the property is read only, which
    /// includes `length` (use [`set_len()`] to change it).
    ///
    /// [`set_len()`]: Self::set_len
    pub fn set(&mut self, key: NativeKey, value: T) -> bool {
        match key {
            NativeKey::Index(index) => {
                self.set_index(index as usize, value);
                true
            }
            NativeKey::Name(ref name) if name.as_str() == LENGTH_KEY => false,
            NativeKey::Name(_) | NativeKey::Symbol(_) => match self.own_property_mut(&key) {
                Some(property) if property.flags.writable => {
                    property.value = value;
                    true
                }
                Some(_) => false,
                None => {
                    self.insert_own_property(key, OwnProperty {
                        value,
                        flags: PropertyFlags::DATA,
                    });
                    true
                }
            },
        }
    }

    /// Define (or redefine) an own property with explicit flags. Element slots only
    /// accept [`PropertyFlags::DATA`]. Returns `false` when the definition is
    /// rejected.
    pub fn define(&mut self, key: NativeKey, value: T, flags: PropertyFlags) -> bool {
        match key {
            NativeKey::Index(index) => {
                if flags != PropertyFlags::DATA {
                    return false;
                }
                self.set_index(index as usize, value);
                true
            }
            NativeKey::Name(ref name) if name.as_str() == LENGTH_KEY => false,
            NativeKey::Name(_) | NativeKey::Symbol(_) => match self.own_property_mut(&key) {
                Some(property) if !property.flags.configurable => false,
                Some(property) => {
                    *property = OwnProperty { value, flags };
                    true
                }
                None => {
                    self.insert_own_property(key, OwnProperty { value, flags });
                    true
                }
            },
        }
    }

    #[must_use]
    pub fn has(&self, key: &NativeKey) -> bool {
        match key {
            NativeKey::Index(index) => self.get_index(*index as usize).is_some(),
            NativeKey::Name(name) if name.as_str() == LENGTH_KEY => true,
            NativeKey::Name(_) | NativeKey::Symbol(_) => self.own_property(key).is_some(),
        }
    }

    /// Delete an own property. Deleting a slot leaves a hole and does not change the
    /// length. Returns `false` only for non-configurable properties (including
    /// `length`), deleting something absent succeeds.
    pub fn delete(&mut self, key: &NativeKey) -> bool {
        match key {
            NativeKey::Index(index) => {
                self.elements.remove(&(*index as usize));
                true
            }
            NativeKey::Name(name) if name.as_str() == LENGTH_KEY => false,
            NativeKey::Name(name) => {
                remove_configurable(&mut self.names, |it| it.as_str() == name.as_str())
            }
            NativeKey::Symbol(symbol) => remove_configurable(&mut self.symbols, |it| it == symbol),
        }
    }

    #[must_use]
    pub fn own_keys(&self) -> Vec<NativeKey> {
        let present_indices = self
            .elements
            .keys()
            .filter_map(|index| u32::try_from(*index).ok())
            .map(NativeKey::Index);

        present_indices
            .chain(std::iter::once(NativeKey::Name(InlineString::from(LENGTH_KEY))))
            .chain(self.names.iter().map(|(name, _)| NativeKey::Name(name.clone())))
            .chain(
                self.symbols
                    .iter()
                    .map(|(symbol, _)| NativeKey::Symbol(symbol.clone())),
            )
            .collect()
    }

    #[must_use]
    pub fn get_own_property_descriptor(
        &self,
        key: &NativeKey,
    ) -> Option<PropertyDescriptor<'_, T>> {
        match key {
            NativeKey::Index(index) => {
                self.get_index(*index as usize).map(|value| PropertyDescriptor {
                    value: PropertyValue::Value(value),
                    flags: PropertyFlags::DATA,
                })
            }
            NativeKey::Name(name) if name.as_str() == LENGTH_KEY => Some(PropertyDescriptor {
                value: PropertyValue::Length(self.len()),
                flags: PropertyFlags::LENGTH,
            }),
            NativeKey::Name(_) | NativeKey::Symbol(_) => {
                self.own_property(key).map(OwnProperty::descriptor)
            }
        }
    }

    fn own_property(&self, key: &NativeKey) -> Option<&OwnProperty<T>> {
        match key {
            NativeKey::Name(name) => self
                .names
                .iter()
                .find(|(it, _)| it.as_str() == name.as_str())
                .map(|(_, property)| property),
            NativeKey::Symbol(symbol) => self
                .symbols
                .iter()
                .find(|(it, _)| it == symbol)
                .map(|(_, property)| property),
            NativeKey::Index(_) => None,
        }
    }

    fn own_property_mut(&mut self, key: &NativeKey) -> Option<&mut OwnProperty<T>> {
        match key {
            NativeKey::Name(name) => self
                .names
                .iter_mut()
                .find(|(it, _)| it.as_str() == name.as_str())
                .map(|(_, property)| property),
            NativeKey::Symbol(symbol) => self
                .symbols
                .iter_mut()
                .find(|(it, _)| it == symbol)
                .map(|(_, property)| property),
            NativeKey::Index(_) => None,
        }
    }

    fn insert_own_property(&mut self, key: NativeKey, property: OwnProperty<T>) {
        match key {
            NativeKey::Name(name) => self.names.push((name, property)),
            NativeKey::Symbol(symbol) => self.symbols.push((symbol, property)),
            NativeKey::Index(index) => self.set_index(index as usize, property.value),
        }
    }
}

fn remove_configurable<K, T>(
    entries: &mut Vec<(K, OwnProperty<T>)>,
    is_match: impl Fn(&K) -> bool,
) -> bool {
    match entries.iter().position(|(key, _)| is_match(key)) {
        Some(position) if !entries[position].1.flags.configurable => false,
        Some(position) => {
            entries.remove(position);
            true
        }
        None => true,
    }
}

/// Iterator over every slot of a [`NativeSequence`], returned by
/// [`NativeSequence::slots()`]. Holes are looked up, never stored.
#[derive(Debug)]
pub struct Slots<'a, T> {
    elements: &'a BTreeMap<usize, T>,
    range: Range<usize>,
}

impl<T> Clone for Slots<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            range: self.range.clone(),
        }
    }
}

impl<'a, T> Iterator for Slots<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|index| self.elements.get(&index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.range.size_hint() }
}

impl<T> DoubleEndedIterator for Slots<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|index| self.elements.get(&index))
    }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}
impl<T> FusedIterator for Slots<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn abc() -> NativeSequence<&'static str> {
        NativeSequence::from_slots(vec![Some("a"), Some("b"), Some("c")])
    }

    #[test]
    fn test_get_slots_and_length() {
        let seq = abc();
        assert_eq!(seq.get(&NativeKey::Index(0)), Some(PropertyValue::Value(&"a")));
        assert_eq!(seq.get(&NativeKey::Index(3)), None);
        assert_eq!(
            seq.get(&NativeKey::from_name(LENGTH_KEY)),
            Some(PropertyValue::Length(3))
        );
        assert_eq!(seq.get(&NativeKey::from_name("-1")), None);
    }

    #[test]
    fn test_set_past_end_creates_holes() {
        let mut seq = abc();
        assert!(seq.set(NativeKey::Index(5), "f"));
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.get_index(3), None);
        assert!(!seq.has(&NativeKey::Index(4)));
        assert_eq!(seq.get_index(5), Some(&"f"));
    }

    #[test]
    fn test_length_is_not_assignable_through_set() {
        let mut seq = abc();
        assert!(!seq.set(NativeKey::from_name(LENGTH_KEY), "x"));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_set_len_truncates_and_grows() {
        let mut seq = abc();
        seq.set_len(1).unwrap();
        assert_eq!(seq.slots().collect::<Vec<_>>(), vec![Some(&"a")]);
        seq.set_len(3).unwrap();
        assert_eq!(seq.slots().collect::<Vec<_>>(), vec![Some(&"a"), None, None]);
        assert_eq!(seq.present_count(), 1);
        assert_eq!(
            seq.set_len(MAX_SEQUENCE_LENGTH + 1),
            Err(SequenceError::InvalidLength {
                requested: MAX_SEQUENCE_LENGTH + 1
            })
        );
    }

    #[test]
    fn test_delete_leaves_hole() {
        let mut seq = abc();
        assert!(seq.delete(&NativeKey::Index(1)));
        assert_eq!(seq.slots().collect::<Vec<_>>(), vec![Some(&"a"), None, Some(&"c")]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_delete_respects_configurable_flag() {
        let mut seq = abc();
        let flags = PropertyFlags {
            writable: false,
            enumerable: false,
            configurable: false,
        };
        assert!(seq.define(NativeKey::from_name("locked"), "v", flags));
        assert!(!seq.delete(&NativeKey::from_name("locked")));
        assert!(!seq.set(NativeKey::from_name("locked"), "w"));
        assert_eq!(
            seq.get(&NativeKey::from_name("locked")),
            Some(PropertyValue::Value(&"v"))
        );
        assert!(!seq.delete(&NativeKey::from_name(LENGTH_KEY)));
        assert!(seq.delete(&NativeKey::from_name("absent")));
    }

    #[test]
    fn test_define_rejects_non_data_flags_on_slots() {
        let mut seq = abc();
        let read_only = PropertyFlags {
            writable: false,
            ..PropertyFlags::DATA
        };
        assert!(!seq.define(NativeKey::Index(0), "z", read_only));
        assert!(seq.define(NativeKey::Index(0), "z", PropertyFlags::DATA));
        assert_eq!(seq.get_index(0), Some(&"z"));
    }

    #[test]
    fn test_own_keys_order() {
        let mut seq = NativeSequence::from_slots(vec![Some(1), None, Some(3)]);
        let symbol = SymbolKey::registered("test");
        seq.set(NativeKey::Symbol(symbol.clone()), 10);
        seq.set(NativeKey::from_name("tag"), 20);
        assert_eq!(seq.own_keys(), vec![
            NativeKey::Index(0),
            NativeKey::Index(2),
            NativeKey::from_name("length"),
            NativeKey::from_name("tag"),
            NativeKey::Symbol(symbol),
        ]);
    }

    #[test]
    fn test_descriptors() {
        let seq = abc();
        assert_eq!(
            seq.get_own_property_descriptor(&NativeKey::Index(0)),
            Some(PropertyDescriptor {
                value: PropertyValue::Value(&"a"),
                flags: PropertyFlags::DATA,
            })
        );
        assert_eq!(
            seq.get_own_property_descriptor(&NativeKey::from_name(LENGTH_KEY)),
            Some(PropertyDescriptor {
                value: PropertyValue::Length(3),
                flags: PropertyFlags::LENGTH,
            })
        );
        assert_eq!(
            seq.get_own_property_descriptor(&NativeKey::from_name("nonexistent")),
            None
        );
    }

    #[test]
    fn test_far_write_does_not_store_holes() {
        let mut seq = abc();
        assert!(seq.set(NativeKey::Index(3_999_999_999), "z"));
        assert_eq!(seq.len(), 4_000_000_000);
        assert_eq!(seq.present_count(), 4);
        assert_eq!(seq.get_index(3_999_999_999), Some(&"z"));
        assert!(!seq.has(&NativeKey::Index(3_999_999_998)));
        assert_eq!(seq.slots().rev().take(2).collect::<Vec<_>>(), vec![Some(&"z"), None]);
        assert_eq!(seq.own_keys().len(), 5);
    }

    #[test]
    fn test_max_length_and_truncate() {
        let mut seq = NativeSequence::<u8>::with_len(MAX_SEQUENCE_LENGTH).unwrap();
        assert_eq!(seq.len() as u64, MAX_SEQUENCE_LENGTH);
        assert_eq!(seq.present_count(), 0);
        assert_eq!(seq.slots().len() as u64, MAX_SEQUENCE_LENGTH);
        seq.set_index(7, 1);
        seq.set_index(4_000_000_000, 2);
        seq.set_len(8).unwrap();
        assert_eq!(seq.present_count(), 1);
        assert_eq!(seq.get_index(7), Some(&1));
        assert_eq!(seq.own_keys(), vec![
            NativeKey::Index(7),
            NativeKey::from_name(LENGTH_KEY)
        ]);
    }
}
