// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::property_key::number_key;
use crate::{InlineString, PropertyKey, SymbolKey};

/// Largest valid 0-based slot index of a [`NativeSequence`]: one less than
/// [`MAX_SEQUENCE_LENGTH`].
///
/// [`NativeSequence`]: crate::NativeSequence
/// [`MAX_SEQUENCE_LENGTH`]: crate::MAX_SEQUENCE_LENGTH
pub const MAX_NATIVE_INDEX: u32 = u32::MAX - 1;

/// A key as the 0-based backing sequence understands it.
///
/// A string key is a slot [`Index`] only if it is the canonical decimal rendering of a
/// number in `0..=MAX_NATIVE_INDEX` (no sign, no leading zeros). Everything else is a
/// [`Name`], including `"-1"` and `"01"`.
///
/// [`Index`]: Self::Index
/// [`Name`]: Self::Name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeKey {
    Index(u32),
    Name(InlineString),
    Symbol(SymbolKey),
}

impl NativeKey {
    /// The backing key for a 0-based offset that may be negative. Negative offsets are
    /// not slots, they are ordinary names (eg: `-1` becomes the name `"-1"`).
    #[must_use]
    pub fn from_offset(offset: i64) -> Self {
        match u32::try_from(offset) {
            Ok(index) if index <= MAX_NATIVE_INDEX => Self::Index(index),
            _ => Self::Name(number_key(offset)),
        }
    }

    /// Interpret `name` the way the backing sequence does, without any translation.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match canonical_index(name) {
            Some(index) => Self::Index(index),
            None => Self::Name(InlineString::from(name)),
        }
    }
}

impl From<&PropertyKey> for NativeKey {
    /// Untranslated conversion, used when translation is suspended.
    fn from(key: &PropertyKey) -> Self {
        match key {
            PropertyKey::Name(name) => Self::from_name(name),
            PropertyKey::Symbol(symbol) => Self::Symbol(symbol.clone()),
        }
    }
}

fn canonical_index(name: &str) -> Option<u32> {
    let is_canonical = !name.is_empty()
        && name.bytes().all(|byte| byte.is_ascii_digit())
        && (name == "0" || !name.starts_with('0'));
    if !is_canonical {
        return None;
    }
    name.parse::<u32>()
        .ok()
        .filter(|index| *index <= MAX_NATIVE_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("0", NativeKey::Index(0))]
    #[test_case("42", NativeKey::Index(42))]
    #[test_case("4294967294", NativeKey::Index(MAX_NATIVE_INDEX))]
    #[test_case("4294967295", NativeKey::Name("4294967295".into()))]
    #[test_case("-1", NativeKey::Name("-1".into()))]
    #[test_case("01", NativeKey::Name("01".into()))]
    #[test_case("1.5", NativeKey::Name("1.5".into()))]
    #[test_case("length", NativeKey::Name("length".into()))]
    fn test_from_name(name: &str, expected: NativeKey) {
        assert_eq!(NativeKey::from_name(name), expected);
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(NativeKey::from_offset(0), NativeKey::Index(0));
        assert_eq!(NativeKey::from_offset(-1), NativeKey::Name("-1".into()));
        assert_eq!(
            NativeKey::from_offset(i64::from(u32::MAX)),
            NativeKey::Name("4294967295".into())
        );
    }
}
