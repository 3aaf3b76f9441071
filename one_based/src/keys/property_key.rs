// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, SymbolKey};
use std::fmt::{Display, Formatter};

/// An externally visible property key of a [`OneBasedVec`].
///
/// Positions are string keys, like any other property name: `"1"` is the
/// first element. Use the [`From`] impls to build keys from numbers, strings and
/// symbols.
///
/// ```
/// use r3bl_one_based::{PropertyKey, SymbolKey};
///
/// assert_eq!(PropertyKey::from(1_usize), PropertyKey::from("1"));
/// assert!(PropertyKey::from(SymbolKey::ITERATOR).is_symbol());
/// ```
///
/// [`OneBasedVec`]: crate::OneBasedVec
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Name(InlineString),
    Symbol(SymbolKey),
}

impl PropertyKey {
    #[must_use]
    pub fn is_symbol(&self) -> bool { matches!(self, Self::Symbol(_)) }

    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Symbol(_) => None,
        }
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self { Self::Name(InlineString::from(name)) }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self { Self::Name(InlineString::from(name.as_str())) }
}

impl From<InlineString> for PropertyKey {
    fn from(name: InlineString) -> Self { Self::Name(name) }
}

impl From<usize> for PropertyKey {
    fn from(position: usize) -> Self { Self::from(position as u64) }
}

impl From<u64> for PropertyKey {
    fn from(position: u64) -> Self { Self::Name(number_key(position)) }
}

impl From<i64> for PropertyKey {
    fn from(position: i64) -> Self { Self::Name(number_key(position)) }
}

impl From<SymbolKey> for PropertyKey {
    fn from(symbol: SymbolKey) -> Self { Self::Symbol(symbol) }
}

pub(crate) fn number_key(number: impl Display) -> InlineString {
    use std::fmt::Write;
    let mut acc = InlineString::new();
    // Writing into an in-memory string is infallible.
    _ = write!(acc, "{number}");
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_keys_are_strings() {
        assert_eq!(PropertyKey::from(42_usize).as_name(), Some("42"));
        assert_eq!(PropertyKey::from(-1_i64).as_name(), Some("-1"));
        assert_eq!(PropertyKey::from(String::from("7")), PropertyKey::from("7"));
    }

    #[test]
    fn test_symbol_key_has_no_name() {
        let key = PropertyKey::from(SymbolKey::registered("test"));
        assert!(key.is_symbol());
        assert_eq!(key.as_name(), None);
        assert_eq!(key.to_string(), "Symbol(test)");
    }
}
