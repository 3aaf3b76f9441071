// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;
use std::{fmt::{Display, Formatter},
          sync::atomic::{AtomicU64, Ordering}};

static NEXT_UNIQUE_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A symbolic property key. Symbol keys are never positions, so they are never
/// translated.
///
/// There are three kinds of symbols:
/// - [`SymbolKey::new()`] - a unique symbol, equal only to itself (and its clones).
/// - [`SymbolKey::registered()`] - a symbol from the global registry, equal to every
///   other registered symbol with the same name.
/// - Well known symbols like [`SymbolKey::ITERATOR`].
///
/// # Example
///
/// ```
/// use r3bl_one_based::SymbolKey;
///
/// assert_ne!(SymbolKey::new(None), SymbolKey::new(None));
/// assert_eq!(SymbolKey::registered("test"), SymbolKey::registered("test"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKey {
    Unique {
        id: u64,
        description: Option<InlineString>,
    },
    Registered(InlineString),
    WellKnown(&'static str),
}

impl SymbolKey {
    pub const ITERATOR: SymbolKey = SymbolKey::WellKnown("Symbol.iterator");

    /// Create a new unique symbol.
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        let id = NEXT_UNIQUE_SYMBOL_ID.fetch_add(1, Ordering::Relaxed);
        Self::Unique {
            id,
            description: description.map(InlineString::from),
        }
    }

    /// Get the symbol for `name` from the global registry.
    #[must_use]
    pub fn registered(name: &str) -> Self { Self::Registered(InlineString::from(name)) }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Unique { description, .. } => description.as_deref(),
            Self::Registered(name) => Some(name.as_str()),
            Self::WellKnown(name) => Some(name),
        }
    }
}

impl Display for SymbolKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unique_symbols_are_distinct() {
        let first = SymbolKey::new(Some("same"));
        let second = SymbolKey::new(Some("same"));
        assert_ne!(first, second);
        assert_eq!(first.clone(), first);
    }

    #[test]
    fn test_registered_symbols_compare_by_name() {
        assert_eq!(SymbolKey::registered("a"), SymbolKey::registered("a"));
        assert_ne!(SymbolKey::registered("a"), SymbolKey::registered("b"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SymbolKey::ITERATOR.to_string(), "Symbol(Symbol.iterator)");
        assert_eq!(SymbolKey::registered("test").to_string(), "Symbol(test)");
        assert_eq!(SymbolKey::new(None).to_string(), "Symbol()");
    }
}
