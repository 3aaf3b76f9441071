// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Translation between external 1-based keys and internal 0-based keys.
//!
//! ```text
//! External (1-based)   "1"   "2"   "3"   "length"   Symbol(x)
//!                       │     │     │       │          │
//!        to_internal()  ▼     ▼     ▼       ▼          ▼
//! Internal (0-based)   [0]   [1]   [2]   "length"   Symbol(x)
//! ```
//!
//! A key is positional if it parses as a non-negative integer no larger than
//! [`MAX_SEQUENCE_LENGTH`]. Parsing is lenient: leading
//! whitespace is skipped and trailing garbage is ignored, so `"2abc"` is position 2.
//! A key that does not parse is passed through unchanged, this is a silent fallback and
//! never an error.

use super::DEBUG_ONE_BASED_KEYS;
use crate::{NativeKey, PropertyKey};

/// Maximum number of elements an ordered sequence can hold (2^32 − 1).
pub const MAX_SEQUENCE_LENGTH: u64 = 4_294_967_295;

/// Parse the leading integer of `input`, ignoring leading whitespace and anything after
/// the digits. Returns [`None`] if there are no digits. Values too large for [`i64`]
/// saturate, which still puts them outside any valid position.
#[must_use]
pub fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (is_negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = digits[..digit_count].bytes().fold(0_i64, |acc, byte| {
        acc.saturating_mul(10).saturating_add(i64::from(byte - b'0'))
    });

    Some(if is_negative { -magnitude } else { magnitude })
}

/// Parse `input` as a position in `0..=MAX_SEQUENCE_LENGTH`.
fn parse_position(input: &str) -> Option<u64> {
    parse_leading_integer(input)
        .and_then(|number| u64::try_from(number).ok())
        .filter(|number| *number <= MAX_SEQUENCE_LENGTH)
}

/// Translate an external 1-based `position` to the backing key. Position `0` becomes
/// the non-positional name `"-1"`, so it never reads a slot.
#[must_use]
pub fn translate_position(position: u64) -> NativeKey {
    if position > MAX_SEQUENCE_LENGTH {
        return NativeKey::Name(super::property_key::number_key(position));
    }
    match i64::try_from(position) {
        Ok(position) => NativeKey::from_offset(position - 1),
        Err(_) => NativeKey::Name(super::property_key::number_key(position)),
    }
}

/// Convert an external key to the key used on the backing sequence.
#[must_use]
pub fn to_internal(key: &PropertyKey) -> NativeKey {
    let translated = match key {
        PropertyKey::Symbol(symbol) => NativeKey::Symbol(symbol.clone()),
        PropertyKey::Name(name) => match parse_position(name) {
            Some(position) => translate_position(position),
            None => NativeKey::from_name(name),
        },
    };

    DEBUG_ONE_BASED_KEYS.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "to_internal",
            external = %key,
            internal = ?translated,
        );
    });

    translated
}

/// Convert a key reported by the backing sequence back to its external form. Used when
/// enumerating own keys.
#[must_use]
pub fn to_external(key: NativeKey) -> PropertyKey {
    match key {
        NativeKey::Index(index) => PropertyKey::from(u64::from(index) + 1),
        NativeKey::Name(name) => match parse_position(&name) {
            Some(position) => PropertyKey::from(position + 1),
            None => PropertyKey::Name(name),
        },
        NativeKey::Symbol(symbol) => PropertyKey::Symbol(symbol),
    }
}
