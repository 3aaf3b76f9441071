// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resolution of relative offsets against a length.
//!
//! ```text
//! len = 5         0    1    2    3    4
//!               ┌────┬────┬────┬────┬────┐
//!               │    │    │    │    │    │
//!               └────┴────┴────┴────┴────┘
//! relative:      -5   -4   -3   -2   -1      (negative counts from the end)
//! ```
//!
//! Negative offsets below `-len` clamp to `0`, offsets above `len` clamp to `len`.

/// Resolve `relative` against `len`, clamping to `0..=len`.
#[must_use]
pub fn resolve_relative(relative: i64, len: usize) -> usize {
    let signed_len = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if relative < 0 {
        signed_len.saturating_add(relative).max(0)
    } else {
        relative.min(signed_len)
    };
    usize::try_from(resolved).unwrap_or(len)
}

/// Like [`resolve_relative()`], with `default` used when the argument was omitted.
#[must_use]
pub fn resolve_relative_or(relative: Option<i64>, default: usize, len: usize) -> usize {
    relative.map_or(default, |it| resolve_relative(it, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 5 => 0)]
    #[test_case(3, 5 => 3)]
    #[test_case(9, 5 => 5)]
    #[test_case(-1, 5 => 4)]
    #[test_case(-5, 5 => 0)]
    #[test_case(-9, 5 => 0)]
    #[test_case(i64::MAX, 5 => 5)]
    #[test_case(i64::MIN, 5 => 0)]
    #[test_case(-1, 0 => 0)]
    fn test_resolve_relative(relative: i64, len: usize) -> usize {
        resolve_relative(relative, len)
    }

    #[test]
    fn test_resolve_relative_or_uses_default_when_omitted() {
        assert_eq!(resolve_relative_or(None, 7, 3), 7);
        assert_eq!(resolve_relative_or(Some(-1), 7, 3), 2);
    }
}
