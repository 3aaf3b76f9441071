// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed catalogue of intercepted operations, and the static table that maps each
//! [`Operation`] to how its arguments ([`ArgTransform`]) and its result
//! ([`ResultTransform`]) are translated.
//!
//! | Operation                                   | Arguments                   | Result            |
//! | :------------------------------------------ | :-------------------------- | :---------------- |
//! | `includes`                                  | start, default 1            | unchanged         |
//! | `indexOf`                                   | start, default 1            | found position +1 |
//! | `lastIndexOf`                               | start, default "to the end" | found position +1 |
//! | `slice`, `copyWithin`                       | every position              | unchanged         |
//! | `fill`                                      | start (1), end (len + 1)    | unchanged         |
//! | `splice`                                    | start                       | unchanged         |
//! | `forEach` `every` `some` `find`             | callback position +1        | unchanged         |
//! | `filter` `map` `reduce` `reduceRight`       | callback position +1        | unchanged         |
//! | `findIndex`                                 | callback position +1        | found position +1 |
//! | `keys`, `entries`                           | none                        | positions +1      |
//! | everything else                             | none                        | unchanged         |
//!
//! Operations that produce a sequence (`slice`, `concat`, `filter`, ...) return a new
//! [`OneBasedVec`](crate::OneBasedVec), in place ones return `&mut Self`.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// An intercepted operation. The string form is the camelCase operation name, eg:
/// `Operation::LastIndexOf` is `"lastIndexOf"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter, EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Concat,
    Includes,
    Join,
    Slice,
    ToString,
    ToLocaleString,
    IndexOf,
    LastIndexOf,
    CopyWithin,
    Fill,
    Pop,
    Push,
    Reverse,
    Shift,
    Unshift,
    Sort,
    Splice,
    ForEach,
    Every,
    Some,
    Find,
    Filter,
    FindIndex,
    Map,
    Reduce,
    ReduceRight,
    Keys,
    Values,
    Entries,
}

/// How the index bearing arguments of an [`Operation`] are rewritten before they reach
/// the backing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgTransform {
    /// No index semantics.
    None,
    /// The start position, with `default` applied when omitted ([`None`] means "search
    /// to the end" and passes through).
    SearchFrom { default: Option<i64> },
    /// Every position argument.
    AllPositions,
    /// Start defaults to 1, end defaults to `len + 1`.
    FillRange,
    /// Only the first (start) argument.
    SpliceStart,
    /// Position passed to the user callback is shifted up by one.
    CallbackPosition,
}

/// How the result of an [`Operation`] is rebuilt for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTransform {
    Unchanged,
    /// A found 0-based index is shifted up by one, "not found" is preserved.
    FoundPosition,
    /// Every enumerated 0-based key is shifted up by one.
    Positions,
}

impl Operation {
    #[must_use]
    pub const fn arg_transform(self) -> ArgTransform {
        match self {
            Self::Includes | Self::IndexOf => ArgTransform::SearchFrom { default: Some(1) },
            Self::LastIndexOf => ArgTransform::SearchFrom { default: None },
            Self::Slice | Self::CopyWithin => ArgTransform::AllPositions,
            Self::Fill => ArgTransform::FillRange,
            Self::Splice => ArgTransform::SpliceStart,
            Self::ForEach
            | Self::Every
            | Self::Some
            | Self::Find
            | Self::Filter
            | Self::FindIndex
            | Self::Map
            | Self::Reduce
            | Self::ReduceRight => ArgTransform::CallbackPosition,
            Self::Concat
            | Self::Join
            | Self::ToString
            | Self::ToLocaleString
            | Self::Pop
            | Self::Push
            | Self::Reverse
            | Self::Shift
            | Self::Unshift
            | Self::Sort
            | Self::Keys
            | Self::Values
            | Self::Entries => ArgTransform::None,
        }
    }

    #[must_use]
    pub const fn result_transform(self) -> ResultTransform {
        match self {
            Self::IndexOf | Self::LastIndexOf | Self::FindIndex => {
                ResultTransform::FoundPosition
            }
            Self::Keys | Self::Entries => ResultTransform::Positions,
            Self::Concat
            | Self::Slice
            | Self::CopyWithin
            | Self::Fill
            | Self::Reverse
            | Self::Sort
            | Self::Splice
            | Self::Filter
            | Self::Map
            | Self::Includes
            | Self::Join
            | Self::ToString
            | Self::ToLocaleString
            | Self::Pop
            | Self::Push
            | Self::Shift
            | Self::Unshift
            | Self::ForEach
            | Self::Every
            | Self::Some
            | Self::Find
            | Self::Reduce
            | Self::ReduceRight
            | Self::Values => ResultTransform::Unchanged,
        }
    }
}

/// Values greater than zero are decremented. Zero and negative values (which count
/// from the end) pass through unchanged.
#[must_use]
pub const fn offset_by_one_if_positive(value: i64) -> i64 {
    if value > 0 { value - 1 } else { value }
}

/// 0-based index to external 1-based position.
#[must_use]
pub const fn to_external_position(index: usize) -> usize { index + 1 }

impl ArgTransform {
    /// Rewrite the position arguments of a call, in declaration order. Omitted
    /// arguments are [`None`].
    #[must_use]
    pub fn translate_positions<const N: usize>(
        self,
        mut args: [Option<i64>; N],
        len: usize,
    ) -> [Option<i64>; N] {
        for (arg_index, arg) in args.iter_mut().enumerate() {
            *arg = self.translate_position(arg_index, *arg, len);
        }
        args
    }

    fn translate_position(self, arg_index: usize, arg: Option<i64>, len: usize) -> Option<i64> {
        let translated = match (self, arg_index) {
            (Self::SearchFrom { default }, 0) => arg.or(default),
            (Self::FillRange, 0) => Some(arg.unwrap_or(1)),
            (Self::FillRange, 1) => {
                Some(arg.unwrap_or_else(|| i64::try_from(len).map_or(i64::MAX, |len| len + 1)))
            }
            (Self::AllPositions, _) | (Self::SpliceStart, 0) => arg,
            _ => return arg,
        };
        translated.map(offset_by_one_if_positive)
    }

    /// The position a user callback receives for the 0-based `index` it is called
    /// with.
    #[must_use]
    pub const fn callback_position(self, index: usize) -> usize {
        match self {
            Self::CallbackPosition => to_external_position(index),
            _ => index,
        }
    }
}

impl ResultTransform {
    /// Shift a found 0-based index to a 1-based position. "Not found" stays "not
    /// found".
    #[must_use]
    pub fn translate_found(self, found: Option<usize>) -> Option<usize> {
        found.map(|index| self.translate_index(index))
    }

    /// Shift an enumerated or found 0-based index, if this transform rewrites
    /// positions.
    #[must_use]
    pub const fn translate_index(self, index: usize) -> usize {
        match self {
            Self::FoundPosition | Self::Positions => to_external_position(index),
            Self::Unchanged => index,
        }
    }
}
