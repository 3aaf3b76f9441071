// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Why 1-based?
//!
//! Some data is naturally addressed starting at 1: terminal rows and columns in VT-100
//! sequences, line numbers in an editor, spreadsheet rows, verse numbers, ordinal
//! positions coming from a user. Storing that data in a 0-based [`Vec`] and
//! remembering to add or subtract 1 at every boundary is exactly where off-by-one bugs
//! come from.
//!
//! This crate provides [`OneBasedVec`], an ordered sequence whose external positions
//! start at 1, while keeping the whole ordered-sequence contract: positional reads and
//! writes, structural reflection (existence checks, deletion, own keys, property
//! descriptors), searching, range operations, callback iteration, accumulation and
//! enumeration.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ OneBasedVec<T>  (façade, positions 1..=len)                  │
//! │                                                              │
//! │  keys/           to_internal() / to_external()               │
//! │  one_based_vec/  Operation catalogue → (ArgTransform,        │
//! │                  ResultTransform), TranslationGuard          │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │ translated keys, args, results
//! ┌───────────────────────────▼──────────────────────────────────┐
//! │ NativeSequence<T>  (backing, indices 0..len, holes, named    │
//! │                     and symbol keyed own properties)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every structural access goes through the key translation layer in [`keys`]:
//! numeric keys are shifted down by one on the way in and up by one on the way out,
//! while names like `"length"` and [`SymbolKey`]s pass through untouched.
//!
//! Every named operation goes through the method interception layer in
//! [`one_based_vec`]: each [`Operation`] declares how its position arguments are
//! rewritten ([`ArgTransform`]) and how its result is rebuilt ([`ResultTransform`]).
//! The rule for position arguments is "offset by one if positive": values greater
//! than zero are decremented, while zero, negative (count from the end) and omitted
//! values reach the backing sequence unchanged.
//!
//! # Example
//!
//! ```
//! use r3bl_one_based::{one_based_vec, OneBasedVec};
//!
//! let mut seq = one_based_vec!["a", "b", "c"];
//! assert_eq!(seq.get(1), Some(&"a"));
//! assert_eq!(seq.get(0), None);
//! assert_eq!(seq.index_of(&"c", None), Some(3));
//! assert_eq!(seq.slice(Some(2), None), one_based_vec!["b", "c"]);
//! assert!(!seq.includes(&"a", Some(2)));
//!
//! seq.fill("d", Some(2), None);
//! assert_eq!(seq, one_based_vec!["a", "d", "d"]);
//!
//! let positions: Vec<usize> = seq.keys().collect();
//! assert_eq!(positions, vec![1, 2, 3]);
//! ```
//!
//! # Explicit access
//!
//! [`OneBasedVec`] does not implement [`std::ops::Index`]: callers use
//! [`OneBasedVec::get()`], [`OneBasedVec::set()`], [`OneBasedVec::has_property()`] and
//! friends, so position `0` and out of range positions yield [`None`] instead of
//! panicking.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod error;
pub mod keys;
pub mod native;
pub mod one_based_vec;
#[cfg(feature = "serde")]
pub mod serde_support;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use error::*;
pub use keys::*;
pub use native::*;
pub use one_based_vec::*;

/// Stack allocated string storage for property names. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = smallstr::SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = smallvec::SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
