// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised by the backing sequence. See [`SequenceError`].
//!
//! The 1-based façade does not introduce failure modes of its own. Malformed numeric
//! keys silently fall back to being treated as named keys, and panics raised by user
//! callbacks propagate unchanged. The only errors are the ones the backing sequence
//! itself reports.

use crate::Operation;

/// Errors from [`NativeSequence`] operations, surfaced unchanged by [`OneBasedVec`].
///
/// | Variant                   | Cause                                                     |
/// | :------------------------ | :-------------------------------------------------------- |
/// | [`InvalidLength`]         | Requested length exceeds [`MAX_SEQUENCE_LENGTH`]          |
/// | [`ReduceOfEmptySequence`] | Reduce without an initial value over no present elements |
///
/// [`InvalidLength`]: Self::InvalidLength
/// [`ReduceOfEmptySequence`]: Self::ReduceOfEmptySequence
/// [`MAX_SEQUENCE_LENGTH`]: crate::MAX_SEQUENCE_LENGTH
/// [`NativeSequence`]: crate::NativeSequence
/// [`OneBasedVec`]: crate::OneBasedVec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SequenceError {
    /// The requested length cannot be represented by an ordered sequence.
    #[error("Invalid sequence length: {requested}")]
    #[diagnostic(
        code(r3bl_one_based::invalid_length),
        help("Sequence lengths must be in the range 0..=4294967295")
    )]
    InvalidLength {
        /// The length that was asked for.
        requested: u64,
    },

    /// [`reduce()`] or [`reduce_right()`] was called without an initial accumulator
    /// on a sequence that has no present elements to seed it with.
    ///
    /// [`reduce()`]: crate::OneBasedVec::reduce
    /// [`reduce_right()`]: crate::OneBasedVec::reduce_right
    #[error("{operation} of empty sequence with no initial value")]
    #[diagnostic(
        code(r3bl_one_based::reduce_of_empty_sequence),
        help("Use `reduce_with()` or `reduce_right_with()` to supply an initial value")
    )]
    ReduceOfEmptySequence {
        /// Which accumulation was attempted.
        operation: Operation,
    },
}
