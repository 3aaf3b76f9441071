// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 1-based façade over [`NativeSequence`]. See [`OneBasedVec`].
//!
//! [`NativeSequence`]: crate::NativeSequence

/// Enable or disable debug logging for the method interception layer.
pub const DEBUG_ONE_BASED_INTERCEPT: bool = false;

// Attach sources.
pub mod concat_arg;
pub mod intercepted_operations;
pub mod iterators;
pub mod one_based_vec_struct;
pub mod operation;
pub mod translation_guard;

// Re-export.
pub use concat_arg::*;
pub use intercepted_operations::*;
pub use iterators::*;
pub use one_based_vec_struct::*;
pub use operation::*;
pub use translation_guard::*;
