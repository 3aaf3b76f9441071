// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 0-based backing sequence. See [`NativeSequence`].

// Attach sources.
pub mod native_operations;
pub mod native_sequence;
pub mod property;
pub mod relative_index;

// Re-export.
pub use native_operations::*;
pub use native_sequence::*;
pub use property::*;
pub use relative_index::*;
