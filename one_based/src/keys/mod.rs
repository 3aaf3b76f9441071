// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Property keys and the translation between external 1-based keys and internal
//! 0-based keys. See [`to_internal()`] and [`to_external()`].

/// Enable or disable debug logging for key translation.
pub const DEBUG_ONE_BASED_KEYS: bool = false;

// Attach sources.
pub mod key_translation;
pub mod native_key;
pub mod property_key;
pub mod symbol_key;

// Re-export.
pub use key_translation::*;
pub use native_key::*;
pub use property_key::*;
pub use symbol_key::*;
