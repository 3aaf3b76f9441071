// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Own property values, attribute flags and descriptors.

/// The value of an own property. Element slots and named properties hold a `T`, the
/// `length` pseudo-property holds the element count.
#[derive(Debug, PartialEq)]
pub enum PropertyValue<'a, T> {
    Value(&'a T),
    Length(usize),
}

impl<T> Clone for PropertyValue<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for PropertyValue<'_, T> {}

impl<'a, T> PropertyValue<'a, T> {
    /// The `T` held by this property, if it is not `length`.
    #[must_use]
    pub fn value(self) -> Option<&'a T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Length(_) => None,
        }
    }
}

/// Attribute flags of an own property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyFlags {
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl PropertyFlags {
    /// Flags of a property created by plain assignment, and of every element slot.
    pub const DATA: PropertyFlags = PropertyFlags {
        writable: true,
        enumerable: true,
        configurable: true,
    };

    /// Flags of the `length` pseudo-property.
    pub const LENGTH: PropertyFlags = PropertyFlags {
        writable: true,
        enumerable: false,
        configurable: false,
    };
}

impl Default for PropertyFlags {
    fn default() -> Self { Self::DATA }
}

/// Snapshot of an own property: its value and its flags.
#[derive(Debug, PartialEq)]
pub struct PropertyDescriptor<'a, T> {
    pub value: PropertyValue<'a, T>,
    pub flags: PropertyFlags,
}

/// A named or symbol keyed own property stored by a [`NativeSequence`].
///
/// [`NativeSequence`]: crate::NativeSequence
#[derive(Debug, Clone, PartialEq)]
pub struct OwnProperty<T> {
    pub value: T,
    pub flags: PropertyFlags,
}

impl<T> OwnProperty<T> {
    pub fn descriptor(&self) -> PropertyDescriptor<'_, T> {
        PropertyDescriptor {
            value: PropertyValue::Value(&self.value),
            flags: self.flags,
        }
    }
}
