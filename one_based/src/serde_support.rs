// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`serde`] support for [`OneBasedVec`]. A sequence is written as a plain list of its
//! slots, holes as `null`, eg: `["a",null,"c"]`. Named and symbol keyed properties are
//! not part of the serialized form.

use crate::{MAX_SEQUENCE_LENGTH, OneBasedVec, SequenceError};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl<T: Serialize> Serialize for OneBasedVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.values())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneBasedVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let slots = Vec::<Option<T>>::deserialize(deserializer)?;
        let requested = u64::try_from(slots.len()).unwrap_or(u64::MAX);
        if requested > MAX_SEQUENCE_LENGTH {
            return Err(de::Error::custom(SequenceError::InvalidLength { requested }));
        }
        Ok(Self::from_slots(slots))
    }
}
