//! Patch - tri-state field wrapper for partial updates
//!
//! Distinguishes "field omitted" (keep the stored value) from "field
//! explicitly null" (clear it) from "field set to a value". Fields of
//! this type must carry `#[serde(default)]`: absence deserializes to
//! `Keep`, an explicit null to `Clear`, anything else to `Set`.

use serde::{Deserialize, Deserializer};

/// One field of a partial-update request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field was omitted; retain the stored value
    #[default]
    Keep,
    /// Field was explicitly null; clear the stored value
    Clear,
    /// Field was supplied; replace the stored value
    Set(T),
}

impl<T> Patch<T> {
    /// Resolve against the currently stored value
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// The supplied value, if any
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the field is present in the input; absence
        // is handled by #[serde(default)] on the field.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}
