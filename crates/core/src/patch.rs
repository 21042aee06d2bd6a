//! Field-level presence tracking for partial updates.
//!
//! A plain `Option<T>` cannot tell a field the client left out apart from a
//! field the client sent as `null`. [`Patch`] keeps the two apart so the
//! merge step can keep the stored value for the former and reject the latter.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// One field of a partial-update payload.
///
/// Struct fields of this type must carry `#[serde(default)]` so that a
/// missing key deserializes to [`Patch::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// The key was not present in the payload.
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Merge this field onto `current`.
    ///
    /// Absent keeps `current`, a value replaces it, and an explicit null is
    /// rejected because `field` is not nullable.
    pub fn merge_onto(self, current: T, field: &str) -> Result<T, CoreError> {
        match self {
            Patch::Absent => Ok(current),
            Patch::Value(value) => Ok(value),
            Patch::Null => Err(CoreError::Validation(format!("{field} cannot be null"))),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
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
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
