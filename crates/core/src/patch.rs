//! Tri-state field for partial updates.
//!
//! JSON distinguishes a missing key from an explicit `null`, but
//! `Option<Option<T>>` collapses both into `None` under serde's default
//! handling. [`Patch`] keeps the three cases apart:
//!
//! | JSON            | Value             | Meaning                |
//! |-----------------|-------------------|------------------------|
//! | key missing     | `Patch::Absent`   | leave column unchanged |
//! | `"key": null`   | `Patch::Null`     | clear column to NULL   |
//! | `"key": value`  | `Patch::Value(v)` | set column to `v`      |
//!
//! Fields must be annotated with `#[serde(default)]` so a missing key
//! resolves to `Absent`.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// `true` unless the field was omitted.
    pub fn is_present(&self) -> bool {
        !matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// The new value, if one was supplied. `Null` and `Absent` both yield `None`;
    /// pair with [`Patch::is_present`] to tell them apart.
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
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
        // Only reached when the key is present; `#[serde(default)]` covers absence.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
