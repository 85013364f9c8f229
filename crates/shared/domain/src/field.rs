//! Tri-state update fields.
//!
//! An update delta must tell "the caller did not mention this field" apart from
//! "the caller cleared it". [`Field`] keeps those apart; `Option` cannot.
//!
//! On the wire an absent key is [`Field::Unset`], `null` is [`Field::Cleared`],
//! and anything else is [`Field::Value`]. Struct fields need `#[serde(default)]`
//! for the absent case.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    #[default]
    Unset,
    Cleared,
    Value(T),
}

impl<T> Field<T> {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Effective value of this delta field laid over `current`.
    #[must_use]
    pub fn overlay<'a>(&'a self, current: Option<&'a T>) -> Option<&'a T> {
        match self {
            Self::Unset => current,
            Self::Cleared => None,
            Self::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Cleared, Self::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            Self::Unset | Self::Cleared => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
