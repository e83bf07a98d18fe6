//! Immutable owner record and the field-bag it is built from.

use serde::{Deserialize, Serialize};

use super::error::OwnerError;

/// Plain field-bag used to construct or replace a [`Person`].
///
/// Callers own and may freely mutate this; a `Person` built from it keeps its
/// own copy. Missing keys deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonData {
    pub first_name: String,
    pub last_name: String,
}

impl PersonData {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Parse a JSON field-bag such as `{"firstName":"Kaio","lastName":"Silveira"}`.
    pub fn from_json(raw: &str) -> Result<Self, OwnerError> {
        serde_json::from_str(raw).map_err(|err| OwnerError::InvalidArgument(err.to_string()))
    }
}

/// Read-only owner record. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    /// Copy both fields out of `data`; no reference to `data` is retained.
    pub fn new(data: &PersonData) -> Self {
        Self {
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        }
    }

    /// Parse a JSON field-bag; malformed input is [`OwnerError::InvalidArgument`].
    pub fn from_json(raw: &str) -> Result<Self, OwnerError> {
        PersonData::from_json(raw).map(|data| Self::new(&data))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Fresh mutable field-bag holding this record's values.
    pub fn to_data(&self) -> PersonData {
        PersonData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.last_name.is_empty() {
            return f.write_str(&self.first_name);
        }
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
