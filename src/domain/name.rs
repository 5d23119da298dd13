//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name.
///
/// Surrounding whitespace is trimmed; the original casing is kept for
/// display. [`Name::key`] gives the case-folded form the address book
/// indexes by.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Bill").unwrap();
/// assert_eq!(name.as_str(), "Bill");
/// assert_eq!(name.key(), "bill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name from trimmed input, rejecting empty or
    /// whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if nothing but whitespace was given.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The case-folded lookup key for this name.
    pub fn key(&self) -> String {
        normalize(&self.0)
    }
}

/// Trim and case-fold a raw name the same way [`Name::key`] does.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
