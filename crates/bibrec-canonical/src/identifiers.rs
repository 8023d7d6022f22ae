use crate::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alphabet used by object keys: digits 2-9 and uppercase letters without `O`.
static OBJECT_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[23456789ABCDEFGHIJKLMNPQRSTUVWXYZ]{8}$").expect("invalid regex"));

/// Key identifying an item, collection or search within a library
/// (pattern: eight characters from `23456789ABCDEFGHIJKLMNPQRSTUVWXYZ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Parses a validated key from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Self::is_valid(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "key",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Returns true if `value` is a well-formed key.
    pub fn is_valid(value: &str) -> bool {
        OBJECT_KEY_PATTERN.is_match(value)
    }

    /// Borrows the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ObjectKey> for String {
    fn from(key: ObjectKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
