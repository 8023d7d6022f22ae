//! Registry errors.

use thiserror::Error;

/// Errors raised by registry lookups and self-checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The tag is not one of the registered item types.
    #[error("unknown item type '{0}'")]
    UnknownItemType(String),
    /// The name is not one of the base fields.
    #[error("unknown base field '{0}'")]
    UnknownBaseField(String),
    /// The static table breaks one of its own rules.
    #[error("registry integrity violation: {0}")]
    Integrity(String),
}
