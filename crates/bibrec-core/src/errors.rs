use crate::report::DiagnosticCode;
use thiserror::Error;

/// Conditions that stop validation of a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FatalError {
    /// The input is not a JSON object.
    #[error("input is not a JSON object")]
    NotAnObject,
    /// The payload has no `itemType`.
    #[error("payload has no itemType")]
    MissingItemType,
    /// The `itemType` is not registered.
    #[error("unknown item type '{0}'")]
    UnknownItemType(String),
    /// The transport envelope is inconsistent or has the wrong shape.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}

impl From<bibrec_schemas::RegistryError> for FatalError {
    fn from(err: bibrec_schemas::RegistryError) -> Self {
        match err {
            bibrec_schemas::RegistryError::UnknownItemType(tag) => FatalError::UnknownItemType(tag),
            other => FatalError::UnknownItemType(other.to_string()),
        }
    }
}

/// Ways a creator entry can fail its checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreatorError {
    /// The role is not legal for the owning item type.
    #[error("creator type '{creator_type}' is not valid for item type '{item_type}'")]
    InvalidCreatorType {
        /// Role given.
        creator_type: String,
        /// Owning item type.
        item_type: String,
    },
    /// Both `name` and `firstName`/`lastName` are populated.
    #[error("creator has both a single-field name and a two-field name")]
    AmbiguousCreatorName,
    /// Neither name shape is populated.
    #[error("creator has no name")]
    EmptyCreatorName,
    /// No `creatorType` was given.
    #[error("creator has no creatorType")]
    MissingCreatorType,
    /// The entry is not an object or has non-string members.
    #[error("malformed creator: {0}")]
    MalformedCreator(String),
}

impl CreatorError {
    /// Diagnostic code this error is reported under.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            CreatorError::InvalidCreatorType { .. } => DiagnosticCode::InvalidCreatorType,
            CreatorError::AmbiguousCreatorName => DiagnosticCode::AmbiguousCreatorName,
            CreatorError::EmptyCreatorName => DiagnosticCode::EmptyCreatorName,
            CreatorError::MissingCreatorType | CreatorError::MalformedCreator(_) => {
                DiagnosticCode::MalformedCreator
            }
        }
    }
}
