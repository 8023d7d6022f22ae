//! Record validation and normalization for bibliographic items.
//!
//! This crate provides:
//! - Record types for items, collections and saved searches
//! - The creator-role validator
//! - The record validator/normalizer with its diagnostic report
//! - Blank item templates for record creation
//!
//! Core invariants:
//! - Validation is pure and synchronous; the only shared state is the read-only registry
//! - Unrecognized input is preserved and reported, never rejected
//! - Only an unresolvable item type, a malformed envelope or a non-object input is fatal
//!
#![deny(missing_docs)]

/// Creator entries and role checks.
pub mod creator;
/// Transport envelope handling.
pub mod envelope;
/// Error types for fatal failures and creator checks.
pub mod errors;
/// Normalized record types.
pub mod records;
/// Diagnostics and validation reports.
pub mod report;
/// Shared value types (tags, envelope).
pub mod shared;
/// Blank item templates.
pub mod template;
/// Scalar value checks.
pub mod values;
/// The record validator/normalizer.
pub mod validator;

pub use bibrec_canonical::{format_date, parse_date, DateValue, RelationMap};
pub use bibrec_schemas::{ItemType, Registry};
pub use creator::{validate_creator, Creator, CreatorInput, CreatorName};
pub use errors::{CreatorError, FatalError};
pub use records::{CollectionRecord, ItemRecord, SearchCondition, SearchRecord};
pub use report::{Diagnostic, DiagnosticCode, ReportStatus, Validated, ValidationReport};
pub use shared::{Envelope, Tag, TagType};
pub use validator::{ValidationOptions, Validator};

/// Validates an item with default options against the global registry.
pub fn validate_item(input: &serde_json::Value) -> Result<Validated<ItemRecord>, FatalError> {
    Validator::default().validate_item(input)
}

/// Validates a collection with default options.
pub fn validate_collection(input: &serde_json::Value) -> Result<Validated<CollectionRecord>, FatalError> {
    Validator::default().validate_collection(input)
}

/// Validates a saved search with default options.
pub fn validate_search(input: &serde_json::Value) -> Result<Validated<SearchRecord>, FatalError> {
    Validator::default().validate_search(input)
}

/// A blank item of `item_type` from the global registry.
pub fn template(item_type: &str) -> Result<ItemRecord, bibrec_schemas::RegistryError> {
    template::template_with(Registry::global(), item_type)
}
