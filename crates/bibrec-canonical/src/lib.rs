//! Canonical value primitives for bibliographic records.
//!
//! These types sit below the item-type registry: they know nothing about
//! which fields an item type carries, only how individual values (object
//! keys, free-form dates, relation maps) are parsed, checked and rendered
//! in one deterministic form.
//!
#![deny(missing_docs)]

/// Bibliographic date parsing and formatting.
pub mod date;
/// Object key newtypes.
pub mod identifiers;
/// JSON path helper used to locate diagnostics.
pub mod path;
/// Relation map canonicalization.
pub mod relations;
/// Validation errors shared by canonical types.
pub mod validation;

pub use date::{format_date, parse_date, DatePart, DateValue, Season};
pub use identifiers::ObjectKey;
pub use path::JsonPath;
pub use relations::{RelationError, RelationMap, RelationTarget};
pub use validation::ValidationError;
