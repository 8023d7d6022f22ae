//! Item-type registry for bibliographic records.
//!
//! This crate provides the static per-item-type tables (legal fields, legal
//! creator roles, the primary role) and the inverted base-field index used for
//! cross-type field addressing. The table is data, not code: every item type
//! shares one [`ItemTypeDefinition`] shape.

#![deny(missing_docs)]

pub mod base_field;
pub mod definition;
pub mod error;
pub mod item_type;
pub mod registry;
mod table;

pub use base_field::{BaseFieldIndex, FieldRef, BASE_FIELDS};
pub use definition::{CreatorTypeDefinition, FieldDefinition, ItemTypeDefinition, ValueKind};
pub use error::RegistryError;
pub use item_type::ItemType;
pub use registry::{Registry, DEFAULT_PRIMARY_CREATOR_TYPE};
