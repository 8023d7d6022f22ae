//! Shapes of the per-item-type table entries.

use crate::item_type::ItemType;
use serde::{Deserialize, Serialize};

/// How a field's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Free text.
    Text,
    /// Free-form bibliographic date, parsed by the date codec.
    Date,
    /// Count-like value; JSON numbers are accepted and stored as text.
    Number,
    /// Machine timestamp (RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`).
    Timestamp,
}

/// One legal field of an item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Field name as it appears in the payload.
    pub field: &'static str,
    /// Cross-type base field this field aliases, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_field: Option<&'static str>,
    /// Value interpretation.
    pub value_kind: ValueKind,
}

impl FieldDefinition {
    /// Plain text field.
    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            base_field: None,
            value_kind: ValueKind::Text,
        }
    }

    /// Number-kind field.
    pub const fn number(field: &'static str) -> Self {
        Self {
            field,
            base_field: None,
            value_kind: ValueKind::Number,
        }
    }

    /// Date-kind field.
    pub const fn date(field: &'static str) -> Self {
        Self {
            field,
            base_field: None,
            value_kind: ValueKind::Date,
        }
    }

    /// Timestamp-kind field.
    pub const fn timestamp(field: &'static str) -> Self {
        Self {
            field,
            base_field: None,
            value_kind: ValueKind::Timestamp,
        }
    }

    /// Text field aliasing `base`.
    pub const fn alias(field: &'static str, base: &'static str) -> Self {
        Self {
            field,
            base_field: Some(base),
            value_kind: ValueKind::Text,
        }
    }

    /// Date field aliasing `base`.
    pub const fn date_alias(field: &'static str, base: &'static str) -> Self {
        Self {
            field,
            base_field: Some(base),
            value_kind: ValueKind::Date,
        }
    }

    /// The base field this field answers to (itself when unaliased).
    pub fn canonical_name(&self) -> &'static str {
        self.base_field.unwrap_or(self.field)
    }
}

/// One legal creator role of an item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorTypeDefinition {
    /// Role name, e.g. `author`.
    pub creator_type: &'static str,
    /// Whether this is the default role for new creators.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub primary: bool,
}

impl CreatorTypeDefinition {
    /// The default role of an item type.
    pub const fn primary(creator_type: &'static str) -> Self {
        Self {
            creator_type,
            primary: true,
        }
    }

    /// Any other legal role.
    pub const fn secondary(creator_type: &'static str) -> Self {
        Self {
            creator_type,
            primary: false,
        }
    }
}

/// Legal shape of one item type. Immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTypeDefinition {
    /// Item type this entry describes.
    pub item_type: ItemType,
    /// Legal fields, in display order.
    pub fields: &'static [FieldDefinition],
    /// Legal creator roles, in display order.
    pub creator_types: &'static [CreatorTypeDefinition],
}

impl ItemTypeDefinition {
    /// Looks up a field by payload name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|def| def.field == name)
    }

    /// True if `name` is a legal field of this item type.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// True if `role` is a legal creator role of this item type.
    pub fn allows_creator_type(&self, role: &str) -> bool {
        self.creator_types.iter().any(|def| def.creator_type == role)
    }

    /// The role marked primary, if any.
    pub fn marked_primary_creator_type(&self) -> Option<&'static str> {
        self.creator_types
            .iter()
            .find(|def| def.primary)
            .map(|def| def.creator_type)
    }

    /// Field of this type that aliases (or is) `base`.
    pub fn field_for_base(&self, base: &str) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|def| def.canonical_name() == base)
    }
}
