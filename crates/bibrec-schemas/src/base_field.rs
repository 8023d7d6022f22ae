//! Inverted base-field index.
//!
//! A base field is the cross-type name of a concept that individual item types
//! expose under their own names (`publisher` is `label` on an audio recording
//! and `university` on a thesis). The index answers "which concrete fields
//! implement this base field" without scanning the table.

use crate::definition::ItemTypeDefinition;
use crate::item_type::ItemType;
use serde::Serialize;
use std::collections::BTreeMap;

/// Every base field name.
pub const BASE_FIELDS: &[&str] = &[
    "authority",
    "date",
    "medium",
    "number",
    "pages",
    "publicationTitle",
    "publisher",
    "title",
    "type",
    "volume",
];

/// A concrete field on a concrete item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    /// Item type carrying the field.
    pub item_type: ItemType,
    /// Field name on that item type.
    pub field: &'static str,
}

/// Base field to implementing fields, and alias back to base field.
#[derive(Debug, Clone, Default)]
pub struct BaseFieldIndex {
    by_base: BTreeMap<&'static str, Vec<FieldRef>>,
    aliases: BTreeMap<&'static str, &'static str>,
}

impl BaseFieldIndex {
    /// Builds the index from a definition table.
    ///
    /// Fields named after a base field count as implementing it directly.
    pub fn build(definitions: &[ItemTypeDefinition]) -> Self {
        let mut index = Self::default();
        for def in definitions {
            for field in def.fields {
                let base = match field.base_field {
                    Some(base) => {
                        index.aliases.insert(field.field, base);
                        base
                    }
                    None if is_base_field(field.field) => field.field,
                    None => continue,
                };
                index.by_base.entry(base).or_default().push(FieldRef {
                    item_type: def.item_type,
                    field: field.field,
                });
            }
        }
        for refs in index.by_base.values_mut() {
            refs.sort();
        }
        index
    }

    /// Fields implementing `base`, sorted by item type. Empty for unknown names.
    pub fn fields_for(&self, base: &str) -> &[FieldRef] {
        self.by_base.get(base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Base field a field name maps to, if it is an alias or a base field itself.
    pub fn base_of(&self, field: &str) -> Option<&'static str> {
        if let Some(base) = self.aliases.get(field) {
            return Some(*base);
        }
        BASE_FIELDS.iter().copied().find(|base| *base == field)
    }

    /// Number of base fields with at least one implementing field.
    pub fn len(&self) -> usize {
        self.by_base.len()
    }

    /// True if no base field has an implementing field.
    pub fn is_empty(&self) -> bool {
        self.by_base.is_empty()
    }
}

/// True if `name` is a base field.
pub fn is_base_field(name: &str) -> bool {
    BASE_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{CreatorTypeDefinition, FieldDefinition};

    static TABLE: &[ItemTypeDefinition] = &[
        ItemTypeDefinition {
            item_type: ItemType::Book,
            fields: &[FieldDefinition::text("title"), FieldDefinition::text("publisher")],
            creator_types: &[CreatorTypeDefinition::primary("author")],
        },
        ItemTypeDefinition {
            item_type: ItemType::Thesis,
            fields: &[
                FieldDefinition::text("title"),
                FieldDefinition::alias("university", "publisher"),
            ],
            creator_types: &[CreatorTypeDefinition::primary("author")],
        },
    ];

    #[test]
    fn direct_and_aliased_fields_are_indexed() {
        let index = BaseFieldIndex::build(TABLE);
        assert_eq!(
            index.fields_for("publisher"),
            &[
                FieldRef { item_type: ItemType::Book, field: "publisher" },
                FieldRef { item_type: ItemType::Thesis, field: "university" },
            ]
        );
        assert_eq!(index.fields_for("title").len(), 2);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn base_of_resolves_alias_and_identity() {
        let index = BaseFieldIndex::build(TABLE);
        assert_eq!(index.base_of("university"), Some("publisher"));
        assert_eq!(index.base_of("publisher"), Some("publisher"));
        assert_eq!(index.base_of("edition"), None);
    }

    #[test]
    fn unknown_base_has_no_fields() {
        let index = BaseFieldIndex::build(TABLE);
        assert!(index.fields_for("edition").is_empty());
    }
}
