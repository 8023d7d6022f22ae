//! Item-type registry.
//!
//! The registry wraps the static definition table with an index by item type
//! and the inverted base-field index. The process-wide instance is built on
//! first use and never mutated, so it is read from any thread without locking.

use crate::base_field::{is_base_field, BaseFieldIndex, FieldRef};
use crate::definition::{CreatorTypeDefinition, FieldDefinition, ItemTypeDefinition};
use crate::error::RegistryError;
use crate::item_type::ItemType;
use crate::table;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Role assumed for new creators when an item type marks none as primary.
pub const DEFAULT_PRIMARY_CREATOR_TYPE: &str = "author";

static GLOBAL: Lazy<Registry> = Lazy::new(|| Registry::new(table::ITEM_TYPES));

/// Read-only lookup structure over an item-type table.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: &'static [ItemTypeDefinition],
    by_type: HashMap<ItemType, usize>,
    base_fields: BaseFieldIndex,
}

impl Registry {
    /// The process-wide registry over the built-in table.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Builds a registry over `definitions`.
    ///
    /// Later entries for an item type shadow earlier ones; use
    /// [`Registry::check_integrity`] to reject such tables.
    pub fn new(definitions: &'static [ItemTypeDefinition]) -> Self {
        let by_type = definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.item_type, idx))
            .collect();
        let base_fields = BaseFieldIndex::build(definitions);
        debug!(
            item_types = definitions.len(),
            base_fields = base_fields.len(),
            "item-type registry built"
        );
        Self {
            definitions,
            by_type,
            base_fields,
        }
    }

    /// Definition for a typed tag, if this registry carries it.
    pub fn get(&self, item_type: ItemType) -> Option<&'static ItemTypeDefinition> {
        let definitions = self.definitions;
        self.by_type.get(&item_type).map(|idx| &definitions[*idx])
    }

    /// Definition for a wire tag.
    pub fn lookup(&self, tag: &str) -> Result<&'static ItemTypeDefinition, RegistryError> {
        let item_type: ItemType = tag.parse()?;
        self.get(item_type)
            .ok_or_else(|| RegistryError::UnknownItemType(tag.to_string()))
    }

    /// Legal fields of `item_type`, in display order.
    pub fn fields(&self, item_type: ItemType) -> &'static [FieldDefinition] {
        self.get(item_type).map(|def| def.fields).unwrap_or(&[])
    }

    /// Legal creator roles of `item_type`, in display order.
    pub fn creator_types(&self, item_type: ItemType) -> &'static [CreatorTypeDefinition] {
        self.get(item_type).map(|def| def.creator_types).unwrap_or(&[])
    }

    /// The role marked primary for `item_type`, or
    /// [`DEFAULT_PRIMARY_CREATOR_TYPE`] when none is marked.
    pub fn primary_creator_type(&self, item_type: ItemType) -> &'static str {
        self.get(item_type)
            .and_then(ItemTypeDefinition::marked_primary_creator_type)
            .unwrap_or(DEFAULT_PRIMARY_CREATOR_TYPE)
    }

    /// Base field `field` aliases on `item_type`; `field` itself when it has
    /// no alias or is not a field of that type.
    pub fn resolve_base_field<'a>(&self, item_type: ItemType, field: &'a str) -> &'a str {
        self.get(item_type)
            .and_then(|def| def.field(field))
            .and_then(|def| def.base_field)
            .unwrap_or(field)
    }

    /// Every `(item type, field)` implementing `base`, sorted by item type.
    pub fn fields_for_base_field(&self, base: &str) -> Result<&[FieldRef], RegistryError> {
        if !is_base_field(base) {
            return Err(RegistryError::UnknownBaseField(base.to_string()));
        }
        Ok(self.base_fields.fields_for(base))
    }

    /// Base field a field name maps to in any item type.
    pub fn base_field_for(&self, field: &str) -> Option<&'static str> {
        self.base_fields.base_of(field)
    }

    /// Item types carried by this registry, in table order.
    pub fn item_types(&self) -> impl Iterator<Item = ItemType> + '_ {
        self.definitions.iter().map(|def| def.item_type)
    }

    /// The underlying table.
    pub fn definitions(&self) -> &'static [ItemTypeDefinition] {
        self.definitions
    }

    /// Verifies the table's own rules.
    ///
    /// Checks that item types are unique, that fields and roles are unique per
    /// type, that every alias names a base field, that no type implements a
    /// base field twice, that an alias name maps to the same base field in
    /// every type, and that at most one role per type is primary.
    pub fn check_integrity(&self) -> Result<(), RegistryError> {
        let mut seen_types = HashSet::new();
        let mut alias_targets: BTreeMap<&str, &str> = BTreeMap::new();

        for def in self.definitions {
            let tag = def.item_type.as_str();
            if !seen_types.insert(def.item_type) {
                return Err(integrity(format!("item type '{tag}' defined twice")));
            }

            let mut fields = HashSet::new();
            let mut bases = HashSet::new();
            for field in def.fields {
                if !fields.insert(field.field) {
                    return Err(integrity(format!("'{tag}' lists field '{}' twice", field.field)));
                }
                if let Some(base) = field.base_field {
                    if !is_base_field(base) {
                        return Err(integrity(format!(
                            "'{tag}.{}' aliases unknown base field '{base}'",
                            field.field
                        )));
                    }
                    if is_base_field(field.field) {
                        return Err(integrity(format!(
                            "'{tag}.{}' is a base field and cannot alias another",
                            field.field
                        )));
                    }
                    match alias_targets.insert(field.field, base) {
                        Some(previous) if previous != base => {
                            return Err(integrity(format!(
                                "'{}' aliases both '{previous}' and '{base}'",
                                field.field
                            )));
                        }
                        _ => {}
                    }
                }
                if is_base_field(field.canonical_name()) && !bases.insert(field.canonical_name()) {
                    return Err(integrity(format!(
                        "'{tag}' implements base field '{}' twice",
                        field.canonical_name()
                    )));
                }
            }

            let mut roles = HashSet::new();
            for role in def.creator_types {
                if !roles.insert(role.creator_type) {
                    return Err(integrity(format!(
                        "'{tag}' lists creator type '{}' twice",
                        role.creator_type
                    )));
                }
            }
            if def.creator_types.iter().filter(|role| role.primary).count() > 1 {
                return Err(integrity(format!("'{tag}' marks more than one primary creator type")));
            }
        }
        Ok(())
    }
}

fn integrity(message: String) -> RegistryError {
    RegistryError::Integrity(message)
}
