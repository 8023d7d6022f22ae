//! Creator entries and the creator-role validator.
//!
//! A creator is either one organizational name or a personal name split into
//! first and last parts. The split is a closed variant so a validated
//! [`Creator`] can never carry both shapes.

use crate::errors::CreatorError;
use bibrec_schemas::{ItemType, ItemTypeDefinition, Registry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The two name representations of a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatorName {
    /// Single-field name, typically an organization.
    Organizational {
        /// Full name.
        name: String,
    },
    /// Two-field personal name. Either part may be empty.
    #[serde(rename_all = "camelCase")]
    Personal {
        /// Given name(s).
        #[serde(default)]
        first_name: String,
        /// Family name.
        #[serde(default)]
        last_name: String,
    },
}

impl CreatorName {
    /// Personal name from its parts.
    pub fn personal(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        CreatorName::Personal {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Organizational name.
    pub fn organizational(name: impl Into<String>) -> Self {
        CreatorName::Organizational { name: name.into() }
    }

    /// Name as it would be displayed in a listing.
    pub fn display_name(&self) -> String {
        match self {
            CreatorName::Organizational { name } => name.clone(),
            CreatorName::Personal {
                first_name,
                last_name,
            } => match (first_name.is_empty(), last_name.is_empty()) {
                (false, false) => format!("{last_name}, {first_name}"),
                (true, _) => last_name.clone(),
                (false, true) => first_name.clone(),
            },
        }
    }
}

/// A validated creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Role played, legal for the owning item type.
    pub creator_type: String,
    /// Name in one of its two shapes.
    #[serde(flatten)]
    pub name: CreatorName,
    /// Unrecognized members of the entry, verbatim.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Creator {
    /// A creator with no extra members.
    pub fn new(creator_type: impl Into<String>, name: CreatorName) -> Self {
        Self {
            creator_type: creator_type.into(),
            name,
            extra: Map::new(),
        }
    }
}

/// A creator entry as it arrives, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorInput {
    /// Role, if given.
    #[serde(default)]
    pub creator_type: Option<String>,
    /// Single-field name.
    #[serde(default)]
    pub name: Option<String>,
    /// Given name(s).
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Members that are none of the above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatorInput {
    /// Trims every member and turns empty strings into absent members.
    ///
    /// Never fills in one name shape from the other; partial personal names
    /// stay partial.
    pub fn normalized(&self) -> Self {
        fn clean(part: &Option<String>) -> Option<String> {
            part.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }
        Self {
            creator_type: clean(&self.creator_type),
            name: clean(&self.name),
            first_name: clean(&self.first_name),
            last_name: clean(&self.last_name),
            extra: self.extra.clone(),
        }
    }

    /// Checks the role against `def`.
    pub fn check_role(&self, def: &ItemTypeDefinition) -> Result<(), CreatorError> {
        let role = self
            .creator_type
            .as_deref()
            .ok_or(CreatorError::MissingCreatorType)?;
        if def.allows_creator_type(role) {
            Ok(())
        } else {
            Err(CreatorError::InvalidCreatorType {
                creator_type: role.to_string(),
                item_type: def.item_type.as_str().to_string(),
            })
        }
    }

    /// The single populated name shape. Expects a normalized entry.
    pub fn name_shape(&self) -> Result<CreatorName, CreatorError> {
        let personal = self.first_name.is_some() || self.last_name.is_some();
        match (&self.name, personal) {
            (Some(_), true) => Err(CreatorError::AmbiguousCreatorName),
            (Some(name), false) => Ok(CreatorName::organizational(name.clone())),
            (None, true) => Ok(self.personal_name()),
            (None, false) => Err(CreatorError::EmptyCreatorName),
        }
    }

    /// The personal parts alone, ignoring any single-field name.
    pub fn personal_name(&self) -> CreatorName {
        CreatorName::personal(
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
        )
    }

    /// Validates the normalized entry against `def`: role first, then name
    /// shape. Blank parts count as absent.
    pub fn validate(&self, def: &ItemTypeDefinition) -> Result<Creator, CreatorError> {
        let input = self.normalized();
        input.check_role(def)?;
        let name = input.name_shape()?;
        Ok(Creator {
            creator_type: input.creator_type.unwrap_or_default(),
            name,
            extra: input.extra,
        })
    }
}

/// Validates `creator` for `item_type` against the global registry.
pub fn validate_creator(item_type: ItemType, creator: &CreatorInput) -> Result<Creator, CreatorError> {
    match Registry::global().get(item_type) {
        Some(def) => creator.validate(def),
        None => Err(CreatorError::InvalidCreatorType {
            creator_type: creator.creator_type.clone().unwrap_or_default(),
            item_type: item_type.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(role: &str, name: Option<&str>, first: Option<&str>, last: Option<&str>) -> CreatorInput {
        CreatorInput {
            creator_type: Some(role.to_string()),
            name: name.map(str::to_string),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            extra: Map::new(),
        }
    }

    #[test]
    fn role_is_checked_before_name() {
        let creator = input("director", None, None, None);
        let err = validate_creator(ItemType::JournalArticle, &creator).unwrap_err();
        assert!(matches!(err, CreatorError::InvalidCreatorType { .. }));
    }

    #[test]
    fn partial_personal_names_are_accepted() {
        let creator = input("author", None, None, Some("Plato"));
        let ok = validate_creator(ItemType::Book, &creator).unwrap();
        assert_eq!(ok.name, CreatorName::personal("", "Plato"));
    }

    #[test]
    fn both_shapes_are_ambiguous() {
        let creator = input("author", Some("ACME"), Some("Ada"), None);
        assert_eq!(
            validate_creator(ItemType::Book, &creator),
            Err(CreatorError::AmbiguousCreatorName)
        );
    }

    #[test]
    fn whitespace_only_name_is_empty_after_normalize() {
        let creator = input("author", Some("   "), None, Some("")).normalized();
        assert_eq!(creator.name_shape(), Err(CreatorError::EmptyCreatorName));
    }

    #[test]
    fn blank_parts_count_as_absent() {
        let blank = input("author", Some(""), None, None);
        assert_eq!(
            validate_creator(ItemType::Book, &blank),
            Err(CreatorError::EmptyCreatorName)
        );
        let blank_name_with_first = input("author", Some("  "), Some("Ada"), None);
        assert_eq!(
            validate_creator(ItemType::Book, &blank_name_with_first).unwrap().name,
            CreatorName::personal("Ada", "")
        );
        let padded_role = input(" author ", Some("ACME"), None, None);
        assert_eq!(
            validate_creator(ItemType::Book, &padded_role).unwrap().creator_type,
            "author"
        );
    }

    #[test]
    fn normalize_does_not_synthesize() {
        let creator = input(" editor ", None, Some(" Grace "), None).normalized();
        assert_eq!(creator.creator_type.as_deref(), Some("editor"));
        assert_eq!(creator.first_name.as_deref(), Some("Grace"));
        assert_eq!(creator.last_name, None);
        assert_eq!(creator.name, None);
    }

    #[test]
    fn serializes_flat() {
        let mut creator = Creator::new("author", CreatorName::personal("Ada", "Lovelace"));
        assert_eq!(
            serde_json::to_value(&creator).unwrap(),
            serde_json::json!({"creatorType": "author", "firstName": "Ada", "lastName": "Lovelace"})
        );
        assert_eq!(creator.name.display_name(), "Lovelace, Ada");

        creator.extra.insert("fieldMode".into(), serde_json::json!(1));
        assert_eq!(serde_json::to_value(&creator).unwrap()["fieldMode"], serde_json::json!(1));
    }
}
