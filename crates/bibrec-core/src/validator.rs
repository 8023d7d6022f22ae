//! Record validator and normalizer.
//!
//! Validation is open-world: anything the registry does not recognize is
//! carried into the record verbatim and reported, never rejected. Only a
//! missing or unknown item type, a malformed envelope, or a non-object input
//! stop validation.
//!
//! Diagnostics come out in a fixed order: `key` and `version`, the item
//! type's registry fields in declaration order, the common structural keys,
//! then unrecognized keys in map order.

use crate::creator::{Creator, CreatorInput};
use crate::envelope::split_envelope;
use crate::errors::{CreatorError, FatalError};
use crate::records::{CollectionRecord, ItemRecord, SearchCondition, SearchRecord};
use crate::report::{DiagnosticCode, Validated, ValidationReport};
use crate::shared::{Tag, TagType};
use crate::values::{coerce_field, is_timestamp, kind_name};
use bibrec_canonical::{parse_date, JsonPath, ObjectKey, RelationError, RelationMap};
use bibrec_schemas::{ItemTypeDefinition, Registry, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Switches for optional checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Report unrecognized keys. They are preserved either way.
    pub report_unknown_fields: bool,
    /// Give creators without a role the item type's primary role. When off,
    /// such creators are dropped.
    pub default_creator_type: bool,
    /// Check `dateAdded`, `dateModified` and timestamp-kind fields.
    pub check_timestamps: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            report_unknown_fields: true,
            default_creator_type: true,
            check_timestamps: true,
        }
    }
}

/// Validates raw JSON records against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
    options: ValidationOptions,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(ValidationOptions::default())
    }
}

impl Validator<'static> {
    /// A validator over the global registry.
    pub fn new(options: ValidationOptions) -> Self {
        Self::with_registry(Registry::global(), options)
    }
}

impl<'r> Validator<'r> {
    /// A validator over a specific registry.
    pub fn with_registry(registry: &'r Registry, options: ValidationOptions) -> Self {
        Self { registry, options }
    }

    /// Options in effect.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates an item payload or enveloped item.
    pub fn validate_item(&self, input: &Value) -> Result<Validated<ItemRecord>, FatalError> {
        let (envelope, mut remaining) = split_envelope(input, "itemType")?;
        let def = match remaining.remove("itemType") {
            Some(Value::String(tag)) => self.registry.lookup(&tag)?,
            Some(other) => return Err(FatalError::UnknownItemType(other.to_string())),
            None => return Err(FatalError::MissingItemType),
        };

        let root = JsonPath::root();
        let mut report = ValidationReport::new();
        let mut record = ItemRecord::new(def.item_type);
        record.envelope = envelope;

        let (key, version) = take_identity(&mut remaining, &mut record.preserved, &mut report);
        record.key = key;
        record.version = version;

        for field in def.fields {
            let Some(value) = remaining.remove(field.field) else {
                continue;
            };
            let path = root.field(field.field);
            let Some(text) = coerce_field(field.value_kind, &value) else {
                report.push(
                    DiagnosticCode::InvalidFieldValue,
                    &path,
                    format!("expected a string, found {}; preserved", kind_name(&value)),
                );
                record.preserved.insert(field.field.to_string(), value);
                continue;
            };
            match field.value_kind {
                ValueKind::Date if !text.trim().is_empty() => {
                    let parsed = parse_date(&text);
                    if parsed.is_literal() {
                        report.push(
                            DiagnosticCode::UnparseableDate,
                            &path,
                            format!("'{text}' has no recognizable date structure; kept as literal"),
                        );
                    }
                    record.dates.insert(field.field.to_string(), parsed);
                }
                ValueKind::Timestamp => self.check_timestamp(&text, &path, &mut report),
                _ => {}
            }
            record.fields.insert(field.field.to_string(), text);
        }

        if let Some(value) = remaining.remove("creators") {
            match value {
                Value::Array(entries) => {
                    record.creators = self.creators(def, &entries, &root.field("creators"), &mut report)
                }
                other => preserve_wrong_kind("creators", "an array", other, &mut record.preserved, &mut report),
            }
        }
        if let Some(value) = remaining.remove("tags") {
            match value {
                Value::Array(entries) => record.tags = self.tags(&entries, &root.field("tags"), &mut report),
                other => preserve_wrong_kind("tags", "an array", other, &mut record.preserved, &mut report),
            }
        }
        if let Some(value) = remaining.remove("collections") {
            match value {
                Value::Array(entries) => {
                    record.collections = collections(&entries, &root.field("collections"), &mut report)
                }
                other => {
                    preserve_wrong_kind("collections", "an array", other, &mut record.preserved, &mut report)
                }
            }
        }
        if let Some(relations) = take_relations(&mut remaining, &mut record.preserved, &mut report) {
            record.relations = relations;
        }
        match remaining.remove("parentItem") {
            Some(Value::String(parent)) => {
                if !ObjectKey::is_valid(&parent) {
                    report.push(
                        DiagnosticCode::InvalidParentItem,
                        &root.field("parentItem"),
                        format!("'{parent}' is not an object key; kept"),
                    );
                }
                record.parent_item = Some(parent);
            }
            Some(Value::Bool(false)) | None => {}
            Some(other) => {
                preserve_wrong_kind("parentItem", "a string", other, &mut record.preserved, &mut report)
            }
        }
        record.date_added = self.take_timestamp("dateAdded", &mut remaining, &mut record.preserved, &mut report);
        record.date_modified =
            self.take_timestamp("dateModified", &mut remaining, &mut record.preserved, &mut report);
        match remaining.remove("deleted") {
            Some(Value::Bool(flag)) => record.deleted = Some(flag),
            Some(Value::Number(n)) if n.as_u64() == Some(0) || n.as_u64() == Some(1) => {
                record.deleted = Some(n.as_u64() == Some(1))
            }
            Some(other) => {
                preserve_wrong_kind("deleted", "a boolean", other, &mut record.preserved, &mut report)
            }
            None => {}
        }

        self.preserve_unknown(remaining, &mut record.preserved, &mut report, |name| {
            format!("'{name}' is not a field of {}; preserved", def.item_type)
        });

        debug!(
            item_type = %def.item_type,
            diagnostics = report.diagnostics.len(),
            status = ?report.status,
            "item validated"
        );
        Ok(Validated { record, report })
    }

    /// Validates a collection payload or enveloped collection.
    pub fn validate_collection(&self, input: &Value) -> Result<Validated<CollectionRecord>, FatalError> {
        let (envelope, mut remaining) = split_envelope(input, "name")?;
        let root = JsonPath::root();
        let mut report = ValidationReport::new();
        let mut preserved = Map::new();

        let (key, version) = take_identity(&mut remaining, &mut preserved, &mut report);
        let name = take_name(&mut remaining, &mut preserved, &mut report);
        let parent_collection = match remaining.remove("parentCollection") {
            Some(Value::String(parent)) => {
                if !ObjectKey::is_valid(&parent) {
                    report.push(
                        DiagnosticCode::InvalidCollectionKey,
                        &root.field("parentCollection"),
                        format!("'{parent}' is not an object key; kept"),
                    );
                }
                Some(parent)
            }
            Some(Value::Bool(false)) | None => None,
            Some(other) => {
                preserve_wrong_kind("parentCollection", "a string or false", other, &mut preserved, &mut report);
                None
            }
        };
        let relations = take_relations(&mut remaining, &mut preserved, &mut report).unwrap_or_default();
        self.preserve_unknown(remaining, &mut preserved, &mut report, |name| {
            format!("'{name}' is not a collection field; preserved")
        });

        debug!(diagnostics = report.diagnostics.len(), status = ?report.status, "collection validated");
        Ok(Validated {
            record: CollectionRecord {
                key,
                version,
                name,
                parent_collection,
                relations,
                preserved,
                envelope,
            },
            report,
        })
    }

    /// Validates a saved-search payload or enveloped search.
    pub fn validate_search(&self, input: &Value) -> Result<Validated<SearchRecord>, FatalError> {
        let (envelope, mut remaining) = split_envelope(input, "name")?;
        let root = JsonPath::root();
        let mut report = ValidationReport::new();
        let mut preserved = Map::new();

        let (key, version) = take_identity(&mut remaining, &mut preserved, &mut report);
        let name = take_name(&mut remaining, &mut preserved, &mut report);
        let conditions = match remaining.remove("conditions") {
            Some(Value::Array(entries)) => conditions(&entries, &root.field("conditions"), &mut report),
            Some(other) => {
                preserve_wrong_kind("conditions", "an array", other, &mut preserved, &mut report);
                Vec::new()
            }
            None => Vec::new(),
        };
        self.preserve_unknown(remaining, &mut preserved, &mut report, |name| {
            format!("'{name}' is not a search field; preserved")
        });

        debug!(diagnostics = report.diagnostics.len(), status = ?report.status, "search validated");
        Ok(Validated {
            record: SearchRecord {
                key,
                version,
                name,
                conditions,
                preserved,
                envelope,
            },
            report,
        })
    }

    fn creators(
        &self,
        def: &ItemTypeDefinition,
        entries: &[Value],
        path: &JsonPath,
        report: &mut ValidationReport,
    ) -> Vec<Creator> {
        let mut creators = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let path = path.index(idx);
            let input = match entry {
                Value::Object(_) => CreatorInput::deserialize(entry),
                other => {
                    let err = CreatorError::MalformedCreator(format!("expected an object, found {}", kind_name(other)));
                    report.push(err.code(), &path, format!("{err}; dropped"));
                    continue;
                }
            };
            let mut input = match input {
                Ok(input) => input.normalized(),
                Err(err) => {
                    let err = CreatorError::MalformedCreator(err.to_string());
                    report.push(err.code(), &path, format!("{err}; dropped"));
                    continue;
                }
            };

            if input.creator_type.is_none() {
                if !self.options.default_creator_type {
                    let err = CreatorError::MissingCreatorType;
                    report.push(err.code(), &path, format!("{err}; dropped"));
                    continue;
                }
                let primary = self.registry.primary_creator_type(def.item_type);
                report.push(
                    DiagnosticCode::DefaultedCreatorType,
                    &path.field("creatorType"),
                    format!("no creatorType; assumed '{primary}'"),
                );
                input.creator_type = Some(primary.to_string());
            }
            if let Err(err) = input.check_role(def) {
                report.push(err.code(), &path.field("creatorType"), format!("{err}; kept"));
            }

            let name = match input.name_shape() {
                Ok(name) => name,
                Err(err @ CreatorError::AmbiguousCreatorName) => {
                    report.push(err.code(), &path, format!("{err}; kept firstName/lastName"));
                    input.personal_name()
                }
                Err(err) => {
                    report.push(err.code(), &path, format!("{err}; dropped"));
                    continue;
                }
            };
            self.report_extra(&input.extra, &path, "creator", report);
            creators.push(Creator {
                creator_type: input.creator_type.unwrap_or_default(),
                name,
                extra: input.extra,
            });
        }
        creators
    }

    fn check_timestamp(&self, text: &str, path: &JsonPath, report: &mut ValidationReport) {
        if self.options.check_timestamps && !text.is_empty() && !is_timestamp(text) {
            report.push(
                DiagnosticCode::InvalidTimestamp,
                path,
                format!("'{text}' is not a timestamp; kept"),
            );
        }
    }

    fn take_timestamp(
        &self,
        name: &str,
        remaining: &mut Map<String, Value>,
        preserved: &mut Map<String, Value>,
        report: &mut ValidationReport,
    ) -> Option<String> {
        match remaining.remove(name)? {
            Value::String(text) => {
                self.check_timestamp(&text, &JsonPath::root().field(name), report);
                Some(text)
            }
            other => {
                preserve_wrong_kind(name, "a string", other, preserved, report);
                None
            }
        }
    }

    fn report_extra(&self, extra: &Map<String, Value>, path: &JsonPath, what: &str, report: &mut ValidationReport) {
        if !self.options.report_unknown_fields {
            return;
        }
        for name in extra.keys() {
            report.push(
                DiagnosticCode::UnknownFieldPreserved,
                &path.field(name),
                format!("'{name}' is not a {what} field; preserved"),
            );
        }
    }

    fn preserve_unknown(
        &self,
        remaining: Map<String, Value>,
        preserved: &mut Map<String, Value>,
        report: &mut ValidationReport,
        message: impl Fn(&str) -> String,
    ) {
        for (name, value) in remaining {
            if self.options.report_unknown_fields {
                report.push(
                    DiagnosticCode::UnknownFieldPreserved,
                    &JsonPath::root().field(&name),
                    message(&name),
                );
            }
            preserved.insert(name, value);
        }
    }

    fn tags(&self, entries: &[Value], path: &JsonPath, report: &mut ValidationReport) -> Vec<Tag> {
        let mut tags: Vec<Tag> = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let path = path.index(idx);
            let (text, raw_type, extra) = match entry {
                Value::String(text) => (text.as_str(), None, Map::new()),
                Value::Object(object) => match object.get("tag") {
                    Some(Value::String(text)) => {
                        let extra: Map<String, Value> = object
                            .iter()
                            .filter(|(name, _)| !matches!(name.as_str(), "tag" | "type"))
                            .map(|(name, value)| (name.clone(), value.clone()))
                            .collect();
                        (text.as_str(), object.get("type"), extra)
                    }
                    _ => {
                        report.push(
                            DiagnosticCode::InvalidFieldValue,
                            &path,
                            "tag object has no string 'tag'; dropped",
                        );
                        continue;
                    }
                },
                other => {
                    report.push(
                        DiagnosticCode::InvalidFieldValue,
                        &path,
                        format!("expected a string or object, found {}; dropped", kind_name(other)),
                    );
                    continue;
                }
            };
            let text = text.trim();
            if text.is_empty() {
                report.push(DiagnosticCode::EmptyTag, &path, "tag text is empty; dropped");
                continue;
            }
            let tag_type = match raw_type {
                None | Some(Value::Null) => None,
                Some(value) => match value.as_u64().and_then(|n| u8::try_from(n).ok()).map(TagType::try_from) {
                    Some(Ok(tag_type)) => Some(tag_type),
                    _ => {
                        report.push(
                            DiagnosticCode::InvalidTagType,
                            &path.field("type"),
                            format!("tag type {value} is neither 0 nor 1; treated as manual"),
                        );
                        None
                    }
                },
            };
            if tags.iter().any(|seen| seen.tag == text && seen.kind() == tag_type.unwrap_or_default()) {
                report.push(
                    DiagnosticCode::DuplicateRemoved,
                    &path,
                    format!("duplicate tag '{text}' removed"),
                );
                continue;
            }
            self.report_extra(&extra, &path, "tag", report);
            tags.push(Tag {
                tag: text.to_string(),
                tag_type,
                extra,
            });
        }
        tags
    }
}

fn preserve_wrong_kind(
    name: &str,
    expected: &str,
    value: Value,
    preserved: &mut Map<String, Value>,
    report: &mut ValidationReport,
) {
    report.push(
        DiagnosticCode::InvalidFieldValue,
        &JsonPath::root().field(name),
        format!("expected {expected}, found {}; preserved", kind_name(&value)),
    );
    preserved.insert(name.to_string(), value);
}

fn take_identity(
    remaining: &mut Map<String, Value>,
    preserved: &mut Map<String, Value>,
    report: &mut ValidationReport,
) -> (Option<ObjectKey>, Option<u64>) {
    let key = match remaining.remove("key") {
        Some(Value::String(key)) if ObjectKey::is_valid(&key) => ObjectKey::parse(key).ok(),
        Some(other) => {
            preserve_wrong_kind("key", "an object key", other, preserved, report);
            None
        }
        None => None,
    };
    let version = match remaining.remove("version") {
        Some(value) => match value.as_u64() {
            Some(version) => Some(version),
            None => {
                preserve_wrong_kind("version", "a non-negative integer", value, preserved, report);
                None
            }
        },
        None => None,
    };
    (key, version)
}

fn take_name(
    remaining: &mut Map<String, Value>,
    preserved: &mut Map<String, Value>,
    report: &mut ValidationReport,
) -> String {
    match remaining.remove("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        Some(Value::String(name)) => {
            report.push(DiagnosticCode::MissingName, &JsonPath::root().field("name"), "name is empty");
            name
        }
        Some(other) => {
            preserve_wrong_kind("name", "a string", other, preserved, report);
            String::new()
        }
        None => {
            report.push(DiagnosticCode::MissingName, &JsonPath::root().field("name"), "name is missing");
            String::new()
        }
    }
}

fn take_relations(
    remaining: &mut Map<String, Value>,
    preserved: &mut Map<String, Value>,
    report: &mut ValidationReport,
) -> Option<RelationMap> {
    match remaining.remove("relations")? {
        Value::Object(raw) => {
            let (relations, errors) = RelationMap::canonicalize_lenient(&raw);
            let path = JsonPath::root().field("relations");
            for err in errors {
                let code = match err {
                    RelationError::EmptyRelationTarget { .. } => DiagnosticCode::EmptyRelationTarget,
                    RelationError::InvalidRelationTarget { .. } => DiagnosticCode::InvalidRelationTarget,
                };
                report.push(code, &path.field(err.predicate()), format!("{err}; dropped"));
            }
            Some(relations)
        }
        other => {
            preserve_wrong_kind("relations", "an object", other, preserved, report);
            None
        }
    }
}

fn collections(entries: &[Value], path: &JsonPath, report: &mut ValidationReport) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let path = path.index(idx);
        let Value::String(key) = entry else {
            report.push(
                DiagnosticCode::InvalidFieldValue,
                &path,
                format!("expected a collection key, found {}; dropped", kind_name(entry)),
            );
            continue;
        };
        if keys.contains(key) {
            report.push(
                DiagnosticCode::DuplicateRemoved,
                &path,
                format!("duplicate collection '{key}' removed"),
            );
            continue;
        }
        if !ObjectKey::is_valid(key) {
            report.push(
                DiagnosticCode::InvalidCollectionKey,
                &path,
                format!("'{key}' is not an object key; kept"),
            );
        }
        keys.push(key.clone());
    }
    keys
}

fn conditions(entries: &[Value], path: &JsonPath, report: &mut ValidationReport) -> Vec<SearchCondition> {
    let mut conditions = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let member = |name: &str| entry.get(name).and_then(Value::as_str).map(str::to_string);
        match (member("condition"), member("operator"), member("value")) {
            (Some(condition), Some(operator), Some(value)) => conditions.push(SearchCondition {
                condition,
                operator,
                value,
            }),
            _ => report.push(
                DiagnosticCode::InvalidSearchCondition,
                &path.index(idx),
                "condition needs string 'condition', 'operator' and 'value'; dropped",
            ),
        }
    }
    conditions
}
