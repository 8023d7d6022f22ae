use crate::creator::Creator;
use crate::shared::{Envelope, Tag};
use bibrec_canonical::{DateValue, ObjectKey, RelationMap};
use bibrec_schemas::{ItemType, Registry};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A normalized bibliographic item.
///
/// Registry fields live in `fields` as strings; keys the registry does not
/// know, and recognized keys whose values had the wrong JSON kind, live in
/// `preserved` exactly as received. Both flatten into the serialized payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Object key, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectKey>,
    /// Object version, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Item type tag.
    pub item_type: ItemType,
    /// Registry fields for the item type, by payload name.
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    /// Validated creators.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creator>,
    /// Tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Keys of the collections holding the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,
    /// Canonical relation map.
    #[serde(skip_serializing_if = "RelationMap::is_empty")]
    pub relations: RelationMap,
    /// Key of the parent item, for child notes and attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_item: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
    /// Last modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    /// Trash flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Unrecognized or wrongly-typed members, verbatim.
    #[serde(flatten)]
    pub preserved: Map<String, Value>,
    /// Transport envelope, when the input carried one.
    #[serde(skip)]
    pub envelope: Option<Envelope>,
    /// Parsed form of every non-empty date-kind field.
    #[serde(skip)]
    pub dates: BTreeMap<String, DateValue>,
}

impl ItemRecord {
    /// An empty record of `item_type`.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            key: None,
            version: None,
            item_type,
            fields: BTreeMap::new(),
            creators: Vec::new(),
            tags: Vec::new(),
            collections: Vec::new(),
            relations: RelationMap::new(),
            parent_item: None,
            date_added: None,
            date_modified: None,
            deleted: None,
            preserved: Map::new(),
            envelope: None,
            dates: BTreeMap::new(),
        }
    }

    /// Value of a registry field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Parsed value of a date-kind field.
    pub fn date(&self, name: &str) -> Option<&DateValue> {
        self.dates.get(name)
    }

    /// Value of the field implementing `base` on this item's type.
    pub fn base_field_value(&self, base: &str) -> Option<&str> {
        let def = Registry::global().get(self.item_type)?;
        let field = def.field_for_base(base)?;
        self.field(field.field)
    }

    /// Title under whatever name the item type uses for it.
    pub fn title(&self) -> Option<&str> {
        self.base_field_value("title")
    }
}

/// A normalized collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    /// Object key, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectKey>,
    /// Object version, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Display name.
    pub name: String,
    /// Parent collection key; top-level collections serialize as `false`.
    #[serde(serialize_with = "parent_or_false")]
    pub parent_collection: Option<String>,
    /// Canonical relation map.
    #[serde(skip_serializing_if = "RelationMap::is_empty")]
    pub relations: RelationMap,
    /// Unrecognized or wrongly-typed members, verbatim.
    #[serde(flatten)]
    pub preserved: Map<String, Value>,
    /// Transport envelope, when the input carried one.
    #[serde(skip)]
    pub envelope: Option<Envelope>,
}

fn parent_or_false<S: Serializer>(parent: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match parent {
        Some(key) => serializer.serialize_str(key),
        None => serializer.serialize_bool(false),
    }
}

/// One clause of a saved search. The members are opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCondition {
    /// Searched attribute, e.g. `title` or `collection`.
    pub condition: String,
    /// Comparison, e.g. `contains` or `isNot`.
    pub operator: String,
    /// Operand.
    pub value: String,
}

/// A normalized saved search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    /// Object key, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ObjectKey>,
    /// Object version, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Display name.
    pub name: String,
    /// Conditions in the order given.
    pub conditions: Vec<SearchCondition>,
    /// Unrecognized or wrongly-typed members, verbatim.
    #[serde(flatten)]
    pub preserved: Map<String, Value>,
    /// Transport envelope, when the input carried one.
    #[serde(skip)]
    pub envelope: Option<Envelope>,
}
