use bibrec_canonical::{ObjectKey, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How a tag was attached to an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TagType {
    /// Added by a person (wire value 0 or absent).
    #[default]
    Manual,
    /// Derived automatically, e.g. from imported subject headings (wire value 1).
    Automatic,
}

impl TryFrom<u8> for TagType {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TagType::Manual),
            1 => Ok(TagType::Automatic),
            other => Err(ValidationError::OutOfBounds {
                field: "tag type",
                value: other.to_string(),
            }),
        }
    }
}

impl From<TagType> for u8 {
    fn from(value: TagType) -> Self {
        match value {
            TagType::Manual => 0,
            TagType::Automatic => 1,
        }
    }
}

/// A free-text label on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Label text.
    pub tag: String,
    /// Origin; absent means manual.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<TagType>,
    /// Unrecognized members of the tag object, verbatim.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Tag {
    /// A manual tag.
    pub fn manual(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            tag_type: None,
            extra: Map::new(),
        }
    }

    /// An automatic tag.
    pub fn automatic(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            tag_type: Some(TagType::Automatic),
            extra: Map::new(),
        }
    }

    /// Origin, defaulting to manual.
    pub fn kind(&self) -> TagType {
        self.tag_type.unwrap_or_default()
    }
}

/// Transport-owned wrapper around a record payload.
///
/// Populated when a record is read from the remote service; this layer
/// checks its shape and carries it along untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Object key.
    pub key: ObjectKey,
    /// Object version.
    pub version: u64,
    /// Owning library description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<Map<String, Value>>,
    /// Hypermedia links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Map<String, Value>>,
    /// Derived metadata (creator summary, child counts, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}
