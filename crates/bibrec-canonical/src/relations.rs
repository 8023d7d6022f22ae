use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Error returned when a relation map cannot be canonicalized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// A predicate mapped to an empty array.
    #[error("relation predicate '{predicate}' has no targets")]
    EmptyRelationTarget {
        /// Predicate whose target list was empty.
        predicate: String,
    },
    /// A predicate mapped to something other than a string or array of strings.
    #[error("relation predicate '{predicate}' must map to a string or an array of strings")]
    InvalidRelationTarget {
        /// Predicate whose targets were malformed.
        predicate: String,
    },
}

impl RelationError {
    /// Predicate the error refers to.
    pub fn predicate(&self) -> &str {
        match self {
            RelationError::EmptyRelationTarget { predicate }
            | RelationError::InvalidRelationTarget { predicate } => predicate,
        }
    }
}

/// Raw wire shape of a relation value: one identifier or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationTarget {
    /// A single object identifier.
    One(String),
    /// Several object identifiers.
    Many(Vec<String>),
}

/// Predicate to object-identifier map in canonical form.
///
/// Every predicate maps to a non-empty, duplicate-free sequence kept in the
/// order first seen. Predicates iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationMap {
    targets: BTreeMap<String, Vec<String>>,
}

impl RelationMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes a raw JSON relation object, failing on the first bad
    /// predicate in key order.
    pub fn canonicalize(raw: &Map<String, Value>) -> Result<Self, RelationError> {
        let (map, errors) = Self::canonicalize_lenient(raw);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(map),
        }
    }

    /// Canonicalizes every well-formed predicate and reports the rest.
    ///
    /// Predicates that fail are left out of the returned map.
    pub fn canonicalize_lenient(raw: &Map<String, Value>) -> (Self, Vec<RelationError>) {
        let mut map = Self::new();
        let mut errors = Vec::new();
        for (predicate, value) in raw {
            match target_from_value(predicate, value) {
                Ok(target) => {
                    if let Err(err) = map.insert_target(predicate, target) {
                        errors.push(err);
                    }
                }
                Err(err) => errors.push(err),
            }
        }
        (map, errors)
    }

    /// Canonicalizes already-typed targets.
    pub fn from_targets<I>(raw: I) -> Result<Self, RelationError>
    where
        I: IntoIterator<Item = (String, RelationTarget)>,
    {
        let mut map = Self::new();
        for (predicate, target) in raw {
            map.insert_target(&predicate, target)?;
        }
        Ok(map)
    }

    fn insert_target(&mut self, predicate: &str, target: RelationTarget) -> Result<(), RelationError> {
        let objects = match target {
            RelationTarget::One(object) => vec![object],
            RelationTarget::Many(objects) => objects,
        };
        if objects.is_empty() {
            return Err(RelationError::EmptyRelationTarget {
                predicate: predicate.to_string(),
            });
        }
        for object in objects {
            self.insert(predicate, object);
        }
        Ok(())
    }

    /// Adds one assertion; exact duplicates are ignored.
    pub fn insert(&mut self, predicate: &str, object: impl Into<String>) {
        let object = object.into();
        let objects = self.targets.entry(predicate.to_string()).or_default();
        if !objects.contains(&object) {
            objects.push(object);
        }
    }

    /// Targets recorded for `predicate`.
    pub fn get(&self, predicate: &str) -> Option<&[String]> {
        self.targets.get(predicate).map(Vec::as_slice)
    }

    /// Iterates predicates with their targets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.targets
            .iter()
            .map(|(predicate, objects)| (predicate.as_str(), objects.as_slice()))
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True when no predicate is present.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Wire form: single targets collapse to a bare string.
    pub fn to_raw(&self) -> Map<String, Value> {
        self.targets
            .iter()
            .map(|(predicate, objects)| {
                let value = match objects.as_slice() {
                    [only] => Value::String(only.clone()),
                    many => Value::Array(many.iter().cloned().map(Value::String).collect()),
                };
                (predicate.clone(), value)
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for RelationMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, RelationTarget>::deserialize(deserializer)?;
        Self::from_targets(raw).map_err(serde::de::Error::custom)
    }
}

fn target_from_value(predicate: &str, value: &Value) -> Result<RelationTarget, RelationError> {
    let invalid = || RelationError::InvalidRelationTarget {
        predicate: predicate.to_string(),
    };
    match value {
        Value::String(object) => Ok(RelationTarget::One(object.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()
            .map(RelationTarget::Many),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn wraps_scalars() {
        let map = RelationMap::canonicalize(&object(json!({ "dc:relation": "A" }))).unwrap();
        assert_eq!(map.get("dc:relation"), Some(&["A".to_string()][..]));
        assert_eq!(serde_json::to_value(&map).unwrap(), json!({ "dc:relation": ["A"] }));
    }

    #[test]
    fn empty_array_is_an_error() {
        let err = RelationMap::canonicalize(&object(json!({ "dc:relation": [] }))).unwrap_err();
        assert_eq!(
            err,
            RelationError::EmptyRelationTarget {
                predicate: "dc:relation".into()
            }
        );
    }

    #[test]
    fn removes_exact_duplicates_keeping_order() {
        let map = RelationMap::canonicalize(&object(json!({
            "owl:sameAs": ["B", "A", "B", "C", "A"]
        })))
        .unwrap();
        assert_eq!(
            map.get("owl:sameAs").unwrap(),
            &["B".to_string(), "A".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn lenient_mode_keeps_good_predicates() {
        let (map, errors) = RelationMap::canonicalize_lenient(&object(json!({
            "dc:relation": "A",
            "dc:replaces": [],
            "owl:sameAs": [1, 2]
        })));
        assert_eq!(map.len(), 1);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].predicate(), "dc:replaces");
        assert!(matches!(
            errors[1],
            RelationError::InvalidRelationTarget { .. }
        ));
    }

    #[test]
    fn to_raw_collapses_singletons() {
        let map = RelationMap::canonicalize(&object(json!({
            "dc:relation": ["A", "B"],
            "dc:replaces": ["C"]
        })))
        .unwrap();
        assert_eq!(
            Value::Object(map.to_raw()),
            json!({ "dc:relation": ["A", "B"], "dc:replaces": "C" })
        );
    }

    #[test]
    fn deserialize_enforces_non_empty_targets() {
        assert!(serde_json::from_value::<RelationMap>(json!({ "dc:relation": [] })).is_err());
        let map: RelationMap = serde_json::from_value(json!({ "dc:relation": "A" })).unwrap();
        assert_eq!(map.len(), 1);
    }
}
