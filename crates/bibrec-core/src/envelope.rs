//! Separates the transport envelope from the record payload.

use crate::errors::FatalError;
use crate::shared::Envelope;
use bibrec_canonical::ObjectKey;
use serde_json::{Map, Value};

const ENVELOPE_MEMBERS: &[&str] = &["key", "version", "library", "links", "meta", "data"];

/// Splits `input` into its envelope (if any) and payload object.
///
/// An object with a `data` member and no top-level `discriminator` (the member
/// every payload of the record kind carries, e.g. `itemType`) is an envelope.
/// A payload that happens to have a `data` member passes through unchanged.
/// The envelope's `key` and `version` are checked and copied into the payload
/// when the payload lacks them; when the payload has them they must agree.
pub fn split_envelope(
    input: &Value,
    discriminator: &str,
) -> Result<(Option<Envelope>, Map<String, Value>), FatalError> {
    let object = input.as_object().ok_or(FatalError::NotAnObject)?;
    let data = match object.get("data") {
        Some(data) if !object.contains_key(discriminator) => data,
        _ => return Ok((None, object.clone())),
    };
    let mut payload = data
        .as_object()
        .cloned()
        .ok_or_else(|| malformed("data must be an object"))?;

    let key = match object.get("key") {
        Some(Value::String(key)) => {
            ObjectKey::parse(key.as_str()).map_err(|err| malformed(err.to_string()))?
        }
        Some(_) => return Err(malformed("key must be a string")),
        None => return Err(malformed("envelope has no key")),
    };
    let version = object
        .get("version")
        .ok_or_else(|| malformed("envelope has no version"))?
        .as_u64()
        .ok_or_else(|| malformed("version must be a non-negative integer"))?;

    let envelope = Envelope {
        key,
        version,
        library: member_object(object, "library")?,
        links: member_object(object, "links")?,
        meta: member_object(object, "meta")?,
    };
    for name in object.keys().filter(|name| !ENVELOPE_MEMBERS.contains(&name.as_str())) {
        tracing::debug!(member = %name, "ignoring unrecognized envelope member");
    }

    match payload.get("key") {
        Some(Value::String(inner)) if inner == envelope.key.as_str() => {}
        Some(other) => {
            return Err(malformed(format!(
                "data.key {other} disagrees with envelope key '{}'",
                envelope.key
            )))
        }
        None => {
            payload.insert("key".into(), Value::String(envelope.key.to_string()));
        }
    }
    match payload.get("version") {
        Some(inner) if inner.as_u64() == Some(envelope.version) => {}
        Some(other) => {
            return Err(malformed(format!(
                "data.version {other} disagrees with envelope version {}",
                envelope.version
            )))
        }
        None => {
            payload.insert("version".into(), Value::from(envelope.version));
        }
    }

    Ok((Some(envelope), payload))
}

fn member_object(object: &Map<String, Value>, name: &str) -> Result<Option<Map<String, Value>>, FatalError> {
    match object.get(name) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner.clone())),
        Some(_) => Err(malformed(format!("{name} must be an object"))),
    }
}

fn malformed(message: impl Into<String>) -> FatalError {
    FatalError::MalformedEnvelope(message.into())
}
