//! Forgiving deserializers for article records.
//!
//! Records arrive from an upstream API we do not control, so a wrong type in one field should
//! degrade that field instead of rejecting the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::article::{Author, VolumeRef};

/// Strings pass through, numbers are stringified, everything else is `None`.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Required text field. Missing or unusable values become the empty string.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let out = match &value {
        Value::Bool(b) => Some(b.to_string()),
        other => scalar(other),
    };
    if out.is_none() && !value.is_null() {
        tracing::debug!(?value, "coercing non-text value to empty string");
    }
    Ok(out.unwrap_or_default())
}

/// Optional text field. Blank strings count as absent.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar(&value).filter(|s| !s.trim().is_empty()))
}

/// Author list. A non-array becomes an empty list and malformed entries are skipped, preserving
/// the order of the remaining authors.
pub(crate) fn authors<'de, D>(deserializer: D) -> Result<Vec<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!(value = ?other, "authors is not an array; treating as empty");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Author>(item) {
            Ok(author) => Some(author),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed author");
                None
            }
        })
        .collect())
}

/// Volume in either of its shapes: a bare designator or a `{ number, volume }` object.
pub(crate) fn volume<'de, D>(deserializer: D) -> Result<Option<VolumeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let volume = match value {
        Value::String(_) | Value::Number(_) => scalar(&value).map(VolumeRef::Plain),
        Value::Object(_) => serde_json::from_value::<VolumeRef>(value).ok(),
        _ => None,
    };
    Ok(volume.filter(|v| !v.is_empty()))
}
