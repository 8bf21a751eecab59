//! Normalization of tag fields stored in two different shapes.
//!
//! Consultant `services` and `industries` arrive either as native string
//! arrays (exports from array-capable databases) or as JSON text (SQLite
//! columns). Everything past the read boundary only ever sees `Vec<String>`.

use serde::{Deserialize, Serialize};

/// A tag field as found at the storage boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayField {
    /// Already decoded list of tags.
    Decoded(Vec<String>),
    /// JSON-encoded list of tags.
    Raw(String),
}

impl From<Vec<String>> for ArrayField {
    fn from(value: Vec<String>) -> Self {
        ArrayField::Decoded(value)
    }
}

impl From<String> for ArrayField {
    fn from(value: String) -> Self {
        ArrayField::Raw(value)
    }
}

impl From<&str> for ArrayField {
    fn from(value: &str) -> Self {
        ArrayField::Raw(value.to_string())
    }
}

/// Converts a stored tag field into a list of tags.
///
/// Absent values and text that is not a JSON array of strings yield an empty
/// list. Undecodable text is reported at `warn` level but never returned as
/// an error.
pub fn parse_array_field(field: Option<ArrayField>) -> Vec<String> {
    match field {
        None => Vec::new(),
        Some(ArrayField::Decoded(tags)) => tags,
        Some(ArrayField::Raw(raw)) => {
            if raw.is_empty() {
                return Vec::new();
            }
            match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(tags) => tags,
                Err(err) => {
                    log::warn!("Discarding malformed tag field {raw:?}: {err}");
                    Vec::new()
                }
            }
        }
    }
}

/// Encodes tags the way they are stored in text columns.
pub fn encode_array_field(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Records whose `services` and `industries` can be normalized.
///
/// `Normalized` is the same record with both fields replaced by plain tag
/// lists; every other field is carried over untouched.
pub trait TagFields {
    type Normalized;

    fn normalize(self) -> Self::Normalized;
}

/// Normalizes the tag fields of a single record.
pub fn normalize_consultant<T: TagFields>(record: T) -> T::Normalized {
    record.normalize()
}

/// Normalizes every record, preserving order.
pub fn normalize_consultants<T: TagFields>(records: Vec<T>) -> Vec<T::Normalized> {
    records.into_iter().map(normalize_consultant).collect()
}
