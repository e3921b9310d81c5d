//! Project records as read from the projects JSON document.
//!
//! The source document is untyped: every field is optional and entries may be
//! malformed. Records are normalized once at the boundary so that the rest of
//! the pipeline only deals with explicit presence.

use serde_json::{Map, Value};

/// One showcased project.
///
/// A `None` field means "omit this visual element", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Display-formatted date. Opaque: never parsed or reformatted.
    pub date: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// `None` when the source omits the flag or sets it to `null`.
    pub featured: Option<bool>,
}

impl ProjectRecord {
    /// Normalize a single array entry.
    ///
    /// Entries that are not JSON objects become a record with every field
    /// absent, so they still render (as an untitled card) rather than being
    /// dropped.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => Self::from_object(obj),
            None => Self::default(),
        }
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            title: text_field(obj, "title"),
            description: text_field(obj, "description"),
            date: text_field(obj, "date"),
            url: text_field(obj, "url"),
            image: text_field(obj, "image"),
            featured: obj.get("featured").and_then(truthiness),
        }
    }

    /// Normalize a whole payload.
    ///
    /// Returns `None` when the payload is not an array.
    pub fn from_payload(payload: &Value) -> Option<Vec<Self>> {
        payload
            .as_array()
            .map(|items| items.iter().map(Self::from_value).collect())
    }

    /// Whether the record should appear in featured-only views.
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }
}

/// Read a displayable text field.
///
/// Strings are taken as-is unless empty; numbers and booleans display via
/// their JSON text. Arrays, objects, `null` and `""` count as absent.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// JSON truthiness for the `featured` flag. `null` is treated as absent.
fn truthiness(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}
