//! The closed tagged union of storable values.

use serde_json::Value as Json;

use crate::TypeTag;

/// A value that can round-trip through a [`KeyedStore`](crate::KeyedStore).
///
/// The kind is carried by the enum variant, never inferred from the shape
/// of dynamic data: callers pick a constructor, the store persists the
/// matching [`TypeTag`], and decoding dispatches on that tag alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. Reading a key that was never set, or that was
    /// explicitly set to `Absent`, yields this.
    #[default]
    Absent,
    /// 64-bit floating point number.
    Number(f64),
    /// UTF-8 text.
    Text(String),
    /// Structured JSON-able data, including JSON `null`.
    Structured(Json),
}

impl Value {
    /// The tag persisted alongside this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Absent => TypeTag::Absent,
            Value::Number(_) => TypeTag::Number,
            Value::Text(_) => TypeTag::Text,
            Value::Structured(_) => TypeTag::Structured,
        }
    }

    /// Check if this value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Get the number if this value is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text if this value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the structured data if this value is structured.
    pub fn as_structured(&self) -> Option<&Json> {
        match self {
            Value::Structured(json) => Some(json),
            _ => None,
        }
    }

    /// Serialize to the string form stored in the value slot.
    ///
    /// The `Absent` form still writes a placeholder string; decoding
    /// ignores it and dispatches on the tag.
    pub(crate) fn encode(&self) -> Result<String, serde_json::Error> {
        Ok(match self {
            Value::Absent => "undefined".to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::Structured(json) => serde_json::to_string(json)?,
        })
    }
}

// Conversion from common types

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Json> for Value {
    fn from(v: Json) -> Self {
        Value::Structured(v)
    }
}
