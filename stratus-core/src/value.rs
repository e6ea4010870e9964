//! Value - A field that is either a bare string or an arbitrary JSON document
//!
//! CloudFormation accepts some properties (policy documents, state machine
//! definitions, ...) either as a string literal or as inline JSON. The shape
//! is only known after decoding, so input is always decoded into a generic
//! [`serde_json::Value`] first and classified once.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;

/// A property value given either as a string or as a JSON document
///
/// At most one representation is populated. `Unset` serializes as `null`,
/// and decoding `null` yields `Unset`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StringOrJson {
    /// Neither representation is populated
    #[default]
    Unset,
    /// Plain string literal
    String(String),
    /// Any non-string, non-null JSON value (object, array, number, boolean)
    Document(Value),
}

/// Borrowed view of the populated branch of a [`StringOrJson`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// Nothing is set; encodes as `null`
    Null,
    /// The string literal
    String(&'a str),
    /// The JSON document
    Document(&'a Value),
}

impl StringOrJson {
    /// Create a value holding a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create a value from a JSON document, classified by its shape.
    ///
    /// A JSON string becomes the `String` variant and `null` becomes `Unset`.
    pub fn document(value: Value) -> Self {
        match value {
            Value::Null => Self::Unset,
            Value::String(s) => Self::String(s),
            other => Self::Document(other),
        }
    }

    /// Returns the populated branch
    pub fn resolve(&self) -> Resolved<'_> {
        match self {
            Self::Unset => Resolved::Null,
            Self::String(s) => Resolved::String(s),
            Self::Document(v) => Resolved::Document(v),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Value> {
        match self {
            Self::Document(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into a plain JSON value (`null` when unset)
    pub fn into_value(self) -> Value {
        match self {
            Self::Unset => Value::Null,
            Self::String(s) => Value::String(s),
            Self::Document(v) => v,
        }
    }

    /// Replace the current value with a string literal
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Self::String(s.into());
    }

    /// Replace the current value with a JSON document
    pub fn set_document(&mut self, value: Value) {
        *self = Self::document(value);
    }

    pub fn clear(&mut self) {
        *self = Self::Unset;
    }

    /// Encode the populated branch as JSON bytes
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode JSON bytes, choosing the variant from the decoded shape
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::document(value))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json_slice(s.as_bytes())
    }
}

impl From<String> for StringOrJson {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for StringOrJson {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Value> for StringOrJson {
    fn from(value: Value) -> Self {
        Self::document(value)
    }
}

impl From<StringOrJson> for Value {
    fn from(value: StringOrJson) -> Self {
        value.into_value()
    }
}

impl Serialize for StringOrJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.resolve() {
            Resolved::Null => serializer.serialize_unit(),
            Resolved::String(s) => serializer.serialize_str(s),
            Resolved::Document(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::document(value))
    }
}

impl fmt::Display for StringOrJson {
    /// Formats as the JSON encoding of the populated branch
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}
