// Copyright (c) 2025 - Cowboy AI, Inc.

//! Attribute payloads for `add` operations
//!
//! An `add` operation carries the new resource's configuration as an
//! ordered set of named attributes. Values are strings, lists, or nested
//! ordered objects; attribute order is preserved all the way to the wire.
//!
//! # Examples
//!
//! ```rust
//! use elytron_commands::Values;
//!
//! let values = Values::empty()
//!     .and("pattern", "^a.*$")
//!     .and_optional("delegate-realm-mapper", None::<String>);
//!
//! assert_eq!(values.get("pattern").map(|v| v.as_str()).flatten(), Some("^a.*$"));
//! assert!(values.get("delegate-realm-mapper").is_none());
//! ```

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single attribute value in a management payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValue {
    /// Plain string attribute
    String(String),
    /// List of values, each a string or nested object
    List(Vec<ModelValue>),
    /// Ordered object of named values
    Object(Vec<(String, ModelValue)>),
}

impl ModelValue {
    /// Build an ordered object from `(name, value)` pairs
    pub fn object(pairs: impl IntoIterator<Item = (String, ModelValue)>) -> Self {
        ModelValue::Object(pairs.into_iter().collect())
    }

    /// The string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ModelValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element list, if this is a list value
    pub fn as_list(&self) -> Option<&[ModelValue]> {
        match self {
            ModelValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        ModelValue::String(value.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        ModelValue::String(value)
    }
}

impl From<&String> for ModelValue {
    fn from(value: &String) -> Self {
        ModelValue::String(value.clone())
    }
}

impl Serialize for ModelValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ModelValue::String(s) => serializer.serialize_str(s),
            ModelValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ModelValue::Object(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (name, value) in pairs {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

/// Ordered attribute set submitted with an `add` operation
///
/// Built fluently; the `*_optional` combinators drop unset or empty input
/// so omitted attributes never reach the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    attributes: Vec<(String, ModelValue)>,
}

impl Values {
    /// Payload with no attributes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a required attribute
    pub fn and(mut self, name: impl Into<String>, value: impl Into<ModelValue>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append an attribute only when a value is present
    pub fn and_optional(
        self,
        name: impl Into<String>,
        value: Option<impl Into<ModelValue>>,
    ) -> Self {
        match value {
            Some(value) => self.and(name, value),
            None => self,
        }
    }

    /// Append a list attribute
    pub fn and_list(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = ModelValue>,
    ) -> Self {
        self.attributes
            .push((name.into(), ModelValue::List(items.into_iter().collect())));
        self
    }

    /// Append a list attribute only when the list exists and is non-empty
    pub fn and_list_optional(
        self,
        name: impl Into<String>,
        items: Option<Vec<ModelValue>>,
    ) -> Self {
        match items {
            Some(items) if !items.is_empty() => self.and_list(name, items),
            _ => self,
        }
    }

    /// True when no attribute has been added
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&ModelValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelValue)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Render the payload as a JSON object, preserving attribute order
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Values {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
