//! Serde support for schemas (feature-gated)
//!
//! Schemas round-trip through JSON of the shape
//!
//! ```json
//! {
//!   "username": {"type": "string", "min": 3, "max": 20, "required": true, "regex": "/^\\w+$/"},
//!   "password": {"type": "string", "min": 8, "required": true, "confirm": "passwordConfirmation"}
//! }
//! ```
//!
//! Field order is preserved. Patterns are compiled while deserializing, so a
//! schema that loads is a schema that can run.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::{Pattern, Schema, TypeTag};
use crate::error::SchemaError;

impl Schema {
    /// Load a schema from JSON text.
    ///
    /// ```rust
    /// use fieldrules::{Schema, TypeTag};
    ///
    /// let schema = Schema::from_json_str(r#"{"age": {"type": "integer", "required": true}}"#).unwrap();
    /// assert_eq!(schema.get("age").and_then(|r| r.kind.clone()), Some(TypeTag::Integer));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a schema from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Render the schema as a JSON value.
    pub fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeTagVisitor;

        impl Visitor<'_> for TypeTagVisitor {
            type Value = TypeTag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeTag, E> {
                if v.is_empty() {
                    return Err(E::invalid_value(de::Unexpected::Str(v), &self));
                }
                Ok(TypeTag::parse(v))
            }
        }

        deserializer.deserialize_str(TypeTagVisitor)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(de::Error::custom)
    }
}
