//! Schemas: per-field rule tables
//!
//! A [`Schema`] maps field names to [`RuleSet`]s in declaration order. Each
//! concrete validator is just a schema value, usually returned by a function:
//!
//! ```rust
//! use fieldrules::{RuleSet, Schema, TypeTag};
//!
//! fn login_schema() -> Schema {
//!     Schema::new()
//!         .field("username", RuleSet::new().required().kind(TypeTag::String))
//!         .field("password", RuleSet::new().required().kind(TypeTag::String).min(8))
//! }
//!
//! let schema = login_schema();
//! assert_eq!(schema.len(), 2);
//! assert!(!schema.has_confirm_rules());
//! ```

mod pattern;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SchemaError;
use crate::predicate::{is_array, is_float, is_integer, is_string, Predicate};

pub use pattern::Pattern;

/// The expected kind of a field's value.
///
/// The four primitives are checked against the JSON value directly. Any
/// other name is a [`Named`](TypeTag::Named) capability that must be
/// registered on the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A JSON string.
    String,
    /// An integral JSON number.
    Integer,
    /// A floating-point JSON number.
    Float,
    /// A JSON array.
    Array,
    /// A caller-defined capability, resolved through a `TypeRegistry`.
    Named(String),
}

impl TypeTag {
    const PRIMITIVES: [&'static str; 4] = ["string", "integer", "float", "array"];

    /// Parse a type name; anything but the four primitive names is `Named`.
    ///
    /// ```rust
    /// use fieldrules::TypeTag;
    ///
    /// assert_eq!(TypeTag::parse("integer"), TypeTag::Integer);
    /// assert_eq!(TypeTag::parse("Address"), TypeTag::Named("Address".into()));
    /// ```
    pub fn parse(name: &str) -> Self {
        match name {
            "string" => TypeTag::String,
            "integer" => TypeTag::Integer,
            "float" => TypeTag::Float,
            "array" => TypeTag::Array,
            other => TypeTag::Named(other.to_string()),
        }
    }

    /// The name as it appears in schemas and messages.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Array => "array",
            TypeTag::Named(name) => name,
        }
    }

    /// Whether this is one of the four primitive tags.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, TypeTag::Named(_))
    }

    pub(crate) fn is_primitive_name(name: &str) -> bool {
        Self::PRIMITIVES.contains(&name)
    }

    /// Check `value` against a primitive tag; `None` for `Named` tags.
    pub fn check_primitive(&self, value: &Value) -> Option<bool> {
        match self {
            TypeTag::String => Some(is_string().check(value)),
            TypeTag::Integer => Some(is_integer().check(value)),
            TypeTag::Float => Some(is_float().check(value)),
            TypeTag::Array => Some(is_array().check(value)),
            TypeTag::Named(_) => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeTag::parse(s))
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::parse(name)
    }
}

/// The constraints applied to one field.
///
/// Every member is optional; an unset member imposes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RuleSet {
    /// The field must be present in the input.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub required: bool,
    /// Expected kind of the value.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none")
    )]
    pub kind: Option<TypeTag>,
    /// Minimum string length in bytes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min: Option<usize>,
    /// Maximum string length in bytes.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max: Option<usize>,
    /// Pattern a string value must match.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "regex", skip_serializing_if = "Option::is_none")
    )]
    pub pattern: Option<Pattern>,
    /// Field of the secondary source that must hold an equal value.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub confirm: Option<String>,
}

impl RuleSet {
    /// A rule set with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Require the value to be of `kind`.
    pub fn kind(mut self, kind: impl Into<TypeTag>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Minimum string length.
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum string length.
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Require string values to match an already compiled pattern.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compile `pattern` and require string values to match it.
    ///
    /// ```rust
    /// use fieldrules::RuleSet;
    ///
    /// let rules = RuleSet::new().required().regex("/^[a-zA-Z0-9_]+$/").unwrap();
    /// assert!(rules.pattern.is_some());
    /// assert!(RuleSet::new().regex("(").is_err());
    /// ```
    pub fn regex(self, pattern: &str) -> Result<Self, SchemaError> {
        Ok(self.pattern(Pattern::new(pattern)?))
    }

    /// Require the secondary source's `other` field to equal this field.
    pub fn confirm(mut self, other: impl Into<String>) -> Self {
        self.confirm = Some(other.into());
        self
    }
}

/// Ordered mapping from field name to [`RuleSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schema {
    fields: IndexMap<String, RuleSet>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing an earlier declaration of the same name in place.
    pub fn field(mut self, name: impl Into<String>, rules: RuleSet) -> Self {
        self.insert(name, rules);
        self
    }

    /// Add or replace a field, returning the rule set it replaced.
    pub fn insert(&mut self, name: impl Into<String>, rules: RuleSet) -> Option<RuleSet> {
        self.fields.insert(name.into(), rules)
    }

    /// Rules for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.fields.get(name)
    }

    /// Fields and rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `(field, confirmed_against)` for every confirm rule.
    pub fn confirm_rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(name, rules)| rules.confirm.as_deref().map(|other| (name, other)))
    }

    /// Whether any field carries a confirm rule.
    pub fn has_confirm_rules(&self) -> bool {
        self.confirm_rules().next().is_some()
    }

    /// `(field, type_name)` for every non-primitive type tag.
    pub fn named_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter_map(|(name, rules)| match &rules.kind {
            Some(TypeTag::Named(type_name)) => Some((name, type_name.as_str())),
            _ => None,
        })
    }
}

impl<N: Into<String>> FromIterator<(N, RuleSet)> for Schema {
    fn from_iter<I: IntoIterator<Item = (N, RuleSet)>>(iter: I) -> Self {
        Schema {
            fields: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registration() -> Schema {
        Schema::new()
            .field(
                "username",
                RuleSet::new()
                    .kind(TypeTag::String)
                    .min(3)
                    .max(20)
                    .required()
                    .regex("/^[a-zA-Z0-9_]+$/")
                    .unwrap(),
            )
            .field(
                "password",
                RuleSet::new()
                    .kind("string")
                    .min(8)
                    .required()
                    .confirm("passwordConfirmation"),
            )
    }

    #[test]
    fn test_declaration_order_preserved() {
        let schema = registration();
        assert_eq!(schema.fields().collect::<Vec<_>>(), vec!["username", "password"]);
    }

    #[test]
    fn test_redeclaring_replaces_in_place() {
        let schema = registration().field("username", RuleSet::new());
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields().next(), Some("username"));
        assert_eq!(schema.get("username"), Some(&RuleSet::new()));
    }

    #[test]
    fn test_confirm_rules() {
        let schema = registration();
        assert!(schema.has_confirm_rules());
        assert_eq!(
            schema.confirm_rules().collect::<Vec<_>>(),
            vec![("password", "passwordConfirmation")]
        );
        assert!(!Schema::new().has_confirm_rules());
    }

    #[test]
    fn test_named_types() {
        let schema = registration().field("address", RuleSet::new().kind("Address"));
        assert_eq!(
            schema.named_types().collect::<Vec<_>>(),
            vec![("address", "Address")]
        );
    }

    #[test]
    fn test_type_tag_parse_roundtrip() {
        for name in ["string", "integer", "float", "array", "Address"] {
            assert_eq!(TypeTag::parse(name).as_str(), name);
        }
        assert!(TypeTag::Float.is_primitive());
        assert!(!TypeTag::parse("Address").is_primitive());
        assert_eq!("array".parse::<TypeTag>(), Ok(TypeTag::Array));
    }

    #[test]
    fn test_no_extra_primitive_aliases() {
        assert_eq!(TypeTag::parse("int"), TypeTag::Named("int".into()));
        assert_eq!(TypeTag::parse("String"), TypeTag::Named("String".into()));
        assert_eq!(TypeTag::parse("list"), TypeTag::Named("list".into()));
    }

    #[test]
    fn test_check_primitive() {
        assert_eq!(TypeTag::String.check_primitive(&json!("a")), Some(true));
        assert_eq!(TypeTag::Integer.check_primitive(&json!(1.5)), Some(false));
        assert_eq!(TypeTag::Float.check_primitive(&json!(1.5)), Some(true));
        assert_eq!(TypeTag::Array.check_primitive(&json!({})), Some(false));
        assert_eq!(TypeTag::parse("Address").check_primitive(&json!({})), None);
    }

    #[test]
    fn test_from_iterator() {
        let schema: Schema = vec![("a", RuleSet::new()), ("b", RuleSet::new().required())]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 2);
        assert!(schema.get("b").is_some_and(|rules| rules.required));
    }
}
