//! The validation engine
//!
//! [`Engine::validate`] walks a [`Schema`] in declaration order and checks
//! each field of the input against its [`RuleSet`]. Rules run in a fixed
//! order, so the messages for one field always come out the same way:
//!
//! 1. presence (`required`); an absent field skips every other rule
//! 2. `type`
//! 3. `min` length
//! 4. `max` length
//! 5. `regex`
//! 6. `confirm`
//!
//! Every violated rule adds one message. `min`, `max` and `regex` only
//! apply to string values; other values are exempt from them.
//!
//! The engine holds no per-call state. Errors come back in the returned
//! [`Outcome`], so one engine can serve any number of schemas and threads.
//!
//! # Example
//!
//! ```rust
//! use fieldrules::{Engine, RuleSet, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("username", RuleSet::new().required().kind("string").min(3))
//!     .field("password", RuleSet::new().required().confirm("passwordConfirmation"));
//!
//! let body = json!({
//!     "username": "us",
//!     "password": "securePassword",
//!     "passwordConfirmation": "differentPassword",
//! });
//!
//! let outcome = Engine::new().validate(&schema, &body, Some(&body)).unwrap();
//! assert!(!outcome.is_valid());
//! assert_eq!(
//!     outcome.errors().get("username").unwrap(),
//!     ["minimum length is 3 characters."]
//! );
//! assert_eq!(
//!     outcome.errors().get("password").unwrap(),
//!     ["fields 'password' and 'passwordConfirmation' do not match."]
//! );
//! ```

use serde_json::Value;

use crate::error::{ConfigError, SchemaError};
use crate::message;
use crate::predicate::{len_max, len_min, Predicate, TypeRegistry};
use crate::report::{FieldErrors, Outcome};
use crate::schema::{RuleSet, Schema, TypeTag};
use crate::source::Source;

/// Evaluates schemas against inputs.
///
/// Configuration is set once with the builder methods; `validate` takes
/// `&self` and never mutates the engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    types: TypeRegistry,
    null_as_present: bool,
}

impl Engine {
    /// An engine with no named capabilities, treating `null` as absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the capability registry.
    pub fn with_types(mut self, types: TypeRegistry) -> Self {
        self.types = types;
        self
    }

    /// Register a capability predicate for the named type `name`.
    ///
    /// ```rust
    /// use fieldrules::predicate::{has_key, is_object, PredicateExt};
    /// use fieldrules::{Engine, RuleSet, Schema};
    /// use serde_json::json;
    ///
    /// let engine = Engine::new()
    ///     .with_type("Address", is_object().and(has_key("city")))
    ///     .unwrap();
    /// let schema = Schema::new().field("home", RuleSet::new().kind("Address"));
    ///
    /// let outcome = engine
    ///     .validate(&schema, &json!({"home": "Lyon"}), None)
    ///     .unwrap();
    /// assert_eq!(outcome.errors().get("home").unwrap(), ["expected type is Address"]);
    /// ```
    pub fn with_type<P>(mut self, name: impl Into<String>, predicate: P) -> Result<Self, SchemaError>
    where
        P: Predicate<Value> + 'static,
    {
        self.types = self.types.register(name, predicate)?;
        Ok(self)
    }

    /// Treat a key holding JSON `null` as present (default: absent).
    pub fn with_null_as_present(mut self, null_as_present: bool) -> Self {
        self.null_as_present = null_as_present;
        self
    }

    /// The registered capabilities.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Validate `input` against `schema`.
    ///
    /// `secondary` is read only by `confirm` rules. A schema with a confirm
    /// rule and no secondary source, or with a named type that has no
    /// registered capability, fails with [`ConfigError`] before any rule
    /// runs.
    pub fn validate<I>(
        &self,
        schema: &Schema,
        input: &I,
        secondary: Option<&dyn Source>,
    ) -> Result<Outcome, ConfigError>
    where
        I: Source + ?Sized,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validate", fields = schema.len()).entered();

        if let Err(err) = self.preflight(schema, secondary.is_some()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %err, "validation aborted");
            return Err(err);
        }

        let mut errors = FieldErrors::new();
        for (field, rules) in schema.iter() {
            match self.present(input, field) {
                Some(value) => self.check_value(field, rules, value, secondary, &mut errors),
                None if rules.required => record(&mut errors, field, "required", message::required()),
                None => {}
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            valid = errors.is_empty(),
            fields = errors.len(),
            messages = errors.message_count(),
            "validation finished"
        );

        Ok(Outcome::new(errors))
    }

    fn preflight(&self, schema: &Schema, has_secondary: bool) -> Result<(), ConfigError> {
        if !has_secondary {
            if let Some((field, confirm)) = schema.confirm_rules().next() {
                return Err(ConfigError::MissingSecondarySource {
                    field: field.to_string(),
                    confirm: confirm.to_string(),
                });
            }
        }

        if let Some((field, type_name)) = schema
            .named_types()
            .find(|(_, type_name)| !self.types.contains(type_name))
        {
            return Err(ConfigError::UnknownType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            });
        }

        Ok(())
    }

    fn present<'a, I>(&self, input: &'a I, field: &str) -> Option<&'a Value>
    where
        I: Source + ?Sized,
    {
        input
            .lookup(field)
            .filter(|value| self.null_as_present || !value.is_null())
    }

    fn check_value(
        &self,
        field: &str,
        rules: &RuleSet,
        value: &Value,
        secondary: Option<&dyn Source>,
        errors: &mut FieldErrors,
    ) {
        if let Some(tag) = &rules.kind {
            if !self.matches_type(tag, value) {
                record(errors, field, "type", message::expected_type(tag));
            }
        }

        if let Some(text) = value.as_str() {
            if let Some(min) = rules.min {
                if !len_min(min).check(text) {
                    record(errors, field, "min", message::min_length(min));
                }
            }

            if let Some(max) = rules.max {
                if !len_max(max).check(text) {
                    record(errors, field, "max", message::max_length(max));
                }
            }

            if let Some(pattern) = &rules.pattern {
                if !pattern.check(text) {
                    record(errors, field, "regex", message::invalid_format());
                }
            }
        }

        if let (Some(confirm), Some(secondary)) = (&rules.confirm, secondary) {
            // Both sides come from the secondary source.
            let expected = secondary.lookup(confirm).unwrap_or(&Value::Null);
            let actual = secondary.lookup(field).unwrap_or(&Value::Null);
            if expected != actual {
                record(errors, field, "confirm", message::mismatch(field, confirm));
            }
        }
    }

    fn matches_type(&self, tag: &TypeTag, value: &Value) -> bool {
        match tag {
            TypeTag::Named(name) => self.types.check(name, value).unwrap_or(false),
            primitive => primitive.check_primitive(value).unwrap_or(false),
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn record(errors: &mut FieldErrors, field: &str, rule: &'static str, message: String) {
    #[cfg(feature = "tracing")]
    tracing::trace!(field, rule, "rule violated");
    errors.add(field, message);
}
