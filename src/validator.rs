//! A schema bundled with an engine and the errors of its last run
//!
//! [`Validator`] is the call-then-inspect form: `validate` answers a plain
//! `bool` and `errors` reports what the most recent call found.

use crate::engine::Engine;
use crate::error::ConfigError;
use crate::report::FieldErrors;
use crate::schema::Schema;
use crate::source::Source;

/// A named schema plus the errors of its most recent `validate` call.
///
/// # Example
///
/// ```rust
/// use fieldrules::{RuleSet, Schema, Validator};
/// use serde_json::json;
///
/// let mut login = Validator::new(
///     Schema::new().field("username", RuleSet::new().required().kind("string")),
/// );
///
/// assert!(!login.validate(&json!({}), None).unwrap());
/// assert_eq!(login.errors().get("username").unwrap(), ["field is required"]);
///
/// assert!(login.validate(&json!({"username": "user123"}), None).unwrap());
/// assert!(login.errors().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    engine: Engine,
    errors: FieldErrors,
}

impl Validator {
    /// Validate against `schema` with a default engine.
    pub fn new(schema: Schema) -> Self {
        Self::with_engine(schema, Engine::new())
    }

    /// Validate against `schema` with a configured engine.
    pub fn with_engine(schema: Schema, engine: Engine) -> Self {
        Validator {
            schema,
            engine,
            errors: FieldErrors::new(),
        }
    }

    /// Run the schema over `input`; true iff no rule was violated.
    ///
    /// The stored errors are cleared first. When a [`ConfigError`] aborts the
    /// call they stay empty.
    pub fn validate<I>(&mut self, input: &I, secondary: Option<&dyn Source>) -> Result<bool, ConfigError>
    where
        I: Source + ?Sized,
    {
        self.errors = FieldErrors::new();
        let outcome = self.engine.validate(&self.schema, input, secondary)?;
        let valid = outcome.is_valid();
        self.errors = outcome.into_errors();
        Ok(valid)
    }

    /// Errors found by the most recent `validate` call.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The schema this validator checks.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The engine this validator runs on.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
