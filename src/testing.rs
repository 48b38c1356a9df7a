//! Assertion helpers for tests that validate input
//!
//! # Examples
//!
//! ```rust
//! use fieldrules::{assert_field_errors, assert_invalid, assert_valid};
//! use fieldrules::{Engine, RuleSet, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new().field("age", RuleSet::new().required().kind("integer"));
//! let engine = Engine::new();
//!
//! assert_valid!(engine.validate(&schema, &json!({"age": 30}), None).unwrap());
//!
//! let outcome = engine.validate(&schema, &json!({"age": "30"}), None).unwrap();
//! assert_invalid!(outcome);
//! assert_field_errors!(outcome, "age", ["expected type is integer"]);
//! ```

/// Assert that an [`Outcome`](crate::Outcome) is valid.
///
/// Panics with every recorded message otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {{
        let outcome: &$crate::Outcome = &$outcome;
        if !outcome.is_valid() {
            panic!("Expected valid outcome, got errors:\n{}", outcome.errors());
        }
    }};
}

/// Assert that an [`Outcome`](crate::Outcome) has at least one error.
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {{
        let outcome: &$crate::Outcome = &$outcome;
        if outcome.is_valid() {
            panic!("Expected invalid outcome, got no errors");
        }
    }};
}

/// Assert the exact messages recorded for one field of an
/// [`Outcome`](crate::Outcome).
#[macro_export]
macro_rules! assert_field_errors {
    ($outcome:expr, $field:expr, $expected:expr) => {{
        let outcome: &$crate::Outcome = &$outcome;
        match outcome.errors().get($field) {
            Some(messages) => ::std::assert_eq!(messages, $expected, "messages for field '{}'", $field),
            None => panic!(
                "Expected errors {:?} for field '{}', got none",
                $expected, $field
            ),
        }
    }};
}
