//! # fieldrules
//!
//! Declarative, schema-driven validation of string-keyed input.
//!
//! A [`Schema`] maps field names to [`RuleSet`]s (`required`, `type`, `min`,
//! `max`, `regex`, `confirm`). The [`Engine`] checks an input mapping against
//! it and reports **every** violated rule per field, not just the first.
//! Cross-field `confirm` rules read a secondary source, typically the raw
//! request body.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldrules::{Engine, RuleSet, Schema};
//! use serde_json::json;
//!
//! fn registration_schema() -> Schema {
//!     Schema::new()
//!         .field(
//!             "username",
//!             RuleSet::new()
//!                 .kind("string")
//!                 .min(3)
//!                 .max(20)
//!                 .required()
//!                 .regex("/^[a-zA-Z0-9_]+$/")
//!                 .expect("valid pattern"),
//!         )
//!         .field(
//!             "password",
//!             RuleSet::new()
//!                 .kind("string")
//!                 .min(8)
//!                 .required()
//!                 .confirm("passwordConfirmation"),
//!         )
//! }
//!
//! let body = json!({
//!     "username": "user123",
//!     "password": "securePassword",
//!     "passwordConfirmation": "securePassword",
//! });
//!
//! let outcome = Engine::new()
//!     .validate(&registration_schema(), &body, Some(&body))
//!     .expect("schema is well configured");
//! assert!(outcome.is_valid());
//! ```
//!
//! ## Two kinds of failure
//!
//! Invalid *data* is reported through [`Outcome::errors`]. An invalid *call*
//! (a `confirm` rule with no secondary source, or a named type with no
//! registered capability) is a [`ConfigError`] and aborts the call.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod error;
mod message;
pub mod predicate;
pub mod report;
pub mod schema;
pub mod semigroup;
pub mod source;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use engine::Engine;
pub use error::{ConfigError, SchemaError};
pub use report::{FieldErrors, Outcome};
pub use schema::{Pattern, RuleSet, Schema, TypeTag};
pub use semigroup::Semigroup;
pub use source::Source;
pub use validation::Validation;
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::Engine;
    pub use crate::error::{ConfigError, SchemaError};
    pub use crate::predicate::{Predicate, PredicateExt, TypeRegistry};
    pub use crate::report::{FieldErrors, Outcome};
    pub use crate::schema::{Pattern, RuleSet, Schema, TypeTag};
    pub use crate::semigroup::Semigroup;
    pub use crate::source::Source;
    pub use crate::validation::Validation;
    pub use crate::validator::Validator;
}
