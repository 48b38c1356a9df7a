//! Predicate combinators for composable validation logic
//!
//! The engine evaluates its length, pattern and type rules through
//! predicates, and the same building blocks define named capabilities for
//! type tags beyond the four primitives.
//!
//! # Example
//!
//! ```rust
//! use fieldrules::predicate::*;
//! use serde_json::json;
//!
//! assert!(len_min(3).check("john_doe"));
//! assert!(!len_max(5).check("john_doe"));
//!
//! let money = is_object().and(has_key("amount")).and(has_key("currency"));
//! assert!(money.check(&json!({"amount": 10, "currency": "EUR"})));
//! ```

mod combinators;
mod kind;
mod registry;
mod string;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export string predicates
pub use string::{len_max, len_min, LenBounds};

// Re-export JSON kind predicates
pub use kind::{
    has_key, is_array, is_float, is_integer, is_object, is_string, HasKey, IsArray, IsFloat,
    IsInteger, IsObject, IsString,
};

pub use registry::TypeRegistry;
