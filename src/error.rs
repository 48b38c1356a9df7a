//! Error types for misconfigured schemas and calls
//!
//! These are programmer errors, kept apart from the per-field messages in
//! [`FieldErrors`](crate::FieldErrors): a caller can always tell "the call is
//! misconfigured" from "the user's data is invalid".

use thiserror::Error;

/// A configuration error that aborts a whole `validate` call.
///
/// Returned as `Err` before any rule is evaluated; no partial error
/// collection accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The schema declares a `confirm` rule but no secondary source was given.
    #[error("a secondary source is required for the 'confirm' rule on field '{field}' (confirms '{confirm}')")]
    MissingSecondarySource {
        /// Field carrying the confirm rule.
        field: String,
        /// Field it is confirmed against.
        confirm: String,
    },

    /// The schema uses a named type with no registered capability predicate.
    #[error("no capability predicate is registered for type '{type_name}' used by field '{field}'")]
    UnknownType {
        /// Field whose rule set names the type.
        field: String,
        /// The unregistered type name.
        type_name: String,
    },
}

/// An error raised while building or loading a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The pattern is not valid regular-expression syntax.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// A delimited pattern carries a flag that has no regex equivalent.
    #[error("unsupported flag '{flag}' in pattern '{pattern}'")]
    UnsupportedFlag {
        /// The pattern as written.
        pattern: String,
        /// The offending flag character.
        flag: char,
    },

    /// A capability was registered under one of the primitive type names.
    #[error("'{0}' is a primitive type and cannot be registered as a capability")]
    ReservedType(String),

    /// The JSON form of a schema could not be decoded.
    #[cfg(feature = "serde")]
    #[error("malformed schema: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secondary_display() {
        let err = ConfigError::MissingSecondarySource {
            field: "password".to_string(),
            confirm: "passwordConfirmation".to_string(),
        };
        let output = err.to_string();
        assert!(output.contains("'password'"));
        assert!(output.contains("'passwordConfirmation'"));
    }

    #[test]
    fn test_unknown_type_display() {
        let err = ConfigError::UnknownType {
            field: "address".to_string(),
            type_name: "Address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no capability predicate is registered for type 'Address' used by field 'address'"
        );
    }

    #[test]
    fn test_invalid_pattern_has_source() {
        use std::error::Error as _;

        let source = regex::Regex::new("(").unwrap_err();
        let err = SchemaError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid pattern '('"));
    }
}
