//! Accumulating validation results
//!
//! [`Validation`] is the shape an engine [`Outcome`](crate::Outcome) takes when
//! it has to be combined with other checks. Unlike `Result`, combining two
//! failures keeps both sets of errors, merged through their [`Semigroup`].
//!
//! # Example
//!
//! ```
//! use fieldrules::{FieldErrors, Validation};
//!
//! let mut schema_errors = FieldErrors::new();
//! schema_errors.add("password", "minimum length is 8 characters.");
//! let mut policy_errors = FieldErrors::new();
//! policy_errors.add("password", "must not contain the username");
//!
//! let merged = Validation::<(), _>::failure(schema_errors)
//!     .and(Validation::<(), _>::failure(policy_errors))
//!     .into_result()
//!     .unwrap_err();
//!
//! assert_eq!(merged.get("password").map(<[String]>::len), Some(2));
//! ```

use crate::Semigroup;

/// Either a success value or the errors gathered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Every check passed.
    Success(T),
    /// At least one check failed.
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Wrap a passing value.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Wrap collected errors.
    #[inline]
    pub fn failure(errors: E) -> Self {
        Validation::Failure(errors)
    }

    /// Whether every check passed.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Whether any check failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Convert to a `Result`, failing with the collected errors.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine with another validation.
    ///
    /// Succeeds with both values only if both succeed; otherwise fails with
    /// the errors of every failing side, `self` first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Validation::Failure(errors), _) | (_, Validation::Failure(errors)) => {
                Validation::Failure(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldErrors;

    fn errors(field: &str, message: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        errors
    }

    #[test]
    fn test_and_both_success() {
        let v = Validation::<_, FieldErrors>::success(1).and(Validation::success("a"));
        assert_eq!(v, Validation::Success((1, "a")));
    }

    #[test]
    fn test_and_keeps_single_failure() {
        let failing = Validation::<(), _>::failure(errors("username", "field is required"));

        let left = failing.clone().and(Validation::<(), _>::success(()));
        let right = Validation::<(), _>::success(()).and(failing);

        assert_eq!(left, Validation::Failure(errors("username", "field is required")));
        assert_eq!(right, Validation::Failure(errors("username", "field is required")));
    }

    #[test]
    fn test_and_merges_field_errors() {
        let result = Validation::<(), _>::failure(errors("username", "field is required"))
            .and(Validation::<(), _>::failure(errors("username", "format is invalid.")));

        let merged = result.into_result().unwrap_err();
        assert_eq!(
            merged.get("username"),
            Some(&["field is required".to_string(), "format is invalid.".to_string()][..])
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validation::<_, FieldErrors>::success(7).into_result(), Ok(7));
        assert!(Validation::<(), _>::failure(errors("a", "b")).is_failure());
        assert!(Validation::<_, FieldErrors>::success(()).is_success());
    }
}
