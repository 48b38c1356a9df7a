//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. Error
//! collections implement it so that the messages produced by separate
//! validation passes can be merged instead of one replacing the other.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldrules::{FieldErrors, Semigroup};
//!
//! let mut first = FieldErrors::new();
//! first.add("username", "field is required");
//!
//! let mut second = FieldErrors::new();
//! second.add("username", "format is invalid.");
//! second.add("email", "field is required");
//!
//! let merged = first.combine(second);
//! assert_eq!(merged.get("username").map(<[String]>::len), Some(2));
//! assert!(merged.contains("email"));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldrules::Semigroup;
    ///
    /// let v1 = vec!["too short"];
    /// let v2 = vec!["format is invalid."];
    /// assert_eq!(v1.combine(v2), vec!["too short", "format is invalid."]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
