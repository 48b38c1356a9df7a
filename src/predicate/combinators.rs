//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
/// use serde_json::json;
///
/// let point = is_object().and(has_key("x")).and(has_key("y"));
/// assert!(point.check(&json!({"x": 1, "y": 2})));
/// assert!(!point.check(&json!({"x": 1})));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types for zero-cost abstraction.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldrules::predicate::*;
    /// use serde_json::json;
    ///
    /// let scalar = is_string().or(is_integer()).or(is_float());
    /// assert!(scalar.check(&json!(1.5)));
    /// assert!(!scalar.check(&json!([1])));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
