//! String predicates
//!
//! Length bounds used by the `min` and `max` rules. Lengths are measured in
//! bytes of the UTF-8 encoding.

use super::combinators::Predicate;

/// Inclusive byte-length bounds on a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBounds {
    min: usize,
    max: usize,
}

impl Predicate<str> for LenBounds {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.len();
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if string length is at least min.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// assert!(len_min(3).check("abc"));
/// assert!(!len_min(3).check("ab"));
/// ```
pub fn len_min(min: usize) -> LenBounds {
    LenBounds {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// assert!(len_max(5).check("hello"));
/// assert!(!len_max(5).check("toolong"));
/// ```
pub fn len_max(max: usize) -> LenBounds {
    LenBounds { min: 0, max }
}
