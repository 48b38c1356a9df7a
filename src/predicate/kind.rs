//! JSON kind predicates
//!
//! The four primitive type tags are checked with [`is_string`],
//! [`is_integer`], [`is_float`] and [`is_array`]. The remaining predicates
//! are building blocks for named capabilities registered on a
//! [`TypeRegistry`](super::TypeRegistry).

use serde_json::Value;

use super::combinators::Predicate;

/// Predicate that checks a value is a JSON string.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsString;

impl Predicate<Value> for IsString {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_string()
    }
}

/// Create a predicate that checks a value is a JSON string.
pub fn is_string() -> IsString {
    IsString
}

/// Predicate that checks a value is an integral JSON number.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsInteger;

impl Predicate<Value> for IsInteger {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_i64() || value.is_u64()
    }
}

/// Create a predicate that checks a value is an integral JSON number.
///
/// A number written with a fractional part or exponent is a float, even when
/// its value is whole.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
/// use serde_json::json;
///
/// assert!(is_integer().check(&json!(42)));
/// assert!(is_integer().check(&json!(u64::MAX)));
/// assert!(!is_integer().check(&json!(42.0)));
/// assert!(!is_integer().check(&json!("42")));
/// ```
pub fn is_integer() -> IsInteger {
    IsInteger
}

/// Predicate that checks a value is a floating-point JSON number.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsFloat;

impl Predicate<Value> for IsFloat {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_f64()
    }
}

/// Create a predicate that checks a value is a floating-point JSON number.
pub fn is_float() -> IsFloat {
    IsFloat
}

/// Predicate that checks a value is a JSON array.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsArray;

impl Predicate<Value> for IsArray {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_array()
    }
}

/// Create a predicate that checks a value is a JSON array.
pub fn is_array() -> IsArray {
    IsArray
}

/// Predicate that checks a value is a JSON object.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsObject;

impl Predicate<Value> for IsObject {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.is_object()
    }
}

/// Create a predicate that checks a value is a JSON object.
pub fn is_object() -> IsObject {
    IsObject
}

/// Predicate that checks a value is an object holding a given key.
#[derive(Clone, Debug)]
pub struct HasKey<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<Value> for HasKey<S> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|map| map.contains_key(self.0.as_ref()))
    }
}

/// Create a predicate that checks a value is an object holding `key`.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
/// use serde_json::json;
///
/// assert!(has_key("city").check(&json!({"city": "Lyon"})));
/// assert!(!has_key("city").check(&json!({"zip": "69001"})));
/// assert!(!has_key("city").check(&json!("city")));
/// ```
pub fn has_key<S: AsRef<str> + Send + Sync>(key: S) -> HasKey<S> {
    HasKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_kinds_are_disjoint() {
        let samples = [
            json!("s"),
            json!(1),
            json!(-1),
            json!(1.5),
            json!([1]),
            json!({"a": 1}),
            json!(true),
            Value::Null,
        ];

        for value in &samples {
            let hits = [
                is_string().check(value),
                is_integer().check(value),
                is_float().check(value),
                is_array().check(value),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert!(hits <= 1, "{} matched {} primitive kinds", value, hits);
        }
    }

    #[test]
    fn test_negative_integer() {
        assert!(is_integer().check(&json!(-7)));
        assert!(!is_float().check(&json!(-7)));
    }

    #[test]
    fn test_float() {
        assert!(is_float().check(&json!(1.0)));
        assert!(!is_float().check(&json!(1)));
    }

    #[test]
    fn test_object_is_not_array() {
        assert!(is_object().check(&json!({})));
        assert!(!is_array().check(&json!({})));
        assert!(is_array().check(&json!([])));
    }
}
