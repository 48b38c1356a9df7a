//! Key-value sources the engine reads from
//!
//! Both the input mapping and the secondary source used by `confirm` rules are
//! anything that can answer "the value for this key, or nothing".
//!
//! # Examples
//!
//! ```
//! use fieldrules::Source;
//! use serde_json::json;
//!
//! let body = json!({"username": "user123"});
//! assert_eq!(body.lookup("username"), Some(&json!("user123")));
//! assert_eq!(body.lookup("password"), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A string-keyed lookup of dynamically typed values.
pub trait Source {
    /// Return the value stored under `key`, or `None` if the key is absent.
    fn lookup(&self, key: &str) -> Option<&Value>;
}

impl Source for Map<String, Value> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Only objects have keys; every other variant is an empty source.
impl Source for Value {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl<S: BuildHasher> Source for HashMap<String, Value, S> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl Source for BTreeMap<String, Value> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<S: BuildHasher> Source for IndexMap<String, Value, S> {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<T: Source + ?Sized> Source for &T {
    #[inline]
    fn lookup(&self, key: &str) -> Option<&Value> {
        (**self).lookup(key)
    }
}
