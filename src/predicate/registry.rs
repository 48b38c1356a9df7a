//! Named capabilities for non-primitive type tags
//!
//! A schema may declare `type: "Address"` or any other name outside the four
//! primitives. The engine has no reflection to fall back on, so each such
//! name must be backed by a predicate the caller registers here.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::combinators::Predicate;
use crate::error::SchemaError;
use crate::schema::TypeTag;

type Capability = Arc<dyn Predicate<Value>>;

/// Map from type name to the predicate that decides membership.
///
/// Cloning is cheap; predicates are shared.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
/// use serde_json::json;
///
/// let registry = TypeRegistry::new()
///     .register("Address", is_object().and(has_key("city")))
///     .unwrap();
///
/// assert_eq!(registry.check("Address", &json!({"city": "Lyon"})), Some(true));
/// assert_eq!(registry.check("Address", &json!("Lyon")), Some(false));
/// assert_eq!(registry.check("Money", &json!(1)), None);
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
    capabilities: IndexMap<String, Capability>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `predicate` under `name`, replacing any previous entry.
    ///
    /// Primitive tag names are reserved and rejected.
    pub fn register<P>(mut self, name: impl Into<String>, predicate: P) -> Result<Self, SchemaError>
    where
        P: Predicate<Value> + 'static,
    {
        let name = name.into();
        if TypeTag::is_primitive_name(&name) {
            return Err(SchemaError::ReservedType(name));
        }
        self.capabilities.insert(name, Arc::new(predicate));
        Ok(self)
    }

    /// Whether a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Evaluate the predicate registered under `name`.
    ///
    /// Returns `None` when nothing is registered under that name.
    pub fn check(&self, name: &str, value: &Value) -> Option<bool> {
        self.capabilities
            .get(name)
            .map(|predicate| predicate.check(value))
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("names", &self.capabilities.keys().collect::<Vec<_>>())
            .finish()
    }
}
