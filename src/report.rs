//! Validation results
//!
//! [`FieldErrors`] is the error collection: field name to the ordered list of
//! messages recorded for it. [`Outcome`] wraps one call's collection and
//! answers the verdict.
//!
//! # Examples
//!
//! ```
//! use fieldrules::FieldErrors;
//!
//! let mut errors = FieldErrors::new();
//! errors.add("username", "minimum length is 3 characters.");
//! errors.add("username", "format is invalid.");
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.message_count(), 2);
//! assert_eq!(
//!     errors.to_string(),
//!     "username: minimum length is 3 characters.\nusername: format is invalid."
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{Semigroup, Validation};

/// Per-field violation messages, in the order fields were first reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors {
    fields: IndexMap<String, Vec<String>>,
}

impl FieldErrors {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` to the list for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Whether no field has a message.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with messages.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Names of the fields with messages.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.fields
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, messages) in other.fields {
            let existing = self.fields.entry(field).or_default();
            *existing = std::mem::take(existing).combine(messages);
        }
        self
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// The result of one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    errors: FieldErrors,
}

impl Outcome {
    pub(crate) fn new(errors: FieldErrors) -> Self {
        Outcome { errors }
    }

    /// True iff no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors recorded by this call.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Take the errors recorded by this call.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// View as an accumulating [`Validation`].
    pub fn into_validation(self) -> Validation<(), FieldErrors> {
        if self.is_valid() {
            Validation::success(())
        } else {
            Validation::failure(self.errors)
        }
    }

    /// View as a `Result`, failing with the errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        self.into_validation().into_result()
    }
}
