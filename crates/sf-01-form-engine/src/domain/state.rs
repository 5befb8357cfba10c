//! # Form State
//!
//! The full keyed snapshot handed to every validator so cross-field rules
//! can read any field's current value.

use indexmap::IndexMap;

use super::errors::FormError;
use super::field::Field;

/// Ordered mapping from field key to field state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: IndexMap<String, Field>,
}

impl FormState {
    /// Create an empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, keeping its original position if present.
    pub fn insert(&mut self, key: impl Into<String>, field: Field) {
        self.fields.insert(key.into(), field);
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Mutable access to a field, failing on unknown keys.
    pub(crate) fn get_mut(&mut self, key: &str) -> Result<&mut Field, FormError> {
        self.fields
            .get_mut(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    /// Current value of a field, or `""` when the key is unknown.
    ///
    /// Validators use this for cross-field rules; an absent sibling reads as
    /// an empty (unselected) value.
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Current error of a field.
    pub fn error(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|f| f.error.as_deref())
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, f)| (k.as_str(), f))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Snapshot of every value, in declaration order.
    pub fn values(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(k, f)| (k.clone(), f.value.clone()))
            .collect()
    }
}
