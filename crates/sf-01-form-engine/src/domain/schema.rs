//! # Form Schema
//!
//! Immutable description of a form: one `FieldSpec` per key, in
//! declaration order.

use indexmap::IndexMap;

use crate::validators::ValidatorFn;

/// Initial value and ordered validators for one field.
pub struct FieldSpec<C> {
    /// Value the field starts with.
    pub initial_value: String,
    /// Validators run in declaration order; the first failure wins.
    pub validators: Vec<ValidatorFn<C>>,
}

impl<C> FieldSpec<C> {
    /// Create a spec with the given initial value and no validators.
    pub fn new(initial_value: impl Into<String>) -> Self {
        Self {
            initial_value: initial_value.into(),
            validators: Vec::new(),
        }
    }

    /// Append a validator.
    pub fn validator(mut self, validator: ValidatorFn<C>) -> Self {
        self.validators.push(validator);
        self
    }
}

impl<C> Default for FieldSpec<C> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<C> Clone for FieldSpec<C> {
    fn clone(&self) -> Self {
        Self {
            initial_value: self.initial_value.clone(),
            validators: self.validators.clone(),
        }
    }
}

impl<C> std::fmt::Debug for FieldSpec<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("initial_value", &self.initial_value)
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Mapping from field key to its spec.
pub struct FormSchema<C> {
    fields: IndexMap<String, FieldSpec<C>>,
}

impl<C> Clone for FormSchema<C> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<C> std::fmt::Debug for FormSchema<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<C> FormSchema<C> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declare a field. Redeclaring a key replaces its spec in place.
    pub fn field(mut self, key: impl Into<String>, spec: FieldSpec<C>) -> Self {
        self.fields.insert(key.into(), spec);
        self
    }

    /// Spec for a key.
    pub fn get(&self, key: &str) -> Option<&FieldSpec<C>> {
        self.fields.get(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Specs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec<C>)> {
        self.fields.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C> Default for FormSchema<C> {
    fn default() -> Self {
        Self::new()
    }
}
