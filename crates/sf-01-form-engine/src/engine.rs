//! # Form Engine
//!
//! Keyed field state container. Owns one [`Field`] per schema key and runs
//! the schema's validators against the current form snapshot.
//!
//! Validation is synchronous and pure: validators only read the form and
//! the context passed to the call; the engine alone writes field errors.

use indexmap::IndexMap;
use tracing::trace;

use crate::domain::{Field, FormError, FormSchema, FormState};
use crate::validators::failure_message;

/// Form engine parameterised over the validator context type `C`.
pub struct FormEngine<C> {
    schema: FormSchema<C>,
    state: FormState,
}

impl<C> Clone for FormEngine<C> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            state: self.state.clone(),
        }
    }
}

impl<C> std::fmt::Debug for FormEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("schema", &self.schema)
            .field("state", &self.state)
            .finish()
    }
}

impl<C> FormEngine<C> {
    /// Build the engine with one field per schema key, each holding its
    /// initial value and no error.
    pub fn initialize(schema: FormSchema<C>) -> Self {
        let state = Self::initial_state(&schema);
        Self { schema, state }
    }

    fn initial_state(schema: &FormSchema<C>) -> FormState {
        let mut state = FormState::new();
        for (key, spec) in schema.iter() {
            state.insert(key, Field::new(spec.initial_value.clone()));
        }
        state
    }

    /// Current form snapshot.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The schema the engine was built from.
    pub fn schema(&self) -> &FormSchema<C> {
        &self.schema
    }

    /// Field by key.
    pub fn field(&self, key: &str) -> Result<&Field, FormError> {
        self.state
            .get(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    /// Current value of a field.
    pub fn value(&self, key: &str) -> Result<&str, FormError> {
        self.field(key).map(|f| f.value.as_str())
    }

    /// Current error of a field.
    pub fn error(&self, key: &str) -> Result<Option<&str>, FormError> {
        self.field(key).map(|f| f.error.as_deref())
    }

    /// Overwrite a field's value. The error is left untouched and no
    /// validation runs.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.state.get_mut(key)?.value = value.into();
        Ok(())
    }

    /// Run the field's validators in order against its current value.
    ///
    /// The first non-empty message becomes the field's error and the
    /// remaining validators are skipped. When every validator passes the
    /// error is cleared. Returns whether the field is valid.
    pub fn validate(&mut self, key: &str, ctx: &C) -> Result<bool, FormError> {
        let spec = self
            .schema
            .get(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;

        let value = self.value(key)?;
        let message = spec
            .validators
            .iter()
            .find_map(|validator| failure_message(validator(value, &self.state, ctx)));

        trace!(field = key, error = ?message, "Field validated");

        let valid = message.is_none();
        self.state.get_mut(key)?.error = message;
        Ok(valid)
    }

    /// `set_value` followed by `validate`.
    pub fn set_value_and_validate(
        &mut self,
        key: &str,
        value: impl Into<String>,
        ctx: &C,
    ) -> Result<bool, FormError> {
        self.set_value(key, value)?;
        self.validate(key, ctx)
    }

    /// Drop a field's error without revalidating.
    pub fn clear_error(&mut self, key: &str) -> Result<(), FormError> {
        self.state.get_mut(key)?.error = None;
        Ok(())
    }

    /// Validate every field in declaration order.
    ///
    /// All fields are evaluated even after a failure so every error becomes
    /// visible at once. Returns true only if all fields pass.
    pub fn validate_form(&mut self, ctx: &C) -> bool {
        let keys: Vec<String> = self.schema.keys().map(str::to_string).collect();
        let mut all_valid = true;
        for key in keys {
            // Keys come from the schema, so the lookup cannot miss.
            if !self.validate(&key, ctx).unwrap_or(false) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Snapshot of every field's value, in declaration order.
    pub fn get_values(&self) -> IndexMap<String, String> {
        self.state.values()
    }

    /// Restore every field to its initial value with no error.
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.schema);
    }
}
