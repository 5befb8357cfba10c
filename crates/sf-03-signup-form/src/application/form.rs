//! # Signup Form
//!
//! Binds the form engine to a location session. Validation always sees a
//! fresh snapshot of the session's city cache, so the city rule follows
//! whatever the session has learned since the last event.

use sf_01_form_engine::{FormEngine, FormState};
use sf_02_location_directory::{CityCache, DurableStorage, HttpTransport, LocationSession};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{
    label, placeholder, signup_schema, DropdownView, SignupError, SignupValues, TextInputView,
    CITY, FIELD_KEYS, PASSWORD, STATE,
};

/// Signup form bound to a location session.
pub struct SignupForm<T: HttpTransport, S: DurableStorage> {
    engine: FormEngine<CityCache>,
    session: Arc<LocationSession<T, S>>,
}

impl<T: HttpTransport, S: DurableStorage> SignupForm<T, S> {
    /// Create an empty form.
    pub fn new(session: Arc<LocationSession<T, S>>) -> Self {
        Self {
            engine: FormEngine::initialize(signup_schema()),
            session,
        }
    }

    /// Location session backing the dropdowns.
    pub fn session(&self) -> &Arc<LocationSession<T, S>> {
        &self.session
    }

    /// Current form snapshot.
    pub fn state(&self) -> &FormState {
        self.engine.state()
    }

    /// Current value of a field.
    pub fn value(&self, key: &str) -> Result<&str, SignupError> {
        Ok(self.engine.value(key)?)
    }

    /// Current error of a field.
    pub fn error(&self, key: &str) -> Result<Option<&str>, SignupError> {
        Ok(self.engine.error(key)?)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Text changed. Does not validate.
    pub fn change_text(&mut self, key: &str, value: impl Into<String>) -> Result<(), SignupError> {
        self.engine.set_value(key, value)?;
        Ok(())
    }

    /// Input lost focus.
    pub fn blur(&mut self, key: &str) -> Result<bool, SignupError> {
        let cities = self.session.city_cache();
        Ok(self.engine.validate(key, &cities)?)
    }

    /// Input gained focus.
    pub fn focus(&mut self, key: &str) -> Result<(), SignupError> {
        self.engine.clear_error(key)?;
        Ok(())
    }

    /// State chosen: validate it, reset the city and load that state's cities.
    pub async fn select_state(&mut self, state_name: &str) -> Result<(), SignupError> {
        let cities = self.session.city_cache();
        self.engine
            .set_value_and_validate(STATE, state_name, &cities)?;
        self.engine.set_value(CITY, "")?;
        debug!("[sf-03] State selected: {}", state_name);

        self.session.fetch_cities_for_state(state_name).await;
        Ok(())
    }

    /// City chosen.
    pub fn select_city(&mut self, city_name: &str) -> Result<bool, SignupError> {
        let cities = self.session.city_cache();
        Ok(self
            .engine
            .set_value_and_validate(CITY, city_name, &cities)?)
    }

    /// Validate every field and return the values when all pass.
    pub fn submit(&mut self) -> Result<SignupValues, SignupError> {
        let cities = self.session.city_cache();
        if !self.engine.validate_form(&cities) {
            let fields: Vec<String> = self
                .engine
                .state()
                .iter()
                .filter(|(_, field)| !field.is_valid())
                .map(|(key, _)| key.to_string())
                .collect();
            debug!("[sf-03] Submission rejected: {:?}", fields);
            return Err(SignupError::Invalid { fields });
        }

        let values = SignupValues::from_map(&self.engine.get_values());
        info!(
            session = %self.session.session_id(),
            values = %values.to_log_json(),
            "[sf-03] Signup submitted"
        );
        Ok(values)
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// State dropdown.
    pub fn state_dropdown(&self) -> DropdownView {
        let selected = self.engine.state().value(STATE);
        let error = self
            .engine
            .state()
            .error(STATE)
            .map(str::to_string)
            .or_else(|| self.session.error());

        DropdownView {
            label: label(STATE).to_string(),
            options: self.session.states().into_iter().map(|s| s.name).collect(),
            value: selected.to_string(),
            error,
            disabled: false,
            loading: selected.is_empty() && self.session.loading(),
        }
    }

    /// City dropdown for the selected state.
    pub fn city_dropdown(&self) -> DropdownView {
        let selected_state = self.engine.state().value(STATE);
        let loading = self.session.loading();
        let no_state = selected_state.is_empty();
        let cache = self.session.city_cache();

        DropdownView {
            label: label(CITY).to_string(),
            options: cache.names(selected_state),
            value: self.engine.state().value(CITY).to_string(),
            error: self.engine.state().error(CITY).map(str::to_string),
            disabled: loading || no_state || cache.has_no_options(selected_state),
            loading: !no_state && loading,
        }
    }

    /// Free-text input for one of the text fields.
    pub fn text_input(&self, key: &str) -> Result<TextInputView, SignupError> {
        let field = self.engine.field(key)?;
        Ok(TextInputView {
            label: label(key).to_string(),
            placeholder: placeholder(key).to_string(),
            value: field.value.clone(),
            error: field.error.clone(),
            masked: key == PASSWORD,
        })
    }

    /// Keys of the fields currently showing an error.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        FIELD_KEYS
            .into_iter()
            .filter(|key| self.engine.state().error(key).is_some())
            .collect()
    }
}
