//! # Signup Fields
//!
//! Field keys, labels and the schema of the signup form.

use sf_01_form_engine::{email, required, validate_required, FieldSpec, FormSchema, FormState};
use sf_02_location_directory::CityCache;

/// First name field key.
pub const FIRST_NAME: &str = "firstName";
/// Last name field key.
pub const LAST_NAME: &str = "lastName";
/// State field key.
pub const STATE: &str = "state";
/// City field key.
pub const CITY: &str = "city";
/// Email field key.
pub const EMAIL: &str = "email";
/// Password field key.
pub const PASSWORD: &str = "password";

/// All field keys in display order.
pub const FIELD_KEYS: [&str; 6] = [FIRST_NAME, LAST_NAME, STATE, CITY, EMAIL, PASSWORD];

/// Display label of a field.
pub fn label(key: &str) -> &'static str {
    match key {
        FIRST_NAME => "First Name",
        LAST_NAME => "Last Name",
        STATE => "State",
        CITY => "City",
        EMAIL => "Email",
        PASSWORD => "Password",
        _ => "",
    }
}

/// Example text shown in an empty text input.
pub fn placeholder(key: &str) -> &'static str {
    match key {
        FIRST_NAME => "John",
        LAST_NAME => "Wick",
        EMAIL => "johnwick@clickaway.com",
        PASSWORD => "●●●●●●●●",
        _ => "",
    }
}

/// City is optional only for a state known to have no cities.
///
/// While the selected state's cities are unknown the city is required.
pub fn validate_city_based_on_state(
    value: &str,
    form: &FormState,
    cities: &CityCache,
) -> Option<String> {
    if cities.has_no_options(form.value(STATE)) {
        return None;
    }
    validate_required(value)
}

/// Schema of the signup form.
pub fn signup_schema() -> FormSchema<CityCache> {
    FormSchema::new()
        .field(FIRST_NAME, FieldSpec::default().validator(required))
        .field(LAST_NAME, FieldSpec::default().validator(required))
        .field(STATE, FieldSpec::default().validator(required))
        .field(
            CITY,
            FieldSpec::default().validator(validate_city_based_on_state),
        )
        .field(
            EMAIL,
            FieldSpec::default().validator(required).validator(email),
        )
        .field(PASSWORD, FieldSpec::default().validator(required))
}
