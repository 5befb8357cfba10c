//! Submitted signup values.

use serde::Serialize;
use std::fmt;

use super::fields::{CITY, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, STATE};

/// Values of a successfully validated signup form.
///
/// The password is kept out of `Debug` output and serialization so the
/// submission can be logged as is.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupValues {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Selected state.
    pub state: String,
    /// Selected city; empty when the state has no cities.
    pub city: String,
    /// Email address.
    pub email: String,
    /// Password.
    #[serde(skip_serializing)]
    pub password: String,
}

impl SignupValues {
    /// Build from a key/value snapshot. Missing keys become empty strings.
    pub fn from_map<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut out = Self {
            first_name: String::new(),
            last_name: String::new(),
            state: String::new(),
            city: String::new(),
            email: String::new(),
            password: String::new(),
        };
        for (key, value) in values {
            let slot = match key.as_str() {
                FIRST_NAME => &mut out.first_name,
                LAST_NAME => &mut out.last_name,
                STATE => &mut out.state,
                CITY => &mut out.city,
                EMAIL => &mut out.email,
                PASSWORD => &mut out.password,
                _ => continue,
            };
            slot.clone_from(value);
        }
        out
    }

    /// JSON rendering for logs, password omitted.
    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Debug for SignupValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupValues")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("state", &self.state)
            .field("city", &self.city)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
