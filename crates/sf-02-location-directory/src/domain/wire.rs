//! # Wire Records
//!
//! JSON shapes returned by the remote directory service.

use serde::Deserialize;

use super::entities::{City, State};

/// Body of `GET {base}/getaccesstoken`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent calls.
    pub auth_token: String,
}

/// Element of `GET {base}/states/{country}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StateRecord {
    /// State name.
    pub state_name: String,
}

/// Element of `GET {base}/cities/{state}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    /// City name; may repeat within one response.
    pub city_name: String,
}

impl From<StateRecord> for State {
    fn from(record: StateRecord) -> Self {
        State::new(record.state_name)
    }
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        City::new(record.city_name)
    }
}
