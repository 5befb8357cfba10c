//! # Integration Tests
//!
//! Shared fixtures plus the flow modules.

pub mod flows;
pub mod persistence;
pub mod schema;

use sf_02_location_directory::MockTransport;
use serde_json::json;

/// Base URL used by `DirectoryConfig::for_testing`.
pub const BASE_URL: &str = "http://directory.test/api";

/// Token endpoint under [`BASE_URL`].
pub fn token_url() -> String {
    format!("{}/getaccesstoken", BASE_URL)
}

/// States endpoint for the default country.
pub fn states_url() -> String {
    format!("{}/states/United States", BASE_URL)
}

/// Cities endpoint for one state.
pub fn cities_url(state: &str) -> String {
    format!("{}/cities/{}", BASE_URL, state)
}

/// Directory with three states: one with duplicate city names, one without
/// cities and one whose cities endpoint is down.
pub fn directory_fixture() -> MockTransport {
    let transport = MockTransport::new();
    transport.respond_json(token_url(), json!({"auth_token": "fixture-token"}));
    transport.respond_json(
        states_url(),
        json!([
            {"state_name": "Texas"},
            {"state_name": "Wyoming"},
            {"state_name": "Ohio"}
        ]),
    );
    transport.respond_json(
        cities_url("Texas"),
        json!([
            {"city_name": "Austin"},
            {"city_name": "Houston"},
            {"city_name": "Austin"}
        ]),
    );
    transport.respond_json(cities_url("Wyoming"), json!([]));
    transport.fail(cities_url("Ohio"));
    transport
}
