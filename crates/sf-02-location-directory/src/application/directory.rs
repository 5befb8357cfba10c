//! # Remote Directory Client
//!
//! Builds the request descriptors for the three directory operations.
//! Nothing here performs I/O.

use crate::config::DirectoryConfig;
use crate::domain::RequestDescriptor;

const ACCEPT_JSON: &str = "application/json";

/// Request builder for the remote directory service.
#[derive(Clone, Debug)]
pub struct RemoteDirectory {
    config: DirectoryConfig,
}

impl RemoteDirectory {
    /// Create a directory client.
    pub fn new(config: DirectoryConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// `GET {base}/getaccesstoken` authenticated by API token and email.
    pub fn token_request(&self) -> RequestDescriptor {
        RequestDescriptor::new(self.url("getaccesstoken"), self.config.token_retry)
            .header("Accept", ACCEPT_JSON)
            .header("api-token", self.config.api_token.as_str())
            .header("user-email", self.config.user_email.as_str())
    }

    /// `GET {base}/states/{country}` with bearer auth.
    pub fn states_request(&self, token: &str) -> RequestDescriptor {
        let path = format!("states/{}", self.config.country);
        RequestDescriptor::new(self.url(&path), self.config.states_retry)
            .header("Accept", ACCEPT_JSON)
            .header("Authorization", bearer(token))
    }

    /// `GET {base}/cities/{state}` with bearer auth.
    pub fn cities_request(&self, state_name: &str, token: &str) -> RequestDescriptor {
        let path = format!("cities/{}", state_name);
        RequestDescriptor::new(self.url(&path), self.config.cities_retry)
            .header("Accept", ACCEPT_JSON)
            .header("Authorization", bearer(token))
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
