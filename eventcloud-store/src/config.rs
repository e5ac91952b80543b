//! Shared client configuration.

use serde::{Deserialize, Serialize};

/// Configuration shared by every backend client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the backend's REST mount (e.g. `https://api.example.com/parse`).
    pub server_url: String,
    /// Application id header value.
    pub app_id: String,
    /// Master key header value, used for elevated operations.
    pub master_key: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:1337/parse".to_string(),
            app_id: String::new(),
            master_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl StoreConfig {
    /// Joins an endpoint path onto the server base URL.
    #[must_use]
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.server_url.trim_end_matches('/'), path)
    }
}
