//! Identity service client.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventcloud_types::ObjectId;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// An authenticated session returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: ObjectId,
    /// Account creation time, when the identity service reports it.
    pub created_at: Option<DateTime<Utc>>,
}

/// Client interface for the backend's identity service.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Authenticates a username/password pair. A rejected pair fails with
    /// [`StoreError::InvalidCredentials`].
    async fn login(&self, username: &str, password: &str) -> StoreResult<Session>;
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "objectId")]
    object_id: ObjectId,
    #[serde(rename = "sessionToken")]
    session_token: String,
    #[serde(rename = "createdAt")]
    created_at: Option<DateTime<Utc>>,
}

/// REST implementation of [`IdentityService`].
pub struct ParseIdentity {
    config: StoreConfig,
    client: Client,
}

impl ParseIdentity {
    /// Creates a new identity client.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");
        Self { config, client }
    }
}

#[async_trait]
impl IdentityService for ParseIdentity {
    async fn login(&self, username: &str, password: &str) -> StoreResult<Session> {
        let url = self.config.endpoint("login");

        debug!(username, "logging in");

        let response = self
            .client
            .get(url)
            .header("X-Parse-Application-Id", &self.config.app_id)
            .header("X-Parse-Revocable-Session", "1")
            .query(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("login failed: {e}")))?;

        // The backend answers 404 with an "invalid login parameters" body
        // for bad credentials; 401 shows up behind some proxies.
        if matches!(response.status().as_u16(), 401 | 404) {
            return Err(StoreError::InvalidCredentials);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("failed to parse login response: {e}")))?;

        Ok(Session {
            token: login.session_token,
            user_id: login.object_id,
            created_at: login.created_at,
        })
    }
}
