//! Schema administration passthrough.
//!
//! Thin typed wrapper over the backend's `/schemas/{class}` endpoints. No
//! logic beyond header assembly; mutations surface the backend's status,
//! reads swallow failures and report absence.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Master-key client for schema CRUD.
pub struct SchemaAdmin {
    config: StoreConfig,
    client: Client,
}

impl SchemaAdmin {
    /// Creates a new schema-admin client.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");
        Self { config, client }
    }

    fn request(&self, method: Method, class: &str) -> RequestBuilder {
        let url = self.config.endpoint(&format!("schemas/{class}"));
        self.client
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("X-Parse-Application-Id", &self.config.app_id)
            .header("X-Parse-Master-Key", &self.config.master_key)
    }

    /// Fetches a class schema. Any failure reads as "no schema".
    pub async fn get(&self, class: &str) -> Option<Value> {
        let response = self.request(Method::GET, class).send().await.ok()?;
        if response.status().as_u16() != 200 {
            debug!(class, status = response.status().as_u16(), "schema read failed");
            return None;
        }
        response.json().await.ok()
    }

    /// Creates a class schema.
    pub async fn create(&self, class: &str, schema: &Value) -> StoreResult<()> {
        self.send_schema(Method::POST, class, schema).await
    }

    /// Updates a class schema.
    pub async fn update(&self, class: &str, schema: &Value) -> StoreResult<()> {
        self.send_schema(Method::PUT, class, schema).await
    }

    async fn send_schema(&self, method: Method, class: &str, schema: &Value) -> StoreResult<()> {
        let response = self
            .request(method, class)
            .json(schema)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("schema write failed: {e}")))?;

        if response.status().as_u16() != 200 {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }
        Ok(())
    }

    /// Deletes a class schema (the class must be empty on the backend).
    pub async fn delete(&self, class: &str) -> StoreResult<()> {
        let response = self
            .request(Method::DELETE, class)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("schema delete failed: {e}")))?;

        if response.status().as_u16() != 200 {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }
        Ok(())
    }
}
