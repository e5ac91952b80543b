//! File storage client.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use eventcloud_types::FileRef;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Client interface for the backend's file store.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stores bytes under a (backend-uniquified) name and returns the
    /// resulting reference.
    async fn upload(&self, name: &str, bytes: Vec<u8>, mime: &str) -> StoreResult<FileRef>;

    /// Deletes a stored file by name. Requires the master key on the
    /// backend. A file that is already gone is not an error.
    async fn delete(&self, name: &str) -> StoreResult<()>;

    /// Fetches raw content from a file URL. Non-2xx answers fail with
    /// [`StoreError::FetchFailed`].
    async fn fetch(&self, url: &str) -> StoreResult<Vec<u8>>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    name: String,
    url: String,
}

/// REST implementation of [`FileStore`].
pub struct ParseFiles {
    config: StoreConfig,
    client: Client,
}

impl ParseFiles {
    /// Creates a new file client.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");
        Self { config, client }
    }
}

#[async_trait]
impl FileStore for ParseFiles {
    async fn upload(&self, name: &str, bytes: Vec<u8>, mime: &str) -> StoreResult<FileRef> {
        let url = self.config.endpoint(&format!("files/{name}"));

        debug!(name, size = bytes.len(), "uploading file");

        let response = self
            .client
            .post(url)
            .header("X-Parse-Application-Id", &self.config.app_id)
            .header("X-Parse-Master-Key", &self.config.master_key)
            .header("Content-Type", mime)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("file upload failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("failed to parse upload response: {e}")))?;

        info!(name = %uploaded.name, "uploaded file");
        Ok(FileRef::new(uploaded.name, Some(uploaded.url)))
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        let url = self.config.endpoint(&format!("files/{name}"));

        debug!(name, "deleting file");

        let response = self
            .client
            .delete(url)
            .header("X-Parse-Application-Id", &self.config.app_id)
            .header("X-Parse-Master-Key", &self.config.master_key)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("file delete failed: {e}")))?;

        if !response.status().is_success() && response.status().as_u16() != 404 {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        Ok(())
    }

    async fn fetch(&self, url: &str) -> StoreResult<Vec<u8>> {
        debug!(url, "fetching file content");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::FetchFailed(format!("{url}: {e}")))?;

        if !response.status().is_success() {
            return Err(StoreError::FetchFailed(format!(
                "{url}: status {}",
                response.status().as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::FetchFailed(format!("{url}: {e}")))?;

        Ok(bytes.to_vec())
    }
}
