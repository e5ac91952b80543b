//! Object CRUD and query client.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::Privilege;
use async_trait::async_trait;
use eventcloud_types::{Entity, ObjectId};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Page size used when draining a class with [`ObjectStore::find_all`].
pub const QUERY_PAGE_SIZE: u32 = 90;

/// Client interface for the backend's object database.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Loads a record by id. Reads run under the master key since the
    /// function layer acts server-side.
    async fn get(&self, class: &str, id: &ObjectId) -> StoreResult<Entity>;

    /// Persists a new record and returns its assigned id.
    async fn create(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<ObjectId>;

    /// Persists changes to an existing record.
    async fn update(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<()>;

    /// Queries one page of a class.
    async fn find(&self, class: &str, limit: u32, skip: u32) -> StoreResult<Vec<Entity>>;

    /// Drains a whole class page by page.
    async fn find_all(&self, class: &str) -> StoreResult<Vec<Entity>> {
        let mut objects = Vec::new();
        let mut skip = 0;
        loop {
            let page = self.find(class, QUERY_PAGE_SIZE, skip).await?;
            if page.is_empty() {
                return Ok(objects);
            }
            skip += page.len() as u32;
            objects.extend(page);
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(rename = "objectId")]
    object_id: ObjectId,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    results: Vec<Entity>,
}

/// REST implementation of [`ObjectStore`].
pub struct ParseObjects {
    config: StoreConfig,
    client: Client,
}

impl ParseObjects {
    /// Creates a new object client.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");
        Self { config, client }
    }

    /// Endpoint path for a class. The user table has its own mount on the
    /// backend instead of the generic `classes/` prefix.
    fn class_path(class: &str) -> String {
        match class {
            "_User" => "users".to_string(),
            other => format!("classes/{other}"),
        }
    }

    fn authed(&self, request: RequestBuilder, privilege: &Privilege) -> RequestBuilder {
        let request = request.header("X-Parse-Application-Id", &self.config.app_id);
        match privilege {
            Privilege::Master => request.header("X-Parse-Master-Key", &self.config.master_key),
            Privilege::Session(token) => request.header("X-Parse-Session-Token", token),
        }
    }

    /// Serializes the fields of an entity for a save body. The id stays in
    /// the URL; the backend rejects bodies carrying `objectId`.
    fn save_body(entity: &Entity) -> Value {
        let mut body = Map::new();
        for (key, value) in entity.fields() {
            body.insert(key.clone(), value.clone());
        }
        Value::Object(body)
    }
}

#[async_trait]
impl ObjectStore for ParseObjects {
    async fn get(&self, class: &str, id: &ObjectId) -> StoreResult<Entity> {
        let url = self
            .config
            .endpoint(&format!("{}/{}", Self::class_path(class), id));

        debug!(class, %id, "loading object");

        let response = self
            .authed(self.client.get(url), &Privilege::Master)
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("object get failed: {e}")))?;

        if response.status().as_u16() == 404 {
            return Err(StoreError::NotFound(format!("{class}/{id}")));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        let mut entity: Entity = response
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("failed to parse object: {e}")))?;
        entity.class_name = class.to_string();

        // The backend answers 200 with an empty body for unknown ids on
        // some deployments; normalize that to NotFound as well.
        if entity.id.is_none() {
            return Err(StoreError::NotFound(format!("{class}/{id}")));
        }

        Ok(entity)
    }

    async fn create(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<ObjectId> {
        let url = self.config.endpoint(&Self::class_path(&entity.class_name));

        debug!(class = %entity.class_name, "creating object");

        let response = self
            .authed(self.client.post(url), privilege)
            .json(&Self::save_body(entity))
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("object create failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("failed to parse create response: {e}")))?;

        Ok(created.object_id)
    }

    async fn update(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<()> {
        let id = entity.id.as_ref().ok_or(StoreError::Unsaved)?;
        let url = self
            .config
            .endpoint(&format!("{}/{}", Self::class_path(&entity.class_name), id));

        debug!(class = %entity.class_name, %id, "updating object");

        let response = self
            .authed(self.client.put(url), privilege)
            .json(&Self::save_body(entity))
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("object update failed: {e}")))?;

        if response.status().as_u16() == 404 {
            return Err(StoreError::NotFound(format!("{}/{}", entity.class_name, id)));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        Ok(())
    }

    async fn find(&self, class: &str, limit: u32, skip: u32) -> StoreResult<Vec<Entity>> {
        let url = self.config.endpoint(&Self::class_path(class));

        let response = self
            .authed(self.client.get(url), &Privilege::Master)
            .query(&[("limit", limit.to_string()), ("skip", skip.to_string())])
            .send()
            .await
            .map_err(|e| StoreError::Network(format!("object query failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, body });
        }

        let found: FindResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Network(format!("failed to parse query response: {e}")))?;

        let mut results = found.results;
        for entity in &mut results {
            entity.class_name = class.to_string();
        }
        Ok(results)
    }
}
