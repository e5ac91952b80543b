//! In-memory doubles for the backend clients.

#![allow(dead_code)]

use async_trait::async_trait;
use eventcloud_functions::CloudContext;
use eventcloud_store::{
    FileStore, IdentityService, ObjectStore, Privilege, Session, StoreError, StoreResult,
};
use eventcloud_types::{Entity, FileRef, ObjectId};
use image::{ImageFormat, RgbImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Object store double backed by a map keyed on (class, id).
#[derive(Default)]
pub struct MemoryObjects {
    entities: Mutex<HashMap<(String, String), Entity>>,
    next_id: AtomicU32,
    /// Privilege of every save, in call order.
    pub saved_with: Mutex<Vec<Privilege>>,
}

impl MemoryObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, entity: Entity) {
        let id = entity.id.clone().expect("seeded entity needs an id");
        self.entities
            .lock()
            .unwrap()
            .insert((entity.class_name.clone(), id.to_string()), entity);
    }

    pub fn entity(&self, class: &str, id: &str) -> Option<Entity> {
        self.entities
            .lock()
            .unwrap()
            .get(&(class.to_string(), id.to_string()))
            .cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saved_with.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjects {
    async fn get(&self, class: &str, id: &ObjectId) -> StoreResult<Entity> {
        self.entity(class, id.as_str())
            .ok_or_else(|| StoreError::NotFound(format!("{class}/{id}")))
    }

    async fn create(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<ObjectId> {
        let id = ObjectId::new(format!("mem{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        let mut stored = entity.clone();
        stored.id = Some(id.clone());
        self.insert(stored);
        self.saved_with.lock().unwrap().push(privilege.clone());
        Ok(id)
    }

    async fn update(&self, entity: &Entity, privilege: &Privilege) -> StoreResult<()> {
        let id = entity.id.as_ref().ok_or(StoreError::Unsaved)?;
        let key = (entity.class_name.clone(), id.to_string());
        let mut entities = self.entities.lock().unwrap();
        if !entities.contains_key(&key) {
            return Err(StoreError::NotFound(format!("{}/{id}", entity.class_name)));
        }
        entities.insert(key, entity.clone());
        self.saved_with.lock().unwrap().push(privilege.clone());
        Ok(())
    }

    async fn find(&self, class: &str, limit: u32, skip: u32) -> StoreResult<Vec<Entity>> {
        let mut matching: Vec<Entity> = self
            .entities
            .lock()
            .unwrap()
            .iter()
            .filter(|((c, _), _)| c == class)
            .map(|(_, e)| e.clone())
            .collect();
        matching.sort_by_key(|e| e.id.clone().map(|id| id.to_string()));
        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}

/// File store double. Content is keyed by `memory://{name}` URLs; upload,
/// delete, and fetch calls are recorded so tests can assert zero-I/O paths.
#[derive(Default)]
pub struct MemoryFiles {
    content: Mutex<HashMap<String, Vec<u8>>>,
    pub uploads: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    pub fetch_count: AtomicU32,
    pub fail_fetch: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    fn url_for(name: &str) -> String {
        format!("memory://{name}")
    }

    /// Pre-loads content as if a client had already uploaded it.
    pub fn stage(&self, name: &str, bytes: Vec<u8>) -> FileRef {
        let url = Self::url_for(name);
        self.content.lock().unwrap().insert(url.clone(), bytes);
        FileRef::new(name, Some(url))
    }

    /// Content of a stored file, by ref.
    pub fn content_of(&self, file: &FileRef) -> Option<Vec<u8>> {
        let url = file.url.clone()?;
        self.content.lock().unwrap().get(&url).cloned()
    }

    pub fn upload_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deleted_names(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStore for MemoryFiles {
    async fn upload(&self, name: &str, bytes: Vec<u8>, _mime: &str) -> StoreResult<FileRef> {
        let url = Self::url_for(name);
        self.content.lock().unwrap().insert(url.clone(), bytes);
        self.uploads.lock().unwrap().push(name.to_string());
        Ok(FileRef::new(name, Some(url)))
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StoreError::Api {
                status: 500,
                body: "delete rejected".to_string(),
            });
        }
        self.deletes.lock().unwrap().push(name.to_string());
        self.content.lock().unwrap().remove(&Self::url_for(name));
        Ok(())
    }

    async fn fetch(&self, url: &str) -> StoreResult<Vec<u8>> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(StoreError::FetchFailed(format!("{url}: unreachable")));
        }
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.content
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| StoreError::FetchFailed(format!("{url}: status 404")))
    }
}

/// Identity double accepting exactly one username/password pair.
pub struct MemoryIdentity {
    pub username: String,
    pub password: String,
    pub session: Session,
}

impl MemoryIdentity {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            session: Session {
                token: "r:test_session".to_string(),
                user_id: ObjectId::new("u1"),
                created_at: None,
            },
        }
    }
}

#[async_trait]
impl IdentityService for MemoryIdentity {
    async fn login(&self, username: &str, password: &str) -> StoreResult<Session> {
        if username == self.username && password == self.password {
            Ok(self.session.clone())
        } else {
            Err(StoreError::InvalidCredentials)
        }
    }
}

/// A full test harness: doubles plus the context the handlers run against.
pub struct Harness {
    pub objects: Arc<MemoryObjects>,
    pub files: Arc<MemoryFiles>,
    pub ctx: Arc<CloudContext>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_identity(MemoryIdentity::new("a@b.c", "hunter2"))
    }

    pub fn with_identity(identity: MemoryIdentity) -> Self {
        let objects = Arc::new(MemoryObjects::new());
        let files = Arc::new(MemoryFiles::new());
        let ctx = Arc::new(CloudContext::new(
            objects.clone(),
            files.clone(),
            Arc::new(identity),
        ));
        Self {
            objects,
            files,
            ctx,
        }
    }
}

/// Solid-color PNG bytes for pipeline inputs.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([30, 144, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
