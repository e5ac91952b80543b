//! Shared handler context.

use eventcloud_store::{
    FileStore, IdentityService, ObjectStore, ParseFiles, ParseIdentity, ParseObjects, StoreConfig,
};
use std::sync::Arc;

/// The backend clients every handler runs against.
///
/// Handlers hold an `Arc<CloudContext>`; nothing in the context is mutable,
/// so concurrent invocations share it freely.
pub struct CloudContext {
    pub objects: Arc<dyn ObjectStore>,
    pub files: Arc<dyn FileStore>,
    pub identity: Arc<dyn IdentityService>,
}

impl CloudContext {
    /// Builds a context from explicit client implementations. Tests pass
    /// in-process doubles here.
    #[must_use]
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        files: Arc<dyn FileStore>,
        identity: Arc<dyn IdentityService>,
    ) -> Self {
        Self {
            objects,
            files,
            identity,
        }
    }

    /// Builds a context of REST clients against the configured backend.
    #[must_use]
    pub fn connect(config: StoreConfig) -> Self {
        Self {
            objects: Arc::new(ParseObjects::new(config.clone())),
            files: Arc::new(ParseFiles::new(config.clone())),
            identity: Arc::new(ParseIdentity::new(config)),
        }
    }
}
