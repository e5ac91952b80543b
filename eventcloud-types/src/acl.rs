//! Access-control descriptors.
//!
//! Mirrors the backend's wire ACL: a map from user id (or `"*"` for the
//! public entry) to read/write flags. Enforcement happens on the backend;
//! this type only lets hooks inspect the descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PUBLIC_KEY: &str = "*";

/// Read/write flags for a single ACL entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub write: bool,
}

/// Access-control descriptor of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acl {
    entries: BTreeMap<String, AclEntry>,
}

impl Acl {
    /// Creates an empty ACL (no entries; backend treats this as unrestricted
    /// only when the field is absent entirely, which callers model as
    /// `Option<Acl>`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for a specific user id.
    pub fn set_user(&mut self, user_id: &str, read: bool, write: bool) {
        self.entries
            .insert(user_id.to_string(), AclEntry { read, write });
    }

    /// Sets the public entry.
    pub fn set_public(&mut self, read: bool, write: bool) {
        self.entries
            .insert(PUBLIC_KEY.to_string(), AclEntry { read, write });
    }

    fn entry(&self, key: &str) -> AclEntry {
        self.entries.get(key).copied().unwrap_or_default()
    }

    /// Returns true if the given user holds both read and write access,
    /// either directly or through the public entry.
    #[must_use]
    pub fn allows_read_write(&self, user_id: &str) -> bool {
        let user = self.entry(user_id);
        let public = self.entry(PUBLIC_KEY);
        user.read && user.write || public.read && public.write
    }
}
