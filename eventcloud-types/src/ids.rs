//! Identifier types for records owned by the external object store.
//!
//! Object ids are opaque strings assigned by the backend on first persist;
//! the core never generates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wraps a backend-assigned id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id string is empty (never valid on the backend).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A typed reference to a record in another class.
///
/// Serializes to the backend's pointer wire form. Two pointers are the same
/// reference when class name and object id both match; no other field of the
/// referenced record participates in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "__type", rename = "Pointer")]
pub struct Pointer {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "objectId")]
    pub object_id: ObjectId,
}

impl Pointer {
    /// Creates a pointer to the given record.
    #[must_use]
    pub fn new(class_name: impl Into<String>, object_id: ObjectId) -> Self {
        Self {
            class_name: class_name.into(),
            object_id,
        }
    }

    /// Pointer to a user record.
    #[must_use]
    pub fn to_user(object_id: ObjectId) -> Self {
        Self::new(crate::USER_CLASS, object_id)
    }
}
