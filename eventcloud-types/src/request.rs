//! Request envelopes handed to hooks and cloud functions by the runtime.

use crate::{Entity, ObjectId};
use serde_json::{Map, Value};
use thiserror::Error;

/// Validation errors raised by the request envelopes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The operation requires an authenticated caller and none was supplied.
    #[error("must be signed in to call this function")]
    AuthRequired,

    /// A required parameter is absent or empty.
    #[error("missing required parameter: {0}")]
    MissingParam(String),
}

/// The authenticated identity behind a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: ObjectId,
    pub username: String,
}

impl Caller {
    #[must_use]
    pub fn new(id: ObjectId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Before-save hook input: the record about to be persisted plus, for
/// updates, the stored state it replaces.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Pre-change snapshot. `None` on first persist, when no stored state
    /// exists yet.
    pub original: Option<Entity>,
    /// The record about to be persisted. Hooks mutate this in place.
    pub entity: Entity,
}

impl SaveRequest {
    /// Envelope for a first-time persist.
    #[must_use]
    pub fn create(entity: Entity) -> Self {
        Self {
            original: None,
            entity,
        }
    }

    /// Envelope for an update of an existing record.
    #[must_use]
    pub fn update(original: Entity, entity: Entity) -> Self {
        Self {
            original: Some(original),
            entity,
        }
    }
}

/// Cloud-function call input: an optional authenticated caller and a
/// parameter map with unique keys.
#[derive(Debug, Clone, Default)]
pub struct CallRequest {
    pub user: Option<Caller>,
    pub params: Map<String, Value>,
}

impl CallRequest {
    /// Builds a call from an authenticated caller.
    #[must_use]
    pub fn from_user(user: Caller) -> Self {
        Self {
            user: Some(user),
            params: Map::new(),
        }
    }

    /// Adds a string parameter.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Returns the caller or fails with [`RequestError::AuthRequired`].
    pub fn require_user(&self) -> Result<&Caller, RequestError> {
        self.user.as_ref().ok_or(RequestError::AuthRequired)
    }

    /// Returns a non-empty string parameter or fails with
    /// [`RequestError::MissingParam`].
    pub fn require_str_param(&self, name: &str) -> Result<&str, RequestError> {
        match self.params.get(name).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(RequestError::MissingParam(name.to_string())),
        }
    }
}
