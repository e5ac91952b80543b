//! The in-process entity handle.

use crate::{Acl, FileRef, ObjectId, Pointer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record owned by the external object store.
///
/// `fields` holds the record's named columns as JSON; hooks read and mutate
/// it through the typed accessors rather than touching the map directly.
/// `id` is `None` until the backend has persisted the record once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "objectId", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip)]
    pub class_name: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Entity {
    /// Creates an unpersisted entity of the given class.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: class_name.into(),
            fields: Map::new(),
        }
    }

    /// Creates an entity handle for an already-persisted record.
    #[must_use]
    pub fn with_id(class_name: impl Into<String>, id: ObjectId) -> Self {
        Self {
            id: Some(id),
            class_name: class_name.into(),
            fields: Map::new(),
        }
    }

    /// Pointer to this entity. Panics are avoided by returning `None` for
    /// unpersisted records, which cannot be referenced yet.
    #[must_use]
    pub fn pointer(&self) -> Option<Pointer> {
        self.id
            .clone()
            .map(|id| Pointer::new(self.class_name.clone(), id))
    }

    /// Raw field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String field value.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// File-reference field value, if the field holds one.
    #[must_use]
    pub fn get_file(&self, field: &str) -> Option<FileRef> {
        self.get(field)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Pointer-array field value. An absent field reads as an empty list;
    /// non-pointer elements are skipped.
    #[must_use]
    pub fn get_pointers(&self, field: &str) -> Vec<Pointer> {
        match self.get(field) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The entity's ACL descriptor, if one is set.
    #[must_use]
    pub fn acl(&self) -> Option<Acl> {
        self.get("ACL")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Sets a raw field value.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Sets a file-reference field.
    pub fn set_file(&mut self, field: &str, file: &FileRef) {
        // FileRef always serializes to a JSON object
        if let Ok(value) = serde_json::to_value(file) {
            self.fields.insert(field.to_string(), value);
        }
    }

    /// Sets a pointer-array field.
    pub fn set_pointers(&mut self, field: &str, pointers: &[Pointer]) {
        let items: Vec<Value> = pointers
            .iter()
            .filter_map(|p| serde_json::to_value(p).ok())
            .collect();
        self.fields.insert(field.to_string(), Value::Array(items));
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Iterates over all fields, for serialization by store clients.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}
