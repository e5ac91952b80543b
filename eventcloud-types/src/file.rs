//! File references.

use serde::{Deserialize, Serialize};

/// A handle to binary content held by the external file store.
///
/// The backend uniquifies file names on upload, so the name doubles as the
/// content identity: two refs with the same name point at the same upload.
/// Change detection in the save hooks compares names, never URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__type", rename = "File")]
pub struct FileRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FileRef {
    /// Creates a file reference.
    #[must_use]
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }

    /// Returns true if both refs name the same stored file.
    #[must_use]
    pub fn same_file(&self, other: &FileRef) -> bool {
        self.name == other.name
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_file(other)
    }
}

impl Eq for FileRef {}
