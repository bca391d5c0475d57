//! Document identity.

use crate::{CoreError, CoreResult, ResourcePath};
use std::fmt;

/// Identifies a single document by its full path.
///
/// The path always has an even, non-zero number of segments:
/// `collection/document[/collection/document...]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey {
    path: ResourcePath,
}

impl DocumentKey {
    /// Create a key from a resource path.
    pub fn from_path(path: ResourcePath) -> CoreResult<Self> {
        if !Self::is_document_key(&path) {
            return Err(CoreError::invalid_document_path(path.canonical_string()));
        }
        Ok(Self { path })
    }

    /// Parse a key from its slash-separated form, e.g. `"rooms/eros"`.
    pub fn from_path_string(path: &str) -> CoreResult<Self> {
        Self::from_path(ResourcePath::from_string(path))
    }

    /// Returns true if `path` could name a document.
    pub fn is_document_key(path: &ResourcePath) -> bool {
        !path.is_empty() && path.len() % 2 == 0
    }

    /// The full document path.
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Path of the collection that contains this document.
    pub fn collection_path(&self) -> ResourcePath {
        self.path.pop_last()
    }

    /// The last path segment.
    pub fn document_id(&self) -> &str {
        self.path.last_segment().unwrap_or_default()
    }

    /// Returns true if the immediate parent collection is named `collection_id`.
    pub fn has_collection_id(&self, collection_id: &str) -> bool {
        self.collection_path().last_segment() == Some(collection_id)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
