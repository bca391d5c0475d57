//! Common error types for docsync.

use thiserror::Error;

/// Errors raised while building core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A document path must have an even, non-zero number of segments.
    #[error("Invalid document path: {path:?} (expected collection/document pairs)")]
    InvalidDocumentPath { path: String },

    /// A resource path segment must be non-empty and free of `/`.
    #[error("Invalid path segment: {segment:?}")]
    InvalidPathSegment { segment: String },

    /// A field path must not contain empty segments.
    #[error("Invalid field path: {path:?}")]
    InvalidFieldPath { path: String },
}

impl CoreError {
    pub fn invalid_document_path(path: impl Into<String>) -> Self {
        Self::InvalidDocumentPath { path: path.into() }
    }

    pub fn invalid_path_segment(segment: impl Into<String>) -> Self {
        Self::InvalidPathSegment {
            segment: segment.into(),
        }
    }

    pub fn invalid_field_path(path: impl Into<String>) -> Self {
        Self::InvalidFieldPath { path: path.into() }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
