//! Overlay error types.

use docsync_core::BatchId;
use thiserror::Error;

/// Errors returned by fallible overlay accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// The overlay holds the invalid mutation, so it has no document key.
    #[error("overlay with largest_batch_id={largest_batch_id} has no valid mutation")]
    InvalidMutation { largest_batch_id: BatchId },
}

impl OverlayError {
    pub fn invalid_mutation(largest_batch_id: BatchId) -> Self {
        Self::InvalidMutation { largest_batch_id }
    }
}

/// Result type for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;
