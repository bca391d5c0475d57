//! Mutation error types.

use docsync_core::CoreError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur when working with mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The operation needs a valid mutation but got the placeholder.
    #[error("Operation requires a valid mutation")]
    Invalid,

    /// The mutation's key or contents could not be addressed.
    #[error("Invalid mutation contents: {0}")]
    Core(#[from] CoreError),
}
