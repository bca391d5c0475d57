//! Write batch identifiers.

/// Identifier of a group of mutations submitted together.
///
/// Batch ids are assigned in increasing order by the local mutation queue.
pub type BatchId = i32;

/// Sentinel batch id meaning "no batch".
pub const BATCH_ID_UNKNOWN: BatchId = -1;
