//! The Overlay value and its hashing strategy.

use crate::{OverlayError, OverlayMutation, OverlayResult};
use docsync_core::{BatchId, DocumentKey, BATCH_ID_UNKNOWN};
use docsync_mutation::Mutation;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::BuildHasher;

/// The net pending write for one document: the largest batch id that touched
/// it and the squashed mutation covering every pending batch.
///
/// `Overlay::default()` has `largest_batch_id == -1` and an invalid mutation.
/// Any other combination is accepted as given; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Overlay<M: OverlayMutation = Mutation> {
    largest_batch_id: BatchId,
    mutation: M,
}

impl<M: OverlayMutation> Overlay<M> {
    /// Create an overlay from a batch id and the squashed mutation.
    pub fn new(largest_batch_id: BatchId, mutation: M) -> Self {
        Self {
            largest_batch_id,
            mutation,
        }
    }

    /// Id of the newest batch that contributed to this overlay.
    pub fn largest_batch_id(&self) -> BatchId {
        self.largest_batch_id
    }

    /// The squashed mutation. May be invalid.
    pub fn mutation(&self) -> &M {
        &self.mutation
    }

    /// Returns true if the wrapped mutation is valid.
    pub fn is_valid(&self) -> bool {
        self.mutation.is_valid()
    }

    /// Key of the document this overlay applies to.
    ///
    /// # Panics
    ///
    /// Panics if the mutation is invalid. Use [`Overlay::try_key`] when the
    /// overlay may be empty.
    pub fn key(&self) -> &DocumentKey {
        match self.mutation.try_key() {
            Some(key) => key,
            None => {
                tracing::error!(
                    largest_batch_id = self.largest_batch_id,
                    mutation = %self.mutation,
                    "overlay::key_on_invalid_mutation"
                );
                panic!(
                    "key() called on overlay with largest_batch_id={} and an invalid mutation",
                    self.largest_batch_id
                );
            }
        }
    }

    /// Key of the document this overlay applies to, or an error when the
    /// mutation is invalid.
    pub fn try_key(&self) -> OverlayResult<&DocumentKey> {
        self.mutation
            .try_key()
            .ok_or_else(|| OverlayError::invalid_mutation(self.largest_batch_id))
    }

    /// Move the overlay out, leaving `self` equal to `Overlay::default()`.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Split into the batch id and the mutation.
    pub fn into_parts(self) -> (BatchId, M) {
        (self.largest_batch_id, self.mutation)
    }

    /// Hash of this overlay. Always equal to `OverlayHash.hash(self)`.
    pub fn hash_value(&self) -> u64 {
        OverlayHash.hash(self)
    }
}

impl<M: OverlayMutation> Default for Overlay<M> {
    fn default() -> Self {
        Self {
            largest_batch_id: BATCH_ID_UNKNOWN,
            mutation: M::default(),
        }
    }
}

// `largest_batch_id` is always printed; `mutation` only when valid.
impl<M: OverlayMutation> fmt::Display for Overlay<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Overlay(largest_batch_id={}", self.largest_batch_id)?;
        if self.mutation.is_valid() {
            write!(f, ", mutation={}", self.mutation)?;
        }
        write!(f, ")")
    }
}

/// Hashing strategy for overlays.
///
/// Usable directly (`OverlayHash.hash(&overlay)`) or as the `BuildHasher` of a
/// `HashMap`/`HashSet`. The result is deterministic and matches
/// [`Overlay::hash_value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayHash;

impl OverlayHash {
    /// Hash one overlay.
    pub fn hash<M: OverlayMutation>(&self, overlay: &Overlay<M>) -> u64 {
        self.hash_one(overlay)
    }
}

impl BuildHasher for OverlayHash {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        DefaultHasher::new()
    }
}
