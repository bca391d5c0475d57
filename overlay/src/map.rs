//! Keyed collections of overlays.

use crate::{Overlay, OverlayHash};
use docsync_core::DocumentKey;
use docsync_mutation::Mutation;
use std::collections::{HashMap, HashSet};

/// Overlays indexed by the document they apply to.
pub type OverlayByDocumentKeyMap<M = Mutation> = HashMap<DocumentKey, Overlay<M>>;

/// A set of overlays hashed with [`OverlayHash`].
pub type OverlaySet<M = Mutation> = HashSet<Overlay<M>, OverlayHash>;
