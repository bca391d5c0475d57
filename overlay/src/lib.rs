//! docsync Overlay
//!
//! The net locally-pending write for a single document.
//!
//! An `Overlay` pairs the highest-numbered pending write batch that touches a
//! document with the one mutation that summarises every pending batch on that
//! document. Overlay resolution and view recalculation read overlays through
//! this crate and rely on its equality, hashing and printable form.

mod error;
mod map;
mod overlay;
mod traits;

pub use error::{OverlayError, OverlayResult};
pub use map::{OverlayByDocumentKeyMap, OverlaySet};
pub use overlay::{Overlay, OverlayHash};
pub use traits::OverlayMutation;
