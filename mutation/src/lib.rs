//! docsync Mutation
//!
//! Local writes against a single document (SET/PATCH/DELETE/VERIFY).
//!
//! Responsibilities:
//! - Represent a pending write and its target key
//! - Represent the "no mutation" placeholder (the invalid mutation)
//! - Provide equality, hashing and a printable form
//!
//! # Module Structure
//!
//! - `mutation` - The Mutation handle and its kinds
//! - `precondition` - Conditions a write is guarded by
//! - `mask` - Field masks for patch writes
//! - `error` - Error types for mutation failures

mod error;
mod mask;
mod mutation;
mod precondition;

pub use error::{MutationError, MutationResult};
pub use mask::FieldMask;
pub use mutation::{Mutation, MutationKind};
pub use precondition::Precondition;
