//! docsync Core Types
//!
//! This crate provides the foundational types shared by the sync engine:
//! - Paths (ResourcePath, FieldPath)
//! - Document identity (DocumentKey)
//! - Write batch identifiers (BatchId)
//! - Field values (FieldValue, ObjectValue)
//! - Common error types

mod batch;
mod error;
mod key;
mod path;
mod value;

pub use batch::*;
pub use error::*;
pub use key::*;
pub use path::*;
pub use value::*;
