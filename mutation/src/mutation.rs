//! The Mutation handle.

use crate::{FieldMask, MutationError, MutationResult, Precondition};
use docsync_core::{DocumentKey, ObjectValue};
use std::fmt;
use std::sync::Arc;

/// What a mutation does to its document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// Replace the whole document with `value`.
    Set { value: ObjectValue },
    /// Overwrite only the fields in `mask`, taking new values from `value`.
    Patch { value: ObjectValue, mask: FieldMask },
    /// Remove the document.
    Delete,
    /// Check the precondition without writing.
    Verify,
}

impl MutationKind {
    /// Short name used in the printable form.
    pub fn type_name(&self) -> &'static str {
        match self {
            MutationKind::Set { .. } => "SetMutation",
            MutationKind::Patch { .. } => "PatchMutation",
            MutationKind::Delete => "DeleteMutation",
            MutationKind::Verify => "VerifyMutation",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct Rep {
    key: DocumentKey,
    kind: MutationKind,
    precondition: Precondition,
}

/// A single local write against one document.
///
/// `Mutation::default()` is the invalid mutation: a placeholder with no key
/// and no effect. Every named constructor produces a valid mutation.
/// Cloning is cheap; clones share the same immutable contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Mutation {
    rep: Option<Arc<Rep>>,
}

impl Mutation {
    fn from_parts(key: DocumentKey, kind: MutationKind, precondition: Precondition) -> Self {
        Self {
            rep: Some(Arc::new(Rep {
                key,
                kind,
                precondition,
            })),
        }
    }

    /// A write that replaces the document's contents.
    pub fn set(key: DocumentKey, value: ObjectValue, precondition: Precondition) -> Self {
        Self::from_parts(key, MutationKind::Set { value }, precondition)
    }

    /// A write that overwrites only the masked fields.
    pub fn patch(
        key: DocumentKey,
        value: ObjectValue,
        mask: FieldMask,
        precondition: Precondition,
    ) -> Self {
        Self::from_parts(key, MutationKind::Patch { value, mask }, precondition)
    }

    /// A patch of every leaf field in `value`, guarded by the document existing.
    ///
    /// Fails if some field name in `value` cannot be addressed by a field path.
    pub fn patch_fields(key: DocumentKey, value: ObjectValue) -> MutationResult<Self> {
        let mask = FieldMask::new(value.field_mask()?);
        Ok(Self::patch(key, value, mask, Precondition::Exists(true)))
    }

    /// A write that deletes the document.
    pub fn delete(key: DocumentKey, precondition: Precondition) -> Self {
        Self::from_parts(key, MutationKind::Delete, precondition)
    }

    /// A check-only write.
    pub fn verify(key: DocumentKey, precondition: Precondition) -> Self {
        Self::from_parts(key, MutationKind::Verify, precondition)
    }

    /// Returns false for the invalid (default) mutation.
    pub fn is_valid(&self) -> bool {
        self.rep.is_some()
    }

    /// The key of the document this mutation targets.
    ///
    /// # Panics
    ///
    /// Panics if the mutation is invalid. Use [`Mutation::try_key`] when
    /// validity is not already known.
    pub fn key(&self) -> &DocumentKey {
        match &self.rep {
            Some(rep) => &rep.key,
            None => panic!("key() called on an invalid mutation"),
        }
    }

    /// The target key, or `MutationError::Invalid` for the invalid mutation.
    pub fn try_key(&self) -> MutationResult<&DocumentKey> {
        self.rep
            .as_deref()
            .map(|rep| &rep.key)
            .ok_or(MutationError::Invalid)
    }

    /// What the mutation does, if valid.
    pub fn kind(&self) -> Option<&MutationKind> {
        self.rep.as_deref().map(|rep| &rep.kind)
    }

    /// The write's precondition, if valid.
    pub fn precondition(&self) -> Option<Precondition> {
        self.rep.as_deref().map(|rep| rep.precondition)
    }

    /// Short name of the mutation's kind; `"Mutation"` when invalid.
    pub fn type_name(&self) -> &'static str {
        self.kind().map_or("Mutation", MutationKind::type_name)
    }

    /// Move the mutation out, leaving `self` invalid.
    pub fn take(&mut self) -> Mutation {
        std::mem::take(self)
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(rep) = self.rep.as_deref() else {
            return write!(f, "Mutation(invalid)");
        };
        write!(
            f,
            "{}(key={}, precondition={}",
            rep.kind.type_name(),
            rep.key,
            rep.precondition
        )?;
        match &rep.kind {
            MutationKind::Set { value } => write!(f, ", value={}", value)?,
            MutationKind::Patch { value, mask } => {
                write!(f, ", value={}, mask={}", value, mask)?
            }
            MutationKind::Delete | MutationKind::Verify => {}
        }
        write!(f, ")")
    }
}
