//! Field masks for patch writes.

use docsync_core::FieldPath;
use std::collections::BTreeSet;
use std::fmt;

/// The set of fields a patch write touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldMask {
    paths: BTreeSet<FieldPath>,
}

impl FieldMask {
    /// Create a mask from field paths. Duplicates collapse.
    pub fn new(paths: impl IntoIterator<Item = FieldPath>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    /// Number of paths in the mask.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the mask touches no fields.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over paths in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldPath> {
        self.paths.iter()
    }

    /// Returns true if some path in the mask equals or contains `path`.
    pub fn covers(&self, path: &FieldPath) -> bool {
        self.paths.iter().any(|p| p.is_prefix_of(path))
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", path)?;
        }
        write!(f, "}}")
    }
}
