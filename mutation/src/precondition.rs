//! Write preconditions.

use std::fmt;

/// A condition the server checks before applying a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precondition {
    /// No condition.
    #[default]
    None,
    /// The document must (or must not) exist.
    Exists(bool),
    /// The document must have been last updated at this time (microseconds since epoch).
    UpdateTime(i64),
}

impl Precondition {
    /// Returns true if this precondition imposes no condition.
    pub fn is_none(&self) -> bool {
        matches!(self, Precondition::None)
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::None => write!(f, "none"),
            Precondition::Exists(exists) => write!(f, "exists={}", exists),
            Precondition::UpdateTime(micros) => write!(f, "update_time={}", micros),
        }
    }
}
