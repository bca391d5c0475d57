//! Capabilities an overlay needs from the mutation it wraps.

use docsync_core::DocumentKey;
use docsync_mutation::Mutation;
use std::fmt;
use std::hash::Hash;

/// A squashed mutation that can sit inside an [`Overlay`](crate::Overlay).
///
/// `Default` must produce the invalid placeholder. Equality, hashing and the
/// printable form of an overlay are built from these.
pub trait OverlayMutation: Default + Clone + Eq + Hash + fmt::Display {
    /// Returns false for the invalid placeholder.
    fn is_valid(&self) -> bool;

    /// The target document, or `None` when invalid.
    fn try_key(&self) -> Option<&DocumentKey>;

    /// The target document.
    ///
    /// # Panics
    ///
    /// Panics if the mutation is invalid.
    fn key(&self) -> &DocumentKey {
        match self.try_key() {
            Some(key) => key,
            None => panic!("key() called on an invalid mutation"),
        }
    }
}

impl OverlayMutation for Mutation {
    fn is_valid(&self) -> bool {
        Mutation::is_valid(self)
    }

    fn try_key(&self) -> Option<&DocumentKey> {
        Mutation::try_key(self).ok()
    }

    fn key(&self) -> &DocumentKey {
        Mutation::key(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
    struct KeyOnly(Option<DocumentKey>);

    impl fmt::Display for KeyOnly {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.0 {
                Some(key) => write!(f, "KeyOnly({})", key),
                None => write!(f, "KeyOnly(invalid)"),
            }
        }
    }

    impl OverlayMutation for KeyOnly {
        fn is_valid(&self) -> bool {
            self.0.is_some()
        }

        fn try_key(&self) -> Option<&DocumentKey> {
            self.0.as_ref()
        }
    }

    #[test]
    fn test_provided_key_reads_try_key() {
        // GIVEN
        let key = DocumentKey::from_path_string("col/doc").unwrap();
        let mutation = KeyOnly(Some(key.clone()));

        // WHEN/THEN
        assert_eq!(OverlayMutation::key(&mutation), &key);
    }

    #[test]
    #[should_panic(expected = "invalid mutation")]
    fn test_provided_key_panics_when_invalid() {
        OverlayMutation::key(&KeyOnly::default());
    }

    #[test]
    fn test_mutation_capabilities() {
        let key = DocumentKey::from_path_string("col/doc").unwrap();
        let mutation = Mutation::delete(key.clone(), Default::default());

        assert!(OverlayMutation::is_valid(&mutation));
        assert_eq!(OverlayMutation::try_key(&mutation), Some(&key));
        assert!(!OverlayMutation::is_valid(&Mutation::default()));
        assert_eq!(OverlayMutation::try_key(&Mutation::default()), None);
    }
}
