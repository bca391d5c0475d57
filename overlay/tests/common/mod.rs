//! Shared helpers for overlay integration tests.

use docsync_core::{fields, DocumentKey};
use docsync_mutation::Mutation;
use std::fmt::Debug;

pub const SAMPLE_BATCH_ID: i32 = 123;

/// A patch of `{key: "value"}` against `path`.
pub fn sample_mutation(path: &str) -> Mutation {
    let key = DocumentKey::from_path_string(path).expect("test path is a document path");
    Mutation::patch_fields(key, fields! { "key" => "value" })
        .expect("test fields are addressable")
}

/// Checks equality and hashing across groups of values.
///
/// Every value must equal itself and every member of its own group, must
/// differ from every member of other groups, and equal values must agree
/// under every registered hash function.
pub struct EqualsTester<T> {
    groups: Vec<Vec<T>>,
    hashers: Vec<(&'static str, Box<dyn Fn(&T) -> u64>)>,
}

impl<T: PartialEq + Debug> EqualsTester<T> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            hashers: Vec::new(),
        }
    }

    pub fn add_equality_group(mut self, group: Vec<T>) -> Self {
        self.groups.push(group);
        self
    }

    pub fn add_hasher(
        mut self,
        name: &'static str,
        hasher: impl Fn(&T) -> u64 + 'static,
    ) -> Self {
        self.hashers.push((name, Box::new(hasher)));
        self
    }

    pub fn test_equals(&self) {
        for (gi, group) in self.groups.iter().enumerate() {
            for a in group {
                for b in group {
                    assert_eq!(a, b, "group {gi} members differ");
                    for (name, hasher) in &self.hashers {
                        assert_eq!(
                            hasher(a),
                            hasher(b),
                            "{name} differs within group {gi}: {a:?} vs {b:?}"
                        );
                    }
                }
            }
            for (gj, other) in self.groups.iter().enumerate() {
                if gi == gj {
                    continue;
                }
                for a in group {
                    for b in other {
                        assert_ne!(a, b, "groups {gi} and {gj} share a value");
                    }
                }
            }
        }
    }
}
