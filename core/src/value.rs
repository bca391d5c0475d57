//! Field values stored in documents.
//!
//! A document's contents are an `ObjectValue`: an ordered map from field
//! names to `FieldValue`s. Maps nest, so a `FieldPath` can reach any leaf.

use crate::{CoreResult, FieldPath};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that can be stored in a document field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Explicit null.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    Array(Vec<FieldValue>),
    /// Nested map.
    Map(ObjectValue),
}

impl FieldValue {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Get as boolean if this is a Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Double value.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            FieldValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the nested map if this is a Map value.
    pub fn as_map(&self) -> Option<&ObjectValue> {
        match self {
            FieldValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Double(_) => "Double",
            FieldValue::String(_) => "String",
            FieldValue::Array(_) => "Array",
            FieldValue::Map(_) => "Map",
        }
    }
}

// Doubles compare by bit pattern so that equality is total and agrees with Hash.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a == b,
            (FieldValue::Double(a), FieldValue::Double(b)) => a.to_bits() == b.to_bits(),
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Array(a), FieldValue::Array(b)) => a == b,
            (FieldValue::Map(a), FieldValue::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            FieldValue::Null => {}
            FieldValue::Boolean(b) => b.hash(state),
            FieldValue::Integer(i) => i.hash(state),
            FieldValue::Double(d) => d.to_bits().hash(state),
            FieldValue::String(s) => s.hash(state),
            FieldValue::Array(items) => items.hash(state),
            FieldValue::Map(m) => m.hash(state),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Double(d) => write!(f, "{}", d),
            FieldValue::String(s) => write!(f, "\"{}\"", s),
            FieldValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            FieldValue::Map(m) => write!(f, "{}", m),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Integer(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(d: f64) -> Self {
        FieldValue::Double(d)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<ObjectValue> for FieldValue {
    fn from(m: ObjectValue) -> Self {
        FieldValue::Map(m)
    }
}

/// The contents of a document: field names mapped to values.
///
/// Fields are kept sorted so hashing and printing are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    fields: BTreeMap<String, FieldValue>,
}

impl ObjectValue {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over top-level fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Insert a top-level field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up the value at `path`, descending through nested maps.
    pub fn get(&self, path: &FieldPath) -> Option<&FieldValue> {
        let (first, rest) = path.segments().split_first()?;
        let mut current = self.fields.get(first)?;
        for segment in rest {
            current = current.as_map()?.fields.get(segment)?;
        }
        Some(current)
    }

    /// Set the value at `path`. Intermediate maps are created, and
    /// non-map values in the way are replaced.
    pub fn set(&mut self, path: &FieldPath, value: FieldValue) {
        let Some((last, parents)) = path.segments().split_last() else {
            return;
        };
        let mut current = &mut self.fields;
        for segment in parents {
            let entry = current
                .entry(segment.clone())
                .or_insert_with(|| FieldValue::Map(ObjectValue::new()));
            if !matches!(entry, FieldValue::Map(_)) {
                *entry = FieldValue::Map(ObjectValue::new());
            }
            let FieldValue::Map(map) = entry else {
                return;
            };
            current = &mut map.fields;
        }
        current.insert(last.clone(), value);
    }

    /// Remove the value at `path`, returning it if present.
    pub fn delete(&mut self, path: &FieldPath) -> Option<FieldValue> {
        let (last, parents) = path.segments().split_last()?;
        let mut current = &mut self.fields;
        for segment in parents {
            match current.get_mut(segment)? {
                FieldValue::Map(map) => current = &mut map.fields,
                _ => return None,
            }
        }
        current.remove(last)
    }

    /// Paths of every leaf field. A nested empty map counts as a leaf.
    ///
    /// Fails with `CoreError::InvalidFieldPath` if a field name cannot be
    /// addressed by a `FieldPath` (empty, or containing `.`).
    pub fn field_mask(&self) -> CoreResult<Vec<FieldPath>> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(&mut Vec::new(), &mut paths)?;
        Ok(paths)
    }

    fn collect_leaf_paths(
        &self,
        prefix: &mut Vec<String>,
        out: &mut Vec<FieldPath>,
    ) -> CoreResult<()> {
        for (name, value) in &self.fields {
            prefix.push(name.clone());
            match value {
                FieldValue::Map(nested) if !nested.is_empty() => {
                    nested.collect_leaf_paths(prefix, out)?;
                }
                _ => out.push(FieldPath::from_segments(prefix.iter().cloned())?),
            }
            prefix.pop();
        }
        Ok(())
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ObjectValue {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Helper macro to create document contents.
#[macro_export]
macro_rules! fields {
    () => {
        $crate::ObjectValue::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut object = $crate::ObjectValue::new();
            $(
                object.insert($key, $crate::FieldValue::from($value));
            )+
            object
        }
    };
}
