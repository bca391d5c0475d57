//! Path types.
//!
//! A `ResourcePath` addresses collections and documents (`rooms/eros/messages/1`).
//! A `FieldPath` addresses a field inside a document (`author.name`).

use crate::{CoreError, CoreResult};
use std::fmt;

/// Slash-separated path to a collection or document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Create a path from individual segments. Segments must be non-empty
    /// and must not contain `/`.
    pub fn from_segments<I, S>(segments: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| Self::validate_segment(segment.into()))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self { segments })
    }

    /// Parse a slash-separated path. Empty segments are skipped, so
    /// `"/a//b/"` and `"a/b"` are the same path.
    pub fn from_string(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    fn validate_segment(segment: String) -> CoreResult<String> {
        if segment.is_empty() || segment.contains('/') {
            return Err(CoreError::invalid_path_segment(segment));
        }
        Ok(segment)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, if any.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Return a new path with `segment` appended.
    pub fn append(&self, segment: impl Into<String>) -> CoreResult<Self> {
        let mut segments = self.segments.clone();
        segments.push(Self::validate_segment(segment.into())?);
        Ok(Self { segments })
    }

    /// Return a new path without the final segment.
    pub fn pop_last(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Returns true if every segment of `self` starts `other`.
    pub fn is_prefix_of(&self, other: &ResourcePath) -> bool {
        other.segments.starts_with(&self.segments)
    }

    /// Canonical slash-separated form.
    pub fn canonical_string(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Dot-separated path to a field within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Create a field path from segments. Rejects empty input, and segments
    /// that are empty or contain `.`.
    pub fn from_segments<I, S>(segments: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let malformed = |s: &String| s.is_empty() || s.contains('.');
        if segments.is_empty() || segments.iter().any(malformed) {
            return Err(CoreError::invalid_field_path(segments.join(".")));
        }
        Ok(Self { segments })
    }

    /// Parse a dot-separated field path such as `"author.name"`.
    pub fn from_dot_separated(path: &str) -> CoreResult<Self> {
        Self::from_segments(path.split('.'))
            .map_err(|_| CoreError::invalid_field_path(path))
    }

    /// All segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The first segment.
    pub fn first_segment(&self) -> &str {
        // Construction guarantees at least one segment.
        &self.segments[0]
    }

    /// Returns true if `self` equals `other` or is a proper prefix of it.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
