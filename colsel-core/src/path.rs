//! Column paths
//!
//! A `ColumnPath` locates a column from some root (the table, or a column
//! group when paths have been made relative). Segments are stored verbatim;
//! the dotted string form is only a parsing/display convenience.

use crate::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default separator for the dotted string form (`"group.child"`).
pub const DEFAULT_PATH_SEPARATOR: char = '.';

/// Ordered list of name segments locating a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnPath(Vec<String>);

impl ColumnPath {
    /// Create a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The empty path (the root of a table or group).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A one-segment path. The name is taken literally, separators included.
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Parse a dotted path such as `"address.city"`.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        Self::parse_with(input, DEFAULT_PATH_SEPARATOR)
    }

    /// Parse a path using a custom segment separator.
    ///
    /// Empty input and empty segments (`"a..b"`, `".a"`, `"a."`) are rejected.
    pub fn parse_with(input: &str, separator: char) -> Result<Self, PathError> {
        if input.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = Vec::new();
        for (position, segment) in input.split(separator).enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment {
                    input: input.to_string(),
                    position,
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, i.e. the column's own name.
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of the enclosing group, `None` for the root path.
    pub fn parent(&self) -> Option<ColumnPath> {
        match self.0.split_last() {
            Some((_, rest)) => Some(Self(rest.to_vec())),
            None => None,
        }
    }

    /// Extend this path by one segment.
    pub fn child(&self, name: impl Into<String>) -> ColumnPath {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(name.into());
        Self(segments)
    }

    /// Concatenate `other` onto this path.
    pub fn join(&self, other: &ColumnPath) -> ColumnPath {
        let mut segments = Vec::with_capacity(self.0.len() + other.0.len());
        segments.extend_from_slice(&self.0);
        segments.extend_from_slice(&other.0);
        Self(segments)
    }

    pub fn starts_with(&self, prefix: &ColumnPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Remove `prefix` from the front of this path, if present.
    pub fn strip_prefix(&self, prefix: &ColumnPath) -> Option<ColumnPath> {
        self.0
            .strip_prefix(prefix.0.as_slice())
            .map(|rest| Self(rest.to_vec()))
    }

    /// Render with a custom separator.
    pub fn to_string_with(&self, separator: char) -> String {
        let mut buf = [0u8; 4];
        self.0.join(separator.encode_utf8(&mut buf))
    }
}

impl fmt::Display for ColumnPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_PATH_SEPARATOR))
    }
}

impl FromStr for ColumnPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<String>> for ColumnPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<const N: usize> From<[&str; N]> for ColumnPath {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

// =============================================================================
// TESTS
// =============================================================================
