//! Location paths for reporting where a coercion failed.
//!
//! This module provides [`Path`] and [`PathSegment`]. Checkers extend the
//! path they were given before delegating to a child checker, so an error
//! raised deep inside a value carries its full location.

use std::fmt::{self, Display, Write};

/// A segment of a location path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A map key, rendered dotted (e.g., `.name`).
    Field(String),
    /// A list index, rendered bracketed (e.g., `[0]`).
    Index(usize),
    /// An explicit bracketed key (e.g., `[web/0]`).
    Key(String),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    /// Creates a new bracketed key segment.
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }
}

/// An immutable path to a value inside a nested structure.
///
/// A dotted segment is joined with `.` only when something has already
/// been rendered, so the root segment never starts with a separator.
/// Bracketed segments are always appended as-is.
///
/// # Example
///
/// ```rust
/// use coerce_schema::Path;
///
/// let path = Path::root()
///     .push_field("services")
///     .push_index(0)
///     .push_field("name");
///
/// assert_eq!(path.to_string(), "services[0].name");
/// assert_eq!(Path::root().push_index(2).push_field("a").to_string(), "[2].a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path representing the schema root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Field(name.into()))
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    /// Returns a new path with a bracketed key segment appended.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        self.push(PathSegment::Key(key.into()))
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments, root first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None if this is root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(name);
                }
                PathSegment::Index(idx) => write!(rendered, "[{}]", idx)?,
                PathSegment::Key(key) => write!(rendered, "[{}]", key)?,
            }
        }
        f.write_str(&rendered)
    }
}
