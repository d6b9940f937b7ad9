//! Coercion error types.
//!
//! This module provides [`CoerceError`] for a single coercion failure and
//! [`CoerceErrors`] for accumulating failures across independent documents.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::Path;
use crate::value::Value;

/// A coercion failure with its location.
///
/// - **path**: where in the input the mismatch was found
/// - **message**: the rendered `expected <what>, got <value>` text
/// - **expected**: what the checker wanted, if it can say
/// - **got**: the offending value as rendered in the message
/// - **code**: machine-readable error code
///
/// `Display` prefixes the message with the rendered path, leaving the
/// prefix out entirely when the path renders empty.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{CoerceError, Path, Value};
///
/// let err = CoerceError::expected(
///     Path::root().push_field("replicas"),
///     "int",
///     &Value::from(true),
/// );
/// assert_eq!(err.to_string(), "replicas: expected int, got true");
///
/// let err = CoerceError::expected(Path::root(), "int", &Value::Null);
/// assert_eq!(err.to_string(), "expected int, got nothing");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoerceError {
    pub path: Path,
    pub message: String,
    pub expected: Option<String>,
    pub got: String,
    pub code: String,
}

impl CoerceError {
    /// Creates an `expected <expected>, got <value>` error.
    ///
    /// The code defaults to `invalid_type`; use `with_code` to refine it.
    pub fn expected(path: Path, expected: impl Into<String>, got: &Value) -> Self {
        let expected = expected.into();
        let got = got.to_string();
        Self {
            path,
            message: format!("expected {}, got {}", expected, got),
            expected: Some(expected),
            got,
            code: "invalid_type".to_string(),
        }
    }

    /// Creates an `unexpected value <value>` error, used when no single
    /// expectation can be named.
    pub fn unexpected(path: Path, got: &Value) -> Self {
        let got = got.to_string();
        Self {
            path,
            message: format!("unexpected value {}", got),
            expected: None,
            got,
            code: "no_match".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

impl Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.to_string();
        if path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", path, self.message)
        }
    }
}

impl std::error::Error for CoerceError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<CoerceError>();
    assert_sync::<CoerceError>();
};

/// A non-empty collection of coercion errors.
///
/// A single coercion stops at its first failure, so this type only shows
/// up when several independent documents are coerced as a batch (see
/// [`crate::batch`]). It implements `Semigroup` so batch results combine.
///
/// ```rust
/// use coerce_schema::{CoerceError, CoerceErrors, Path, Value};
/// use stillwater::prelude::*;
///
/// let a = CoerceErrors::single(CoerceError::expected(Path::from_index(0), "int", &Value::Null));
/// let b = CoerceErrors::single(CoerceError::expected(Path::from_index(3), "int", &Value::Null));
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoerceErrors(NonEmptyVec<CoerceError>);

impl CoerceErrors {
    /// Creates a collection holding one error.
    pub fn single(error: CoerceError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<CoerceError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let first = errors.next()?;
        Some(errors.fold(Self::single(first), |acc, e| acc.combine(Self::single(e))))
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &CoerceError> {
        self.0.iter()
    }

    /// Returns the first error.
    pub fn first(&self) -> &CoerceError {
        self.0.head()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &Path) -> Vec<&CoerceError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&CoerceError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Converts into a vec of errors.
    pub fn into_vec(self) -> Vec<CoerceError> {
        self.0.into_vec()
    }
}

impl Semigroup for CoerceErrors {
    fn combine(self, other: Self) -> Self {
        CoerceErrors(self.0.combine(other.0))
    }
}

impl Display for CoerceErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "coercion failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for CoerceErrors {}

impl IntoIterator for CoerceErrors {
    type Item = CoerceError;
    type IntoIter = std::vec::IntoIter<CoerceError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
