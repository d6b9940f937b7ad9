//! The checker protocol.
//!
//! This module provides the [`Checker`] trait that every schema node
//! implements, so checkers of different kinds compose into one tree.

use std::sync::Arc;

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

/// A rule that validates one shape of value and produces its normalized form.
///
/// `coerce` never mutates its input and keeps no state between calls, so
/// one checker can be shared by any number of threads. The `Send + Sync`
/// bounds let checkers live in `Arc<dyn Checker>` trees.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Path, Schema, Value};
///
/// let schema = Schema::list(Schema::int());
/// let out = schema.coerce(&Value::list([1i8, 2i8]), &Path::root()).unwrap();
/// assert_eq!(out, Value::list([1i64, 2i64]));
///
/// let err = schema
///     .coerce(&Value::list([Value::from(1), Value::from(true)]), &Path::from_field("ports"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "ports[1]: expected int, got true");
/// ```
pub trait Checker: Send + Sync {
    /// Coerces `value`, found at `path`, into its normalized form.
    ///
    /// Returns the first mismatch found anywhere inside `value`.
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError>;

    /// Coerces a value at the schema root.
    fn coerce_root(&self, value: &Value) -> Result<Value, CoerceError> {
        self.coerce(value, &Path::root())
    }

    /// The single value this checker pins its input to, if any.
    ///
    /// Only constant checkers report one; the selector-based union uses it
    /// to read each variant's discriminator.
    fn pinned_value(&self) -> Option<&Value> {
        None
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn pinned_value(&self) -> Option<&Value> {
        (**self).pinned_value()
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn pinned_value(&self) -> Option<&Value> {
        (**self).pinned_value()
    }
}

impl<C: Checker + ?Sized> Checker for &C {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        (**self).coerce(value, path)
    }

    fn pinned_value(&self) -> Option<&Value> {
        (**self).pinned_value()
    }
}

/// Shared, type-erased checker used inside composite schemas.
pub type DynChecker = Arc<dyn Checker>;

/// Erases a concrete checker into a [`DynChecker`].
///
/// ```rust
/// use coerce_schema::{shared, Schema};
///
/// let alternatives = vec![shared(Schema::int()), shared(Schema::string())];
/// let schema = Schema::one_of(alternatives);
/// ```
pub fn shared<C: Checker + 'static>(checker: C) -> DynChecker {
    Arc::new(checker)
}
