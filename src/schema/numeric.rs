//! Numeric checkers.
//!
//! Every integer width has already been widened to [`Value::Int`] on its way
//! into the value model, so [`IntChecker`] only has to reject everything
//! else. [`FloatChecker`] additionally widens integers to 64-bit floats.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::traits::Checker;

/// Accepts integers of any width and yields a 64-bit signed integer.
///
/// Floats are rejected even when they hold a whole number.
///
/// ```rust
/// use coerce_schema::{Checker, Schema, Value};
///
/// let out = Schema::int().coerce_root(&Value::from(42i8)).unwrap();
/// assert_eq!(out, Value::Int(42));
/// assert!(Schema::int().coerce_root(&Value::from(1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IntChecker;

impl Checker for IntChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::Int(i) => Ok(Value::Int(*i)),
            other => Err(CoerceError::expected(path.clone(), "int", other)),
        }
    }
}

/// Accepts floats and integers and yields a 64-bit float.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatChecker;

impl Checker for FloatChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::Float(x) => Ok(Value::Float(*x)),
            Value::Int(i) => Ok(Value::Float(*i as f64)),
            other => Err(CoerceError::expected(path.clone(), "float", other)),
        }
    }
}
