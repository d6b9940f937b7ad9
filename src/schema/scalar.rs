//! Terminal checkers for constants, booleans and unconstrained values.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::traits::Checker;

/// Accepts exactly one value and passes it through unchanged.
///
/// Constants also pin the field they guard, which is how
/// [`FieldMapSet`](super::FieldMapSet) reads a variant's discriminator.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Path, Schema, Value};
///
/// let schema = Schema::constant("v1");
/// assert!(schema.coerce_root(&Value::from("v1")).is_ok());
///
/// let err = schema.coerce(&Value::from(42), &Path::from_field("version")).unwrap_err();
/// assert_eq!(err.to_string(), r#"version: expected "v1", got 42"#);
/// ```
#[derive(Debug, Clone)]
pub struct ConstChecker {
    value: Value,
}

impl ConstChecker {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Checker for ConstChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        if *value == self.value {
            return Ok(self.value.clone());
        }
        Err(
            CoerceError::expected(path.clone(), self.value.to_string(), value)
                .with_code("const_mismatch"),
        )
    }

    fn pinned_value(&self) -> Option<&Value> {
        Some(&self.value)
    }
}

/// Accepts anything, including Null.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyChecker;

impl Checker for AnyChecker {
    fn coerce(&self, value: &Value, _path: &Path) -> Result<Value, CoerceError> {
        Ok(value.clone())
    }
}

/// Accepts booleans only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolChecker;

impl Checker for BoolChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(CoerceError::expected(path.clone(), "bool", other)),
        }
    }
}
