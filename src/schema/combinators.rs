//! Checker combinators.
//!
//! [`OneOfChecker`] tries its alternatives in declaration order and keeps the
//! first one that accepts the value.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::traits::{Checker, DynChecker};

/// Accepts a value if any alternative does, returning the first success.
///
/// When every alternative fails, their individual errors are dropped in
/// favour of a single `unexpected value` error at the current path.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{shared, Checker, Path, Schema, Value};
///
/// let schema = Schema::one_of(vec![shared(Schema::constant("foo")), shared(Schema::constant(42))]);
/// assert_eq!(schema.coerce_root(&Value::from(42)), Ok(Value::from(42)));
///
/// let err = schema.coerce(&Value::from("bar"), &Path::from_field("mode")).unwrap_err();
/// assert_eq!(err.to_string(), r#"mode: unexpected value "bar""#);
/// ```
#[derive(Clone)]
pub struct OneOfChecker {
    alternatives: Vec<DynChecker>,
}

impl OneOfChecker {
    pub fn new(alternatives: Vec<DynChecker>) -> Self {
        Self { alternatives }
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl Checker for OneOfChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        self.alternatives
            .iter()
            .find_map(|alternative| alternative.coerce(value, path).ok())
            .ok_or_else(|| CoerceError::unexpected(path.clone(), value))
    }
}
