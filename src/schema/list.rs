//! List checker.
//!
//! This module provides [`ListChecker`], which coerces every element of an
//! ordered sequence with the same element checker.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::traits::{Checker, DynChecker};

/// Accepts a list whose elements all satisfy the element checker.
///
/// Each element is checked at `path[i]`. The first failing element aborts
/// the coercion and its error is returned unchanged.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Path, Schema, Value};
///
/// let schema = Schema::list(Schema::string());
/// assert!(schema.coerce_root(&Value::list(["a", "b"])).is_ok());
///
/// let err = schema.coerce(&Value::from(42), &Path::from_field("tags")).unwrap_err();
/// assert_eq!(err.to_string(), "tags: expected list, got 42");
/// ```
#[derive(Clone)]
pub struct ListChecker {
    elem: DynChecker,
}

impl ListChecker {
    pub fn new(elem: DynChecker) -> Self {
        Self { elem }
    }
}

impl Checker for ListChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let items = match value {
            Value::List(items) => items,
            other => return Err(CoerceError::expected(path.clone(), "list", other)),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.elem.coerce(item, &path.push_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }
}
