//! String checkers.
//!
//! This module provides [`StringChecker`] and [`SimpleRegexpChecker`], which
//! accepts strings that parse as regular expressions without compiling them
//! into anything the caller keeps.

use regex::Regex;

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::traits::Checker;

/// Accepts strings only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringChecker;

impl Checker for StringChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(CoerceError::expected(path.clone(), "string", other)),
        }
    }
}

/// Accepts strings holding a valid regular expression.
///
/// Only the syntax is checked; the original pattern text is returned.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Path, Schema, Value};
///
/// let schema = Schema::simple_regexp();
/// assert_eq!(schema.coerce_root(&Value::from("[0-9]+")), Ok(Value::from("[0-9]+")));
///
/// let err = schema.coerce(&Value::from("["), &Path::from_field("match")).unwrap_err();
/// assert_eq!(err.to_string(), r#"match: expected valid regexp, got "[""#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRegexpChecker;

impl Checker for SimpleRegexpChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let pattern = match value {
            Value::String(s) => s,
            other => return Err(CoerceError::expected(path.clone(), "regexp string", other)),
        };
        match Regex::new(pattern) {
            Ok(_) => Ok(Value::String(pattern.clone())),
            Err(_) => Err(CoerceError::expected(path.clone(), "valid regexp", value)
                .with_code("invalid_regexp")),
        }
    }
}
