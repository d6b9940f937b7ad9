//! Map checkers.
//!
//! This module provides [`MapChecker`] for mappings with arbitrary keys and
//! [`StringMapChecker`] for mappings whose keys must be strings.
//!
//! Key and value errors are reported at different depths: a key that fails
//! its checker is reported at the map's own path, while a value that fails
//! is reported at `path.<coerced key>`.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::{Value, ValueMap};

use super::string::StringChecker;
use super::traits::{shared, Checker, DynChecker};

/// Accepts a mapping whose keys and values satisfy their checkers.
///
/// Entries are visited in the input's insertion order; the first failure
/// aborts the coercion.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Path, Schema, Value};
///
/// let schema = Schema::map(Schema::string(), Schema::int());
/// let out = schema.coerce_root(&Value::map([("a", 1i8)])).unwrap();
/// assert_eq!(out, Value::map([("a", 1i64)]));
///
/// // Key failures stay at the map's own path.
/// let err = schema.coerce(&Value::map([(1, 1)]), &Path::from_field("env")).unwrap_err();
/// assert_eq!(err.to_string(), "env: expected string, got 1");
///
/// // Value failures extend the path with the key.
/// let err = schema.coerce_root(&Value::map([("a", true)])).unwrap_err();
/// assert_eq!(err.to_string(), "a: expected int, got true");
/// ```
#[derive(Clone)]
pub struct MapChecker {
    key: DynChecker,
    value: DynChecker,
}

impl MapChecker {
    pub fn new(key: DynChecker, value: DynChecker) -> Self {
        Self { key, value }
    }
}

impl Checker for MapChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let entries = match value {
            Value::Map(entries) => entries,
            other => return Err(CoerceError::expected(path.clone(), "map", other)),
        };

        let mut out = ValueMap::with_capacity(entries.len());
        for (k, v) in entries {
            let key = self.key.coerce(k, path)?;
            let coerced = self.value.coerce(v, &path.push_field(key.key_text()))?;
            out.insert(key, coerced);
        }
        Ok(Value::Map(out))
    }
}

/// A [`MapChecker`] whose key checker is fixed to strings.
#[derive(Clone)]
pub struct StringMapChecker {
    inner: MapChecker,
}

impl StringMapChecker {
    pub fn new(value: DynChecker) -> Self {
        Self {
            inner: MapChecker::new(shared(StringChecker), value),
        }
    }
}

impl Checker for StringMapChecker {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        self.inner.coerce(value, path)
    }
}
