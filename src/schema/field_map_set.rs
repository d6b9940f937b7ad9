//! Selector-based union of field maps.
//!
//! This module provides [`FieldMapSet`], which picks one of several
//! [`FieldMap`] variants by reading a designated selector field from the
//! raw input and hands the whole value to that variant.

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::Value;

use super::field_map::FieldMap;
use super::traits::Checker;

/// A discriminated union of field maps.
///
/// Each variant pins the selector field to a distinct constant. The raw
/// selector value is compared against those constants in declaration order
/// and the first matching variant coerces the entire input, reporting its
/// own errors unchanged. Variants whose selector field is not a constant
/// never match.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Defaults, Fields, Path, Schema, Value};
///
/// let http = Schema::field_map(
///     Fields::new()
///         .field("type", Schema::constant("http"))
///         .field("port", Schema::int()),
///     Defaults::new(),
/// );
/// let unix = Schema::field_map(
///     Fields::new()
///         .field("type", Schema::constant("unix"))
///         .field("socket", Schema::string()),
///     Defaults::new(),
/// );
/// let listener = Schema::field_map_set("type", vec![http, unix]);
///
/// let out = listener
///     .coerce_root(&Value::map([("type", "unix"), ("socket", "/run/app.sock")]))
///     .unwrap();
/// assert_eq!(out.get("socket"), Some(&Value::from("/run/app.sock")));
///
/// let err = listener
///     .coerce(&Value::map([("type", "tcp")]), &Path::from_field("listen"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), r#"listen.type: expected supported selector, got "tcp""#);
/// ```
#[derive(Clone)]
pub struct FieldMapSet {
    selector: String,
    variants: Vec<FieldMap>,
}

impl FieldMapSet {
    pub fn new(selector: impl Into<String>, variants: Vec<FieldMap>) -> Self {
        Self {
            selector: selector.into(),
            variants,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn variants(&self) -> &[FieldMap] {
        &self.variants
    }

    /// Returns the variant whose pinned selector equals `raw`, with its index.
    fn select(&self, raw: &Value) -> Option<(usize, &FieldMap)> {
        self.variants
            .iter()
            .enumerate()
            .find(|(_, variant)| variant.pinned(&self.selector) == Some(raw))
    }

    fn unsupported(&self, path: &Path, got: &Value) -> CoerceError {
        CoerceError::expected(
            path.push_field(self.selector.as_str()),
            "supported selector",
            got,
        )
        .with_code("unsupported_selector")
    }
}

impl Checker for FieldMapSet {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let entries = match value {
            Value::Map(entries) => entries,
            other => return Err(CoerceError::expected(path.clone(), "map", other)),
        };

        let raw = entries
            .get(&Value::String(self.selector.clone()))
            .ok_or_else(|| self.unsupported(path, &Value::Null))?;

        match self.select(raw) {
            Some((index, variant)) => {
                tracing::trace!(
                    selector = %self.selector,
                    value = %raw,
                    variant = index,
                    path = %path,
                    "dispatching to field map variant"
                );
                variant.coerce(value, path)
            }
            None => Err(self.unsupported(path, raw)),
        }
    }
}
