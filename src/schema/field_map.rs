//! Field-map checker.
//!
//! This module provides [`FieldMap`] for validating string-keyed mappings
//! against a fixed set of named fields, with per-field defaults and a
//! lenient or strict policy for keys the schema does not declare.

use indexmap::IndexMap;

use crate::error::CoerceError;
use crate::path::Path;
use crate::value::{Value, ValueMap};

use super::traits::{shared, Checker, DynChecker};

/// The expected fields of a field map, in declaration order.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Fields, Schema};
///
/// let fields = Fields::new()
///     .field("name", Schema::string())
///     .field("replicas", Schema::int());
/// assert_eq!(fields.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Fields {
    checkers: IndexMap<String, DynChecker>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Redeclaring a name replaces its checker but keeps
    /// its original position.
    pub fn field<C>(mut self, name: impl Into<String>, checker: C) -> Self
    where
        C: Checker + 'static,
    {
        self.checkers.insert(name.into(), shared(checker));
        self
    }

    /// Declares a field with an already shared checker.
    pub fn shared_field(mut self, name: impl Into<String>, checker: DynChecker) -> Self {
        self.checkers.insert(name.into(), checker);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DynChecker> {
        self.checkers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checkers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checkers.keys().map(String::as_str)
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &DynChecker)> {
        self.checkers.iter()
    }
}

impl FromIterator<(String, DynChecker)> for Fields {
    fn from_iter<I: IntoIterator<Item = (String, DynChecker)>>(iter: I) -> Self {
        Self {
            checkers: iter.into_iter().collect(),
        }
    }
}

/// What happens when a declared field is absent from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// The field must be present.
    Required,
    /// The field may be absent and is then left out of the output.
    Omit,
    /// The field may be absent and is then coerced from this value.
    Value(Value),
}

/// Per-field defaults. Fields without an entry are required.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Defaults, FieldDefault, Value};
///
/// let defaults = Defaults::new().omit("comment").value("replicas", 1);
/// assert_eq!(defaults.policy("comment"), FieldDefault::Omit);
/// assert_eq!(defaults.policy("replicas"), FieldDefault::Value(Value::Int(1)));
/// assert_eq!(defaults.policy("name"), FieldDefault::Required);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defaults {
    entries: IndexMap<String, FieldDefault>,
}

impl Defaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `name` be absent without a substitute.
    pub fn omit(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), FieldDefault::Omit);
        self
    }

    /// Substitutes `value` when `name` is absent. The value is coerced
    /// through the field's checker like any input would be.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .insert(name.into(), FieldDefault::Value(value.into()));
        self
    }

    /// Returns the policy for `name`, `Required` when none was set.
    pub fn policy(&self, name: &str) -> FieldDefault {
        self.get(name).cloned().unwrap_or(FieldDefault::Required)
    }

    fn get(&self, name: &str) -> Option<&FieldDefault> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How keys that are not declared fields are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Dropped from the output silently.
    Ignore,
    /// Rejected with `expected nothing, got <value>`.
    Reject,
}

/// A checker for mappings with a fixed set of named fields.
///
/// Declared fields are processed in declaration order:
/// - a present field is coerced at `path.<name>`;
/// - an absent field with an `Omit` default is left out;
/// - an absent field with a value default has that value coerced in its
///   place, so an invalid default surfaces as an ordinary error;
/// - an absent required field is coerced as Null, letting the field's own
///   checker produce the `got nothing` error.
///
/// The output holds exactly the present and defaulted fields.
///
/// # Example
///
/// ```rust
/// use coerce_schema::{Checker, Defaults, Fields, Path, Schema, Value};
///
/// let schema = Schema::strict_field_map(
///     Fields::new()
///         .field("name", Schema::string())
///         .field("replicas", Schema::int())
///         .field("comment", Schema::string()),
///     Defaults::new().value("replicas", 1).omit("comment"),
/// );
///
/// let out = schema.coerce_root(&Value::map([("name", "web")])).unwrap();
/// assert_eq!(out, Value::map([("name", Value::from("web")), ("replicas", Value::from(1))]));
///
/// let err = schema
///     .coerce(&Value::map([("name", "web"), ("colour", "red")]), &Path::from_field("svc"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), r#"svc.colour: expected nothing, got "red""#);
/// ```
#[derive(Clone)]
pub struct FieldMap {
    fields: Fields,
    defaults: Defaults,
    unknown_keys: UnknownKeys,
}

impl FieldMap {
    pub fn new(fields: Fields, defaults: Defaults, unknown_keys: UnknownKeys) -> Self {
        Self {
            fields,
            defaults,
            unknown_keys,
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    /// Returns the checker declared for `name`.
    pub fn field(&self, name: &str) -> Option<&DynChecker> {
        self.fields.get(name)
    }

    /// Returns the constant `name` is pinned to, if its checker is a constant.
    pub fn pinned(&self, name: &str) -> Option<&Value> {
        self.field(name)?.pinned_value()
    }

    fn is_declared(&self, key: &Value) -> bool {
        match key {
            Value::String(name) => self.fields.contains(name),
            _ => false,
        }
    }

    fn reject_unknown_keys(&self, entries: &ValueMap, path: &Path) -> Result<(), CoerceError> {
        match entries.iter().find(|(key, _)| !self.is_declared(key)) {
            Some((key, value)) => Err(CoerceError::expected(
                path.push_field(key.key_text()),
                "nothing",
                value,
            )
            .with_code("unknown_field")),
            None => Ok(()),
        }
    }
}

impl Checker for FieldMap {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, CoerceError> {
        let entries = match value {
            Value::Map(entries) => entries,
            other => return Err(CoerceError::expected(path.clone(), "map", other)),
        };

        if self.unknown_keys == UnknownKeys::Reject {
            self.reject_unknown_keys(entries, path)?;
        }

        let mut out = ValueMap::with_capacity(self.fields.len());
        for (name, checker) in self.fields.iter() {
            let key = Value::String(name.clone());
            let field_path = path.push_field(name.as_str());

            let coerced = match entries.get(&key) {
                Some(present) => checker.coerce(present, &field_path)?,
                None => match self.defaults.get(name) {
                    Some(FieldDefault::Omit) => continue,
                    Some(FieldDefault::Value(default)) => checker.coerce(default, &field_path)?,
                    Some(FieldDefault::Required) | None => checker
                        .coerce(&Value::Null, &field_path)
                        .map_err(|e| e.with_code("required"))?,
                },
            };
            out.insert(key, coerced);
        }
        Ok(Value::Map(out))
    }
}
