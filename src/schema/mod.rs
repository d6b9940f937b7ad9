//! Checker definitions and the schema construction API.
//!
//! A schema is a tree of checkers built once and then applied to any number
//! of inputs. Every checker implements [`Checker`]; composite checkers call
//! their children with an extended path and stop at the first failure.
//!
//! # Example
//!
//! ```rust
//! use coerce_schema::{Checker, Defaults, Fields, Path, Schema, Value};
//! use serde_json::json;
//!
//! let schema = Schema::field_map(
//!     Fields::new()
//!         .field("name", Schema::string())
//!         .field("ports", Schema::list(Schema::int())),
//!     Defaults::new().value("ports", Value::list([80])),
//! );
//!
//! let out = schema.coerce_root(&Value::from(json!({"name": "web"}))).unwrap();
//! assert_eq!(out.get("ports"), Some(&Value::list([80])));
//!
//! let err = schema
//!     .coerce_root(&Value::from(json!({"name": "web", "ports": [80, "443"]})))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), r#"ports[1]: expected int, got "443""#);
//! ```

mod combinators;
mod field_map;
mod field_map_set;
mod list;
mod map;
mod numeric;
mod scalar;
mod string;
mod traits;

pub use combinators::OneOfChecker;
pub use field_map::{Defaults, FieldDefault, FieldMap, Fields, UnknownKeys};
pub use field_map_set::FieldMapSet;
pub use list::ListChecker;
pub use map::{MapChecker, StringMapChecker};
pub use numeric::{FloatChecker, IntChecker};
pub use scalar::{AnyChecker, BoolChecker, ConstChecker};
pub use string::{SimpleRegexpChecker, StringChecker};
pub use traits::{shared, Checker, DynChecker};

use crate::value::Value;

/// Entry point for building checkers.
///
/// Each constructor returns a concrete checker type; composite constructors
/// accept any checker and share it internally.
pub struct Schema;

impl Schema {
    /// A checker that accepts only `value`.
    pub fn constant(value: impl Into<Value>) -> ConstChecker {
        ConstChecker::new(value)
    }

    /// A checker that accepts anything, including Null.
    pub fn any() -> AnyChecker {
        AnyChecker
    }

    /// A checker that returns the first alternative that accepts the value.
    pub fn one_of(alternatives: Vec<DynChecker>) -> OneOfChecker {
        OneOfChecker::new(alternatives)
    }

    /// A checker for booleans.
    pub fn bool() -> BoolChecker {
        BoolChecker
    }

    /// A checker for integers of any width, widened to 64 bits.
    pub fn int() -> IntChecker {
        IntChecker
    }

    /// A checker for floats and integers, widened to a 64-bit float.
    pub fn float() -> FloatChecker {
        FloatChecker
    }

    /// A checker for strings.
    pub fn string() -> StringChecker {
        StringChecker
    }

    /// A checker for strings that are syntactically valid regular expressions.
    pub fn simple_regexp() -> SimpleRegexpChecker {
        SimpleRegexpChecker
    }

    /// A checker for lists whose elements all satisfy `elem`.
    pub fn list<C: Checker + 'static>(elem: C) -> ListChecker {
        ListChecker::new(shared(elem))
    }

    /// A checker for maps whose keys satisfy `key` and values satisfy `value`.
    pub fn map<K, V>(key: K, value: V) -> MapChecker
    where
        K: Checker + 'static,
        V: Checker + 'static,
    {
        MapChecker::new(shared(key), shared(value))
    }

    /// A checker for string-keyed maps whose values satisfy `value`.
    pub fn string_map<V: Checker + 'static>(value: V) -> StringMapChecker {
        StringMapChecker::new(shared(value))
    }

    /// A field map that silently drops keys it does not declare.
    pub fn field_map(fields: Fields, defaults: Defaults) -> FieldMap {
        FieldMap::new(fields, defaults, UnknownKeys::Ignore)
    }

    /// A field map that rejects keys it does not declare.
    pub fn strict_field_map(fields: Fields, defaults: Defaults) -> FieldMap {
        FieldMap::new(fields, defaults, UnknownKeys::Reject)
    }

    /// A union of field maps selected by the constant each pins `selector` to.
    pub fn field_map_set(selector: impl Into<String>, variants: Vec<FieldMap>) -> FieldMapSet {
        FieldMapSet::new(selector, variants)
    }
}
