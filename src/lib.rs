//! # coerce-schema
//!
//! Schema-driven coercion of loosely-typed, already-decoded data.
//!
//! ## Overview
//!
//! Decoders for YAML, JSON and similar formats produce generic nested
//! values: maps, lists and scalars of whatever width the decoder chose.
//! This crate checks such a value against a declarative schema, normalizes
//! it (integers to `i64`, floats to `f64`, defaults filled in, unknown keys
//! dropped or rejected) and reports the first mismatch with its location.
//!
//! ## Core Types
//!
//! - [`Value`]: the closed value model checkers consume and produce
//! - [`Path`]: where in the input a value lives (e.g., `services[0].name`)
//! - [`Checker`]: the single operation every schema node implements
//! - [`Schema`]: constructors for every checker
//! - [`CoerceError`]: a failure with its path and rendered message
//!
//! ## Example
//!
//! ```rust
//! use coerce_schema::{Checker, Defaults, Fields, Schema, Value};
//! use serde_json::json;
//!
//! let service = Schema::strict_field_map(
//!     Fields::new()
//!         .field("name", Schema::string())
//!         .field("replicas", Schema::int())
//!         .field("expose", Schema::bool()),
//!     Defaults::new().value("replicas", 1).omit("expose"),
//! );
//! let schema = Schema::string_map(service);
//!
//! let input = Value::from(json!({"web": {"name": "web"}}));
//! let out = schema.coerce_root(&input).unwrap();
//! assert_eq!(out, Value::from(json!({"web": {"name": "web", "replicas": 1}})));
//!
//! let input = Value::from(json!({"web": {"name": "web", "replicas": "two"}}));
//! let err = schema.coerce_root(&input).unwrap_err();
//! assert_eq!(err.to_string(), r#"web.replicas: expected int, got "two""#);
//! ```

pub mod batch;
pub mod error;
pub mod path;
pub mod schema;
pub mod value;

pub use error::{CoerceError, CoerceErrors, ConversionError};
pub use path::{Path, PathSegment};
pub use schema::{
    shared, AnyChecker, BoolChecker, Checker, ConstChecker, Defaults, DynChecker, FieldDefault,
    FieldMap, FieldMapSet, Fields, FloatChecker, IntChecker, ListChecker, MapChecker,
    OneOfChecker, Schema, SimpleRegexpChecker, StringChecker, StringMapChecker, UnknownKeys,
};
pub use value::{Value, ValueMap};

/// Type alias for batch results using [`CoerceErrors`].
pub type BatchResult<T> = stillwater::Validation<T, CoerceErrors>;
