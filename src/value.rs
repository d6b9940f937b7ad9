//! The closed dynamic value model coerced by checkers.
//!
//! [`Value`] is the vocabulary shared by decoders and checkers: whatever a
//! YAML or JSON decoder produced is converted into a `Value` before it is
//! handed to a schema, and every checker returns a `Value` again.
//!
//! Narrow native numbers are widened on the way in: every integer width
//! becomes [`Value::Int`] and every float width becomes [`Value::Float`].

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// Mapping type used by [`Value::Map`].
///
/// Insertion order is kept so traversal is deterministic, but equality
/// between two maps ignores order.
pub type ValueMap = IndexMap<Value, Value>;

/// A loosely-typed, already-decoded datum.
///
/// # Example
///
/// ```rust
/// use coerce_schema::Value;
///
/// let v = Value::from(42i8);
/// assert_eq!(v, Value::Int(42));
///
/// let v = Value::from(1.5f32);
/// assert_eq!(v, Value::Float(1.5));
///
/// let m = Value::map([("name", "web"), ("kind", "service")]);
/// assert_eq!(m.get("name"), Some(&Value::from("web")));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// Any integer width, widened to 64 bits.
    Int(i64),
    /// Any float width, widened to 64 bits.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// A mapping with unique keys.
    Map(ValueMap),
}

impl Value {
    /// Builds a list from anything convertible into values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key/value pairs. Later duplicates replace earlier ones.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float, if this is a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries, if this is a `Map`.
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a string key in a map value.
    ///
    /// Returns `None` for non-map values and for absent keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(&Value::String(key.to_string()))
    }

    /// Returns the unquoted text of this value as used in a path segment.
    ///
    /// Strings render raw; everything else renders as in error messages.
    pub fn key_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            // 0.0 and -0.0 compare equal, so they must hash alike.
            Value::Float(f) => {
                let bits = if *f == 0.0 { 0 } else { f.to_bits() };
                bits.hash(state);
            }
            Value::String(s) => s.hash(state),
            Value::List(items) => items.hash(state),
            // Map equality ignores order; only the length is order-independent.
            Value::Map(entries) => entries.len().hash(state),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nothing"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => fmt_float(*x, f),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Renders a float in shortest form, switching to exponent notation for
/// large or small magnitudes (`1e+06`, `1e-05`) and spelling
/// infinities with an explicit sign (`+Inf`, `-Inf`).
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "+Inf" } else { "-Inf" });
    }
    if x == 0.0 {
        return write!(f, "{}", x);
    }

    let sci = format!("{:e}", x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return write!(f, "{}", x),
    };
    if (-4..6).contains(&exponent) {
        write!(f, "{}", x)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

macro_rules! widen_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

widen_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        // isize is at most 64 bits wide on every supported target.
        Value::Int(n as i64)
    }
}

impl TryFrom<u64> for Value {
    type Error = ConversionError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        i64::try_from(n)
            .map(Value::Int)
            .map_err(|_| ConversionError::IntegerOverflow(n))
    }
}

impl TryFrom<usize> for Value {
    type Error = ConversionError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Value::try_from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<ValueMap> for Value {
    fn from(entries: ValueMap) -> Self {
        Value::Map(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and real numbers both land here.
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Failure to convert between [`Value`] and an outside representation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// An unsigned integer above `i64::MAX` has no `Int` form.
    #[error("integer {0} does not fit in 64 signed bits")]
    IntegerOverflow(u64),

    /// JSON objects only have string keys.
    #[error("map key {0} is not a string")]
    NonStringKey(String),

    /// JSON has no representation for NaN or infinities.
    #[error("float {0} is not finite")]
    NonFiniteFloat(f64),
}

impl TryFrom<Value> for serde_json::Value {
    type Error = ConversionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                .ok_or(ConversionError::NonFiniteFloat(x))?,
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Map(entries) => {
                let mut obj = serde_json::Map::new();
                for (k, v) in entries {
                    let key = match k {
                        Value::String(s) => s,
                        other => return Err(ConversionError::NonStringKey(other.to_string())),
                    };
                    obj.insert(key, serde_json::Value::try_from(v)?);
                }
                serde_json::Value::Object(obj)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_widths_widen() {
        assert_eq!(Value::from(7i8), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::Int(7));
        assert_eq!(Value::from(-7i32), Value::Int(-7));
        assert_eq!(Value::from(u32::MAX), Value::Int(i64::from(u32::MAX)));
    }

    #[test]
    fn test_machine_widths() {
        assert_eq!(Value::from(-42isize), Value::Int(-42));
        assert_eq!(Value::try_from(42usize), Ok(Value::Int(42)));
        assert_eq!(Value::try_from(i64::MAX as u64), Ok(Value::Int(i64::MAX)));
    }

    #[test]
    fn test_unsigned_above_i64_max_is_rejected() {
        let err = Value::try_from(u64::MAX).unwrap_err();
        assert_eq!(err, ConversionError::IntegerOverflow(u64::MAX));
        assert_eq!(err.to_string(), "integer 18446744073709551615 does not fit in 64 signed bits");
    }

    #[test]
    fn test_float_widths_widen() {
        assert_eq!(Value::from(1.0f32), Value::Float(1.0));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
    }

    #[test]
    fn test_int_never_equals_float() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Float(0.0), Value::Float(-0.0));
    }

    #[test]
    fn test_map_equality_ignores_order() {
        let a = Value::map([("x", 1), ("y", 2)]);
        let b = Value::map([("y", 2), ("x", 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "nothing");
        assert_eq!(Value::from("foo").to_string(), "\"foo\"");
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(123456.0).to_string(), "123456");
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(1234567.0).to_string(), "1.234567e+06");
        assert_eq!(Value::from(0.0001).to_string(), "0.0001");
        assert_eq!(Value::from(0.000015).to_string(), "1.5e-05");
        assert_eq!(Value::from(-2e30).to_string(), "-2e+30");
        assert_eq!(Value::from(0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Inf");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::list([1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::map([("a", 1)]).to_string(), "{\"a\": 1}");
    }

    #[test]
    fn test_key_text() {
        assert_eq!(Value::from("name").key_text(), "name");
        assert_eq!(Value::from(3).key_text(), "3");
        assert_eq!(Value::Null.key_text(), "nothing");
    }

    #[test]
    fn test_from_json() {
        let v = Value::from(json!({"a": [1, 2.5, null, "s", true]}));
        let expected = Value::map([(
            "a",
            Value::list([
                Value::Int(1),
                Value::Float(2.5),
                Value::Null,
                Value::from("s"),
                Value::Bool(true),
            ]),
        )]);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_from_json_large_unsigned_becomes_float() {
        let v = Value::from(json!(u64::MAX));
        assert!(matches!(v, Value::Float(_)));
    }

    #[test]
    fn test_to_json() {
        let v = Value::map([("a", Value::list([1, 2]))]);
        let json = serde_json::Value::try_from(v).unwrap();
        assert_eq!(json, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_to_json_rejects_non_string_key() {
        let v = Value::map([(1, "one")]);
        let err = serde_json::Value::try_from(v).unwrap_err();
        assert_eq!(err, ConversionError::NonStringKey("1".to_string()));
        assert_eq!(err.to_string(), "map key 1 is not a string");
    }

    #[test]
    fn test_to_json_rejects_nan() {
        let err = serde_json::Value::try_from(Value::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, ConversionError::NonFiniteFloat(_)));
    }

    #[test]
    fn test_get() {
        let v = Value::map([("a", 1)]);
        assert_eq!(v.get("a"), Some(&Value::Int(1)));
        assert_eq!(v.get("b"), None);
        assert_eq!(Value::Int(1).get("a"), None);
    }
}
