//! Tests for moving values between serde_json and the checker value model.

use coerce_schema::{Checker, ConversionError, Defaults, Fields, Schema, Value};
use serde_json::json;

#[test]
fn test_decode_coerce_encode() {
    let schema = Schema::field_map(
        Fields::new()
            .field("name", Schema::string())
            .field("weight", Schema::float())
            .field("labels", Schema::string_map(Schema::string())),
        Defaults::new().value("weight", 1).omit("labels"),
    );

    let input = json!({"name": "db", "ignored": [1, 2, 3]});
    let out = schema.coerce_root(&Value::from(input)).unwrap();
    let encoded = serde_json::Value::try_from(out).unwrap();

    assert_eq!(encoded, json!({"name": "db", "weight": 1.0}));
}

#[test]
fn test_json_integers_stay_integers() {
    let out = Schema::list(Schema::int())
        .coerce_root(&Value::from(json!([1, -2, 3])))
        .unwrap();
    assert_eq!(serde_json::Value::try_from(out).unwrap(), json!([1, -2, 3]));
}

#[test]
fn test_json_reals_fail_int() {
    let err = Schema::int().coerce_root(&Value::from(json!(1.5))).unwrap_err();
    assert_eq!(err.to_string(), "expected int, got 1.5");
}

#[test]
fn test_map_with_non_string_keys_cannot_be_encoded() {
    let out = Schema::map(Schema::int(), Schema::string())
        .coerce_root(&Value::map([(1, "one")]))
        .unwrap();
    let err = serde_json::Value::try_from(out).unwrap_err();
    assert_eq!(err, ConversionError::NonStringKey("1".to_string()));
}

#[test]
fn test_non_finite_float_cannot_be_encoded() {
    let out = Schema::float().coerce_root(&Value::from(f64::INFINITY)).unwrap();
    let err = serde_json::Value::try_from(out).unwrap_err();
    assert_eq!(err.to_string(), "float inf is not finite");
}
