//! Integration tests for the terminal checkers.

use coerce_schema::{shared, Checker, Path, Schema, Value};

fn a_path() -> Path {
    Path::from_field("<path>")
}

fn message<C: Checker>(checker: &C, value: Value) -> String {
    checker.coerce(&value, &a_path()).unwrap_err().to_string()
}

// ====== Const / Any / OneOf ======

#[test]
fn test_const() {
    let schema = Schema::constant("foo");

    assert_eq!(schema.coerce(&Value::from("foo"), &a_path()), Ok(Value::from("foo")));
    assert_eq!(message(&schema, Value::from(42)), r#"<path>: expected "foo", got 42"#);
    assert_eq!(message(&schema, Value::Null), r#"<path>: expected "foo", got nothing"#);
}

#[test]
fn test_const_of_container() {
    let schema = Schema::constant(Value::list(["a", "b"]));
    assert!(schema.coerce_root(&Value::list(["a", "b"])).is_ok());
    assert_eq!(
        message(&schema, Value::list(["a"])),
        r#"<path>: expected ["a", "b"], got ["a"]"#
    );
}

#[test]
fn test_any() {
    let schema = Schema::any();
    assert_eq!(schema.coerce(&Value::from("foo"), &a_path()), Ok(Value::from("foo")));
    assert_eq!(schema.coerce(&Value::Null, &a_path()), Ok(Value::Null));

    let nested = Value::map([("a", Value::list([1, 2]))]);
    assert_eq!(schema.coerce(&nested, &a_path()), Ok(nested.clone()));
}

#[test]
fn test_one_of() {
    let schema = Schema::one_of(vec![shared(Schema::constant("foo")), shared(Schema::constant(42))]);

    assert_eq!(schema.coerce(&Value::from("foo"), &a_path()), Ok(Value::from("foo")));
    assert_eq!(schema.coerce(&Value::from(42), &a_path()), Ok(Value::from(42)));
    assert_eq!(message(&schema, Value::from("bar")), r#"<path>: unexpected value "bar""#);
}

#[test]
fn test_one_of_hides_sub_errors() {
    let schema = Schema::one_of(vec![shared(Schema::list(Schema::int()))]);
    let err = schema
        .coerce(&Value::list([Value::from(1), Value::from("x")]), &a_path())
        .unwrap_err();
    assert_eq!(err.path, a_path());
    assert_eq!(err.to_string(), r#"<path>: unexpected value [1, "x"]"#);
}

#[test]
fn test_one_of_returns_normalized_output() {
    let schema = Schema::one_of(vec![shared(Schema::bool()), shared(Schema::float())]);
    assert_eq!(schema.coerce_root(&Value::from(3u8)), Ok(Value::Float(3.0)));
}

// ====== Bool / Int / Float / String ======

#[test]
fn test_bool() {
    let schema = Schema::bool();
    assert_eq!(schema.coerce(&Value::from(true), &a_path()), Ok(Value::Bool(true)));
    assert_eq!(schema.coerce(&Value::from(false), &a_path()), Ok(Value::Bool(false)));
    assert_eq!(message(&schema, Value::from(1)), "<path>: expected bool, got 1");
    assert_eq!(message(&schema, Value::Null), "<path>: expected bool, got nothing");
}

#[test]
fn test_int() {
    let schema = Schema::int();
    assert_eq!(schema.coerce(&Value::from(42), &a_path()), Ok(Value::Int(42)));
    assert_eq!(schema.coerce(&Value::from(42i8), &a_path()), Ok(Value::Int(42)));
    assert_eq!(message(&schema, Value::from(true)), "<path>: expected int, got true");
    assert_eq!(message(&schema, Value::Null), "<path>: expected int, got nothing");
}

#[test]
fn test_float() {
    let schema = Schema::float();
    assert_eq!(schema.coerce(&Value::from(1.0f32), &a_path()), Ok(Value::Float(1.0)));
    assert_eq!(schema.coerce(&Value::from(1.0f64), &a_path()), Ok(Value::Float(1.0)));
    assert_eq!(message(&schema, Value::from(true)), "<path>: expected float, got true");
    assert_eq!(message(&schema, Value::Null), "<path>: expected float, got nothing");
}

#[test]
fn test_string() {
    let schema = Schema::string();
    assert_eq!(schema.coerce(&Value::from("foo"), &a_path()), Ok(Value::from("foo")));
    assert_eq!(message(&schema, Value::from(true)), "<path>: expected string, got true");
    assert_eq!(message(&schema, Value::Null), "<path>: expected string, got nothing");
}

#[test]
fn test_string_message_escapes_quotes() {
    let err = Schema::int()
        .coerce_root(&Value::from("say \"hi\""))
        .unwrap_err();
    assert_eq!(err.to_string(), r#"expected int, got "say \"hi\"""#);
}

// ====== SimpleRegexp ======

#[test]
fn test_simple_regexp() {
    let schema = Schema::simple_regexp();
    assert_eq!(schema.coerce(&Value::from("[0-9]+"), &a_path()), Ok(Value::from("[0-9]+")));
    assert_eq!(message(&schema, Value::from(1)), "<path>: expected regexp string, got 1");
    assert_eq!(message(&schema, Value::from("[")), r#"<path>: expected valid regexp, got "[""#);
    assert_eq!(message(&schema, Value::Null), "<path>: expected regexp string, got nothing");
}

#[test]
fn test_root_errors_have_no_path_prefix() {
    let err = Schema::string().coerce_root(&Value::from(7)).unwrap_err();
    assert!(err.path.is_root());
    assert_eq!(err.to_string(), "expected string, got 7");
}
