use bough::{Key, Mapping, Value, from_json, to_json, to_json_text, to_json_text_pretty};
use serde_json::json;

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_from_field() {
    assert_eq!(Key::from_field("0"), Key::Index(0));
    assert_eq!(Key::from_field("42"), Key::Index(42));
    assert_eq!(Key::from_field("007"), Key::from("007"));
    assert_eq!(Key::from_field("-1"), Key::from("-1"));
    assert_eq!(Key::from_field(""), Key::from(""));
    assert_eq!(Key::from_field("1e3"), Key::from("1e3"));
    assert_eq!(Key::from_field("99999999999999999999999"), Key::from("99999999999999999999999"));
}

// ============================================================================
// serde_json conversion
// ============================================================================

#[test]
fn test_from_json_arrays_become_indexed_mappings() {
    let value = from_json(json!(["a", "b"]));

    let mut expected = Mapping::new();
    expected.insert(Key::Index(0), Value::from("a"));
    expected.insert(Key::Index(1), Value::from("b"));
    assert_eq!(value, Value::Mapping(expected));
}

#[test]
fn test_from_json_numeric_field_names() {
    let value = from_json(json!({"0": "a", "x": 1.5}));

    let mut expected = Mapping::new();
    expected.insert(Key::Index(0), Value::from("a"));
    expected.insert(Key::from("x"), Value::Float(1.5));
    assert_eq!(value, Value::Mapping(expected));
}

#[test]
fn test_from_json_preserves_object_order() {
    let value = from_json(serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap());

    let keys: Vec<String> = value.as_mapping().unwrap().keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_to_json_round_trip() {
    let original = json!({
        "name": "api",
        "enabled": true,
        "ratio": 0.25,
        "tags": ["a", "b"],
        "nested": {"deep": {"value": null}}
    });

    assert_eq!(to_json(&from_json(original.clone())), original);
}

#[test]
fn test_to_json_sparse_indices_become_object() {
    let mut map = Mapping::new();
    map.insert(Key::Index(1), Value::from("b"));
    map.insert(Key::Index(0), Value::from("a"));

    assert_eq!(to_json(&Value::Mapping(map)), json!({"1": "b", "0": "a"}));
}

#[test]
fn test_to_json_empty_mapping_is_object() {
    assert_eq!(to_json(&Value::Mapping(Mapping::new())), json!({}));
}

#[test]
fn test_to_json_non_finite_float_is_null() {
    assert_eq!(to_json(&Value::Float(f64::NAN)), json!(null));
}

// ============================================================================
// Text output
// ============================================================================

#[test]
fn test_to_json_text_compact() {
    let value = from_json(json!({"b": [1, 2], "a": {"s": "x\"y"}, "f": 2.0}));

    assert_eq!(to_json_text(&value), r#"{"b":[1,2],"a":{"s":"x\"y"},"f":2.0}"#);
}

#[test]
fn test_to_json_text_pretty() {
    let value = from_json(json!({"list": ["a"], "empty": {}}));

    let expected = "{\n  \"list\": [\n    \"a\"\n  ],\n  \"empty\": {}\n}";
    assert_eq!(to_json_text_pretty(&value), expected);
}

#[test]
fn test_to_json_text_escapes_control_characters() {
    let value = Value::from("tab\tnew\nbell\u{7}");

    assert_eq!(to_json_text(&value), r#""tab\tnew\nbell\u0007""#);
}

#[test]
fn test_to_json_text_scalars() {
    assert_eq!(to_json_text(&Value::Null), "null");
    assert_eq!(to_json_text(&Value::Boolean(true)), "true");
    assert_eq!(to_json_text(&Value::Integer(-3)), "-3");
    assert_eq!(to_json_text(&Value::Float(1.5)), "1.5");
    assert_eq!(to_json_text(&Value::Float(f64::INFINITY)), "null");
}

#[test]
fn test_to_json_text_large_floats_stay_floats() {
    for float in [1e17, 2.0, -3e20, 123456789012345680.0] {
        let value = Value::Float(float);

        let text = to_json_text(&value);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(from_json(parsed), value, "{text}");
    }
}
