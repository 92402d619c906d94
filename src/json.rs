//! `serde_json::Value` <-> tree conversion

use crate::{
    path::Key,
    value::{Mapping, Value},
};

/// Convert a `serde_json::Value` into a tree.
///
/// Arrays become mappings keyed `Index(0..n)`. Object field names go
/// through [`Key::from_field`], so `{"0": ..}` and `[..]` share key kinds.
pub fn from_json(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Mapping(
            arr.into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), from_json(v)))
                .collect(),
        ),
        serde_json::Value::Object(obj) => Value::Mapping(
            obj.into_iter()
                .map(|(k, v)| (Key::from_field(&k), from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a tree into a `serde_json::Value`.
///
/// A non-empty mapping whose keys are exactly `0, 1, .., n-1` in order is
/// written as an array; every other mapping, the empty one included, as an
/// object. Non-finite floats become `null`.
pub fn to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Mapping(map) if is_sequential(map) => {
            serde_json::Value::Array(map.values().map(to_json).collect())
        }
        Value::Mapping(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_string(), to_json(v)))
                .collect(),
        ),
    }
}

/// True for a non-empty mapping keyed `0, 1, .., n-1` in that order.
pub fn is_sequential(map: &Mapping) -> bool {
    !map.is_empty()
        && map
            .keys()
            .enumerate()
            .all(|(i, k)| k.as_index() == Some(i as u64))
}
