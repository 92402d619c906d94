//! Converting between container shapes.
//!
//! Two conversions live here:
//!
//! - [`records_to_keyed_map`] turns a list of `{key, ...}` records into a
//!   mapping keyed by each record's `key` field.
//! - [`to_generic_mapping`] and [`to_structured`] move values between typed
//!   `serde` structures and the generic [`Value`] tree.

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    error::TreeError,
    json::{from_json, to_json},
    path::Key,
    value::{Mapping, Value},
};

/// Field holding a record's key
pub const RECORD_KEY_FIELD: &str = "key";

/// Convert records carrying a `key` field into a keyed mapping.
///
/// A mapping that itself has a non-null `key` field is treated as a single
/// record. Otherwise every entry of `input` is examined in order:
///
/// - a mapping with a non-null `key` field is a record. Its remaining fields
///   become the value: a single field is unwrapped to its bare value, several
///   fields stay a mapping, no field at all gives `Null`.
/// - anything else is carried over under its own key.
///
/// When several records share a key, the later value wins and the entry
/// keeps the position of the first.
///
/// # Errors
///
/// `InvalidArgument` when `input` is not a mapping, or when a record's key
/// is neither a string nor a non-negative integer.
///
/// # Examples
///
/// ```
/// use bough::{Key, Mapping, Value, records_to_keyed_map};
///
/// fn record(key: &str, value: &str) -> Value {
///     let mut map = Mapping::new();
///     map.insert(Key::from("key"), Value::from(key));
///     map.insert(Key::from("value"), Value::from(value));
///     Value::Mapping(map)
/// }
///
/// let records: Mapping = [record("a", "av"), record("b", "bv"), record("a", "cv")]
///     .into_iter()
///     .enumerate()
///     .map(|(i, r)| (Key::from(i), r))
///     .collect();
///
/// let keyed = records_to_keyed_map(&Value::Mapping(records)).unwrap();
/// assert_eq!(keyed[&Key::from("a")], Value::from("cv"));
/// assert_eq!(keyed[&Key::from("b")], Value::from("bv"));
/// ```
pub fn records_to_keyed_map(input: &Value) -> Result<Mapping, TreeError> {
    let Value::Mapping(map) = input else {
        return Err(TreeError::InvalidArgument(format!(
            "records must be a mapping or a list of mappings, got {}",
            input.type_name()
        )));
    };

    if is_record(map) {
        let mut output = Mapping::new();
        let (key, value) = split_record(map)?;
        output.insert(key, value);
        return Ok(output);
    }

    debug!(entries = map.len(), "converting records to keyed mapping");

    let mut output = Mapping::with_capacity(map.len());
    for (position, item) in map {
        match item {
            Value::Mapping(record) if is_record(record) => {
                let (key, value) = split_record(record)?;
                output.insert(key, value);
            }
            other => {
                output.insert(position.clone(), other.clone());
            }
        }
    }

    Ok(output)
}

fn is_record(map: &Mapping) -> bool {
    matches!(map.get(&Key::from(RECORD_KEY_FIELD)), Some(v) if *v != Value::Null)
}

fn split_record(record: &Mapping) -> Result<(Key, Value), TreeError> {
    let mut rest = record.clone();
    let raw_key = rest
        .shift_remove(&Key::from(RECORD_KEY_FIELD))
        .unwrap_or(Value::Null);

    let key = match raw_key {
        Value::String(s) => Key::from(s),
        Value::Integer(n) if n >= 0 => Key::Index(n as u64),
        other => {
            return Err(TreeError::InvalidArgument(format!(
                "record key must be a string or a non-negative integer, got {}",
                other.type_name()
            )));
        }
    };

    let value = match rest.len() {
        0 => Value::Null,
        1 => rest.into_iter().next().map(|(_, v)| v).unwrap_or(Value::Null),
        _ => Value::Mapping(rest),
    };

    Ok((key, value))
}

/// Convert a typed value into the generic tree.
///
/// Structs and maps become mappings, sequences become index-keyed mappings,
/// nested values are converted recursively.
///
/// ```
/// use bough::{Key, Value, to_generic_mapping};
/// use std::collections::BTreeMap;
///
/// let mut settings = BTreeMap::new();
/// settings.insert("a", "test me");
///
/// let tree = to_generic_mapping(&settings).unwrap();
/// assert_eq!(tree.as_mapping().unwrap()[&Key::from("a")], Value::from("test me"));
/// ```
pub fn to_generic_mapping<T>(structured: &T) -> Result<Value, TreeError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_value(structured)?;
    Ok(from_json(json))
}

/// Convert a generic tree back into a typed value.
///
/// The inverse of [`to_generic_mapping`]: a round trip through both gives a
/// structurally equal tree.
pub fn to_structured<T>(mapping: &Value) -> Result<T, TreeError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(to_json(mapping))?)
}
