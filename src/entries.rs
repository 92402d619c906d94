//! Single-pass helpers over one level of a mapping.

use crate::{
    error::TreeError,
    path::Key,
    value::{Mapping, Value},
};

/// Check whether `key` is the last key of `mapping`.
///
/// False when the mapping is empty or does not hold `key`.
///
/// ```
/// use bough::{Key, Mapping, Value, is_last_entry};
///
/// let mut entries = Mapping::new();
/// entries.insert(Key::from("x"), Value::Integer(1));
/// entries.insert(Key::from("y"), Value::Integer(2));
///
/// assert!(is_last_entry(&entries, &Key::from("y")));
/// assert!(!is_last_entry(&entries, &Key::from("x")));
/// ```
pub fn is_last_entry(mapping: &Mapping, key: &Key) -> bool {
    mapping.last().is_some_and(|(last, _)| last == key)
}

/// Check whether the first of `keys` exists in `mapping`.
///
/// Only the first key is looked at; the rest of the slice is ignored. An
/// empty slice gives false.
pub fn key_exists(keys: &[Key], mapping: &Mapping) -> bool {
    match keys.first() {
        Some(key) => mapping.contains_key(key),
        None => false,
    }
}

/// Put an entry at the front of `mapping`.
///
/// With a `value`, `{key: value}` comes first, followed by the existing
/// entries in their order. If `key` is already present its value is
/// replaced where it stands.
///
/// Without a value, `mapping` is treated as a list and `key` itself becomes
/// its new first element; see [`prepend_element`].
///
/// # Errors
///
/// `UnsupportedKeys` when no value is given and `mapping` has named keys.
///
/// # Examples
///
/// ```
/// use bough::{Key, Mapping, Value, prepend_entry};
///
/// let list: Mapping = [(Key::Index(0), Value::from("a")), (Key::Index(1), Value::from("b"))]
///     .into_iter()
///     .collect();
/// let prepended = prepend_entry(&list, Key::from("someValue"), None).unwrap();
/// assert_eq!(prepended[&Key::Index(0)], Value::from("someValue"));
/// assert_eq!(prepended[&Key::Index(2)], Value::from("b"));
///
/// let map: Mapping = [(Key::from("a"), Value::from("aa"))].into_iter().collect();
/// let prepended = prepend_entry(&map, Key::from("someKey"), Some(Value::from("someValue"))).unwrap();
/// assert_eq!(prepended.first(), Some((&Key::from("someKey"), &Value::from("someValue"))));
/// ```
pub fn prepend_entry(mapping: &Mapping, key: Key, value: Option<Value>) -> Result<Mapping, TreeError> {
    let Some(value) = value else {
        return prepend_element(mapping, Value::from(key));
    };

    if mapping.contains_key(&key) {
        let mut output = mapping.clone();
        output.insert(key, value);
        return Ok(output);
    }

    let mut output = Mapping::with_capacity(mapping.len() + 1);
    output.insert(key, value);
    output.extend(mapping.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(output)
}

/// Insert `element` at the front of a list-like mapping, renumbering keys
/// from 0.
///
/// # Errors
///
/// `UnsupportedKeys` when `mapping` holds a named key. Mixed mappings have
/// no defined renumbering.
pub fn prepend_element(mapping: &Mapping, element: Value) -> Result<Mapping, TreeError> {
    if let Some(named) = mapping.keys().find(|k| k.as_index().is_none()) {
        return Err(TreeError::UnsupportedKeys {
            operation: "prepend without a value",
            found: named.to_string(),
        });
    }

    let mut output = Mapping::with_capacity(mapping.len() + 1);
    output.insert(Key::Index(0), element);
    for (position, value) in mapping.values().enumerate() {
        output.insert(Key::from(position + 1), value.clone());
    }
    Ok(output)
}
