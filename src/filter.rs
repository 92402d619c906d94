//! Recursive filtering of mappings.
//!
//! Filtering is post-order. Every nested mapping is filtered first, then the
//! predicate runs over the values of the current level, nested mappings
//! included in their filtered form. The two passes are independent: with
//! the default truthy predicate a mapping whose children were all removed is
//! empty and so removed too, while a predicate that accepts empty mappings
//! keeps it.
//!
//! # Examples
//!
//! ```
//! use bough::{Key, Mapping, Value, filter, filter_truthy};
//!
//! let mut inner = Mapping::new();
//! inner.insert(Key::from("b"), Value::from(""));
//! inner.insert(Key::from("c"), Value::Boolean(false));
//! inner.insert(Key::from("d"), Value::from("something"));
//! let mut input = Mapping::new();
//! input.insert(Key::from("a"), Value::Mapping(inner));
//!
//! let truthy = filter_truthy(&input);
//! assert_eq!(truthy[&Key::from("a")].as_mapping().unwrap().len(), 1);
//!
//! let custom = filter(&input, |value| *value != Value::from("something"));
//! assert_eq!(custom[&Key::from("a")].as_mapping().unwrap().len(), 2);
//! ```

use std::convert::Infallible;

use tracing::debug;

use crate::{
    error::TreeError,
    value::{Mapping, Value},
};

/// Keep the entries of `input`, at every depth, for which `predicate`
/// returns true.
pub fn filter<F>(input: &Mapping, mut predicate: F) -> Mapping
where
    F: FnMut(&Value) -> bool,
{
    debug!(entries = input.len(), "filtering tree");

    let filtered: Result<Mapping, Infallible> =
        filter_level(input, &mut |value| Ok(predicate(value)));
    match filtered {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

/// Filter with [`Value::is_truthy`] as the predicate.
pub fn filter_truthy(input: &Mapping) -> Mapping {
    filter(input, Value::is_truthy)
}

/// Like [`filter`], but the predicate may reject a value it cannot judge.
///
/// The first error stops filtering and is returned as is.
pub fn try_filter<F>(input: &Mapping, mut predicate: F) -> Result<Mapping, TreeError>
where
    F: FnMut(&Value) -> Result<bool, TreeError>,
{
    debug!(entries = input.len(), "filtering tree");

    filter_level(input, &mut predicate)
}

/// Remove every entry equal to `sentinel`, at every depth.
///
/// Matching is by value equality, not truthiness: with the string `"null"`
/// as sentinel, real `Null` values stay. A non-mapping `input` comes back
/// unchanged unless it equals the sentinel, in which case the result is an
/// empty mapping.
///
/// ```
/// use bough::{Key, Mapping, Value, strip_sentinel};
///
/// let mut input = Mapping::new();
/// input.insert(Key::from("a"), Value::from("aa"));
/// input.insert(Key::from("b"), Value::from("null"));
///
/// let stripped = strip_sentinel(&Value::Mapping(input), &Value::from("null"));
///
/// let mut expected = Mapping::new();
/// expected.insert(Key::from("a"), Value::from("aa"));
/// assert_eq!(stripped, Value::Mapping(expected));
/// ```
pub fn strip_sentinel(input: &Value, sentinel: &Value) -> Value {
    match input {
        Value::Mapping(map) => Value::Mapping(filter(map, |value| value != sentinel)),
        scalar if scalar != sentinel => scalar.clone(),
        _ => Value::Mapping(Mapping::new()),
    }
}

/// Strip the string `"null"` from `input`.
pub fn clean_null_strings(input: &Value) -> Value {
    strip_sentinel(input, &Value::from("null"))
}

fn filter_level<F, E>(input: &Mapping, predicate: &mut F) -> Result<Mapping, E>
where
    F: FnMut(&Value) -> Result<bool, E>,
{
    let mut output = Mapping::with_capacity(input.len());

    for (key, value) in input {
        let value = match value {
            Value::Mapping(children) => Value::Mapping(filter_level(children, predicate)?),
            scalar => scalar.clone(),
        };
        output.insert(key.clone(), value);
    }

    let mut kept = Mapping::with_capacity(output.len());
    for (key, value) in output {
        if predicate(&value)? {
            kept.insert(key, value);
        }
    }

    Ok(kept)
}
