//! JSON text output for trees.
//!
//! This module prints a [`Value`] as JSON text, compact or pretty. The tree
//! goes through [`to_json`] first, so the list/object decision is the one
//! made by [`crate::json::is_sequential`] and the text reads back into the
//! same tree through [`crate::json::from_json`].
//!
//! # Features
//!
//! - **Compact output** via [`to_json_text()`]
//! - **Pretty output** via [`to_json_text_pretty()`] with 2-space indentation
//! - **Order preserving**: keys are printed in insertion order
//! - **Float fidelity**: floats always print as floats (`2.0`, `1e17`), never
//!   as integer literals
//!
//! # Examples
//!
//! ```
//! use bough::{Key, Mapping, Value};
//! use bough::output::{to_json_text, to_json_text_pretty};
//!
//! let mut map = Mapping::new();
//! map.insert(Key::from("b"), Value::Integer(1));
//! map.insert(Key::from("a"), Value::Integer(2));
//! let value = Value::Mapping(map);
//!
//! assert_eq!(to_json_text(&value), r#"{"b":1,"a":2}"#);
//! assert_eq!(to_json_text_pretty(&value), "{\n  \"b\": 1,\n  \"a\": 2\n}");
//! ```

use crate::{json::to_json, value::Value};

/// Print a tree as compact JSON
pub fn to_json_text(value: &Value) -> String {
    to_json(value).to_string()
}

/// Print a tree as JSON indented by two spaces
pub fn to_json_text_pretty(value: &Value) -> String {
    format!("{:#}", to_json(value))
}
