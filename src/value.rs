use indexmap::IndexMap;

use crate::path::Key;

/// An insertion-ordered collection of uniquely keyed entries.
///
/// Output order of every tree operation follows the order entries were
/// inserted, so the mapping type is ordered rather than hashed.
pub type Mapping = IndexMap<Key, Value>;

/// A node in a tree of nested key-value data.
///
/// A node is either a scalar leaf or a [`Mapping`] of further nodes. Lists
/// are mappings keyed by [`Key::Index`], which is also how they arrive from
/// JSON (see [`crate::json`]).
///
/// # Examples
///
/// ```
/// use bough::{Key, Mapping, Value};
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::from("hello");
///
/// // Nested mapping
/// let mut map = Mapping::new();
/// map.insert(Key::from("key"), Value::from("value"));
/// let tree = Value::Mapping(map);
/// assert!(tree.is_mapping());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value
    Null,

    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (kept apart from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Nested entries
    Mapping(Mapping),
}

impl Value {
    /// Check whether the value is truthy.
    ///
    /// Rejects `""`, `false`, `0`, `0.0`, `Null` and an empty mapping.
    /// Everything else, negative numbers and the string `"0"` included, is
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Float(n) => *n != 0.0,
            Value::Integer(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Mapping(map) => !map.is_empty(),
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Mapping(_) => "mapping",
        }
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

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

/// A key read back as a value: names become strings, indices integers.
///
/// Indices above `i64::MAX` saturate.
impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Name(s) => Value::String(s),
            Key::Index(n) => Value::Integer(i64::try_from(n).unwrap_or(i64::MAX)),
        }
    }
}
