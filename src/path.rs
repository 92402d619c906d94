use std::fmt;

/// A key inside a [`Mapping`](crate::value::Mapping).
///
/// Trees parsed from JSON or config files use two kinds of keys: named
/// fields and list positions. Both live in the same mapping type, so a key
/// carries its kind explicitly.
///
/// # Examples
/// - `{"name": ..}` → `Name("name")`
/// - `["a", "b"]` → `Index(0)`, `Index(1)`
/// - `{"3": ..}` → `Index(3)` (canonical integer field names)
///
/// # Note
/// `Index(0)` and `Name("0")` would be distinct keys that print the same,
/// so every conversion from a string goes through [`Key::from_field`] and
/// folds canonical integer strings into `Index`. Build `Key::Name` directly
/// only for names that are not canonical integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// List position or numeric key
    Index(u64),

    /// Named field
    Name(String),
}

impl Key {
    /// Build a key from an object field name.
    ///
    /// A canonical non-negative decimal (`"0"`, `"42"`) becomes an `Index`;
    /// anything else, including `"007"` and `"-1"`, stays a `Name`.
    pub fn from_field(field: &str) -> Self {
        let canonical = !field.is_empty()
            && field.bytes().all(|b| b.is_ascii_digit())
            && (field == "0" || !field.starts_with('0'));

        if canonical && let Ok(n) = field.parse::<u64>() {
            return Key::Index(n);
        }
        Key::Name(field.to_string())
    }

    pub fn as_index(&self) -> Option<u64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{}", n),
            Key::Name(s) => write!(f, "{}", s),
        }
    }
}

/// Same as [`Key::from_field`]: `Key::from("1") == Key::Index(1)`.
impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::from_field(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from_field(&s)
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Index(n)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Index(n as u64)
    }
}

/// The keys leading from the root of a tree down to the parent of the node
/// being visited.
///
/// For the entry `b` in `{"some": {"b": 1}}` the path handed to callbacks is
/// `[Name("some")]`; the entry's own key is passed separately.
pub type Path = Vec<Key>;

/// Join a parent path and a key into a delimited string.
///
/// Keys that contain the delimiter make the result ambiguous
/// (`["a.b"]` and `["a", "b"]` both give `a.b`). Compare path slices when
/// that matters.
///
/// ```
/// use bough::path::{Key, join_path};
///
/// let parent = vec![Key::from("some")];
/// assert_eq!(join_path(&parent, &Key::from("b"), "."), "some.b");
/// assert_eq!(join_path(&[], &Key::from("b"), "."), "b");
/// ```
pub fn join_path(path: &[Key], key: &Key, delimiter: &str) -> String {
    let mut joined = String::new();
    for segment in path {
        joined.push_str(&segment.to_string());
        joined.push_str(delimiter);
    }
    joined.push_str(&key.to_string());
    joined
}
