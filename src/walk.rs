//! Recursive key/value rewriting.
//!
//! A walk visits every entry of a mapping depth-first, post-order: a nested
//! mapping is rewritten completely before the callback sees its own entry.
//! The callback receives the entry's key, its (already rewritten) value and
//! the path of the parent, and returns the key and value to store.
//!
//! Rewritten entries are stored in traversal order. When two entries of the
//! same level are rewritten to the same key, the later one wins and keeps
//! the position of the first.
//!
//! # Examples
//!
//! ```
//! use bough::{Key, Mapping, Value, walk};
//! use bough::path::join_path;
//!
//! let mut some = Mapping::new();
//! some.insert(Key::from("a"), Value::from("sub-a-value"));
//! some.insert(Key::from("b"), Value::from("sub-b-value"));
//!
//! let mut source = Mapping::new();
//! source.insert(Key::from("some"), Value::Mapping(some));
//! source.insert(Key::from("more"), Value::Integer(5));
//!
//! let result = walk(&source, |key, value, path| {
//!     if *key == Key::from("more") {
//!         return (Key::from("extra-more"), Value::Integer(10));
//!     }
//!     if join_path(path, key, ".") == "some.b" {
//!         return (key.clone(), Value::from("overwrite-only-sub-b"));
//!     }
//!     (key.clone(), value)
//! });
//!
//! assert_eq!(result[&Key::from("extra-more")], Value::Integer(10));
//! ```

use std::convert::Infallible;

use tracing::debug;

use crate::{
    error::TreeError,
    path::{Key, Path},
    value::{Mapping, Value},
};

/// Rewrite every key and value of `input` with `rewrite`.
///
/// `rewrite(key, value, path)` gets the parent path, not including `key`.
/// Entries of nested mappings see a path that already ends in their parent's
/// original key.
pub fn walk<F>(input: &Mapping, mut rewrite: F) -> Mapping
where
    F: FnMut(&Key, Value, &[Key]) -> (Key, Value),
{
    debug!(entries = input.len(), "walking tree");

    let mut path = Path::new();
    let walked: Result<Mapping, Infallible> =
        walk_level(input, &mut path, &mut |key, value, path| Ok(rewrite(key, value, path)));
    match walked {
        Ok(output) => output,
        Err(never) => match never {},
    }
}

/// Like [`walk`], but the callback may reject an entry.
///
/// The first error stops the walk and is returned as is.
pub fn try_walk<F>(input: &Mapping, mut rewrite: F) -> Result<Mapping, TreeError>
where
    F: FnMut(&Key, Value, &[Key]) -> Result<(Key, Value), TreeError>,
{
    debug!(entries = input.len(), "walking tree");

    let mut path = Path::new();
    walk_level(input, &mut path, &mut rewrite)
}

/// Rewrite only the keys of `input`, leaving values untouched.
pub fn walk_keys<F>(input: &Mapping, mut rename: F) -> Mapping
where
    F: FnMut(&Key, &[Key]) -> Key,
{
    walk(input, |key, value, path| (rename(key, path), value))
}

/// Rewrite only the values of `input`, leaving keys untouched.
///
/// Nested mappings reach `map` after their own entries have been rewritten.
pub fn walk_values<F>(input: &Mapping, mut map: F) -> Mapping
where
    F: FnMut(Value, &Key, &[Key]) -> Value,
{
    walk(input, |key, value, path| (key.clone(), map(value, key, path)))
}

fn walk_level<F, E>(input: &Mapping, path: &mut Path, rewrite: &mut F) -> Result<Mapping, E>
where
    F: FnMut(&Key, Value, &[Key]) -> Result<(Key, Value), E>,
{
    let mut output = Mapping::with_capacity(input.len());

    for (key, value) in input {
        let value = match value {
            Value::Mapping(children) => {
                path.push(key.clone());
                let rewritten = walk_level(children, path, rewrite);
                path.pop();
                Value::Mapping(rewritten?)
            }
            scalar => scalar.clone(),
        };

        let (new_key, new_value) = rewrite(key, value, &path[..])?;
        output.insert(new_key, new_value);
    }

    Ok(output)
}
