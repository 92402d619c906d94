//! Deep merging of mappings.
//!
//! Merges walk the right-hand mapping in its own order. When both sides hold
//! a mapping under the same key the two are merged recursively; otherwise the
//! [`MergePolicy`] decides which side's value survives. A mapping is never
//! merged into a scalar: it either replaces it or is discarded.
//!
//! # Ordering
//!
//! Keys present only in the left mapping keep their position. Keys taken
//! from the right mapping are appended after them, in right-hand order. A
//! replaced key stays where the left mapping had it.
//!
//! # Examples
//!
//! ```
//! use bough::{Key, Mapping, Value, merge};
//!
//! fn map(pairs: &[(&str, i64)]) -> Mapping {
//!     pairs.iter().map(|(k, v)| (Key::from(*k), Value::Integer(*v))).collect()
//! }
//!
//! let merged = merge(&[
//!     map(&[("aa", 1), ("ab", 2)]),
//!     map(&[("aa", 9), ("ac", 3)]),
//!     map(&[("aa", 5)]),
//! ]);
//! assert_eq!(merged, map(&[("aa", 5), ("ab", 2), ("ac", 3)]));
//! ```

use tracing::debug;

use crate::value::{Mapping, Value};

/// Rule applied when both sides of a merge hold a key and at least one of
/// the two values is not a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// The right-hand value replaces the left-hand one
    #[default]
    Overwrite,

    /// The left-hand value is kept; the right only fills in missing keys
    OnlyUndefined,
}

/// Merge any number of mappings left to right, later ones overwriting
/// earlier ones.
///
/// An empty slice gives an empty mapping.
pub fn merge(trees: &[Mapping]) -> Mapping {
    merge_with(MergePolicy::Overwrite, trees)
}

/// Fold `trees` left to right under `policy`.
pub fn merge_with(policy: MergePolicy, trees: &[Mapping]) -> Mapping {
    debug!(trees = trees.len(), ?policy, "merging trees");

    let Some((first, rest)) = trees.split_first() else {
        return Mapping::new();
    };

    let mut result = first.clone();
    for tree in rest {
        result = merge_pair(policy, &result, tree);
    }
    result
}

/// Merge `right` into `left`, with `right` winning every conflict.
///
/// ```
/// use bough::{Key, Mapping, Value, merge_overwrite};
///
/// let mut left = Mapping::new();
/// left.insert(Key::from("key"), Value::from("org value"));
/// let mut right = Mapping::new();
/// right.insert(Key::from("key"), Value::from("new value"));
///
/// let merged = merge_overwrite(&left, &right);
/// assert_eq!(merged[&Key::from("key")], Value::from("new value"));
/// ```
pub fn merge_overwrite(left: &Mapping, right: &Mapping) -> Mapping {
    merge_pair(MergePolicy::Overwrite, left, right)
}

/// Merge `right` into `left`, only adding keys `left` does not have.
///
/// A key already in `left` keeps its value whatever its type, `Null`
/// included. Sub-mappings present on both sides are merged by the same rule.
pub fn merge_only_undefined(left: &Mapping, right: &Mapping) -> Mapping {
    merge_pair(MergePolicy::OnlyUndefined, left, right)
}

/// Merge two mappings under `policy`.
pub fn merge_pair(policy: MergePolicy, left: &Mapping, right: &Mapping) -> Mapping {
    let mut merged = left.clone();

    for (key, incoming) in right {
        match (merged.get_mut(key), incoming) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                let nested = merge_pair(policy, existing, incoming);
                *existing = nested;
            }
            (Some(existing), _) => {
                if policy == MergePolicy::Overwrite {
                    *existing = incoming.clone();
                }
            }
            (None, _) => {
                merged.insert(key.clone(), incoming.clone());
            }
        }
    }

    merged
}
