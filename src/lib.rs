//! Deep merge, walk, filter and reshape nested key-value trees.
//!
//! Trees are [`Value`]s: scalars or insertion-ordered [`Mapping`]s of
//! further values. Every operation borrows its input and returns a new tree.

#[cfg(feature = "cli")]
pub mod cli;
pub mod entries;
pub mod error;
pub mod filter;
pub mod json;
pub mod merge;
pub mod output;
pub mod path;
pub mod shape;
pub mod value;
pub mod walk;

pub use entries::{is_last_entry, key_exists, prepend_element, prepend_entry};
pub use error::TreeError;
pub use filter::{clean_null_strings, filter, filter_truthy, strip_sentinel, try_filter};
pub use json::{from_json, to_json};
pub use merge::{MergePolicy, merge, merge_only_undefined, merge_overwrite, merge_pair, merge_with};
pub use output::{to_json_text, to_json_text_pretty};
pub use path::{Key, Path};
pub use shape::{records_to_keyed_map, to_generic_mapping, to_structured};
pub use value::{Mapping, Value};
pub use walk::{try_walk, walk, walk_keys, walk_values};
