//! Rename keys matching a pattern, at every depth

use regex::Regex;
use tracing::debug;

use super::{CliError, parse_mapping};
use crate::{Key, Value, walk_keys};

/// Options for the rename command
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Regex matched against named keys
    pub pattern: String,
    /// Replacement template; `$1`, `$name` refer to capture groups
    pub replace: String,
    /// Dot-separated path; only keys below it are renamed
    pub under: Option<String>,
}

/// Execute a rename over a JSON document
///
/// Integer keys are never renamed. A new name that is a canonical integer
/// becomes an integer key. When two keys of one level end up equal, the
/// later entry wins.
pub fn execute_rename(input: &str, options: &RenameOptions) -> Result<Value, CliError> {
    let pattern = Regex::new(&options.pattern)?;
    let prefix: Vec<Key> = match &options.under {
        Some(under) => under.split('.').map(Key::from_field).collect(),
        None => Vec::new(),
    };

    let map = parse_mapping(input)?;
    let renamed = walk_keys(&map, |key, path| {
        if !path.starts_with(&prefix) {
            return key.clone();
        }
        match key {
            Key::Name(name) if pattern.is_match(name) => {
                let new_name = pattern.replace_all(name, options.replace.as_str());
                debug!(from = %name, to = %new_name, "renaming key");
                Key::from_field(&new_name)
            }
            other => other.clone(),
        }
    });

    Ok(Value::Mapping(renamed))
}
