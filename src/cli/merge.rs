//! Merge several JSON documents

use tracing::info;

use super::{CliError, parse_mapping};
use crate::{MergePolicy, Value, merge_with};

/// Source name that reads a document from stdin
pub const STDIN_SOURCE: &str = "-";

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// JSON documents, merged left to right
    pub documents: Vec<String>,
    /// Keep existing values and only fill in missing keys
    pub only_undefined: bool,
}

impl MergeOptions {
    pub fn policy(&self) -> MergePolicy {
        if self.only_undefined {
            MergePolicy::OnlyUndefined
        } else {
            MergePolicy::Overwrite
        }
    }
}

/// Check merge sources before any of them is read
///
/// Stdin can be drained only once, so [`STDIN_SOURCE`] may appear at most
/// once in `sources`.
pub fn check_sources(sources: &[String]) -> Result<(), CliError> {
    if sources.iter().filter(|s| *s == STDIN_SOURCE).count() > 1 {
        return Err(CliError::RepeatedStdin);
    }
    Ok(())
}

/// Execute a merge over every document in `options`
pub fn execute_merge(options: &MergeOptions) -> Result<Value, CliError> {
    if options.documents.is_empty() {
        return Err(CliError::NoInput);
    }

    let trees = options
        .documents
        .iter()
        .map(|text| parse_mapping(text))
        .collect::<Result<Vec<_>, _>>()?;

    info!(documents = trees.len(), policy = ?options.policy(), "merging documents");
    Ok(Value::Mapping(merge_with(options.policy(), &trees)))
}
