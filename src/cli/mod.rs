//! CLI support for bough
//!
//! Each subcommand of the `bough` binary is a function here taking parsed
//! options and JSON text, so the commands can be driven without a terminal.

mod input;
mod logging;
mod merge;
mod prune;
mod records;
mod rename;

pub use input::{parse_document, parse_mapping};
pub use logging::{LOG_ENV, build_env_filter, init_logging, level_for};
pub use merge::{MergeOptions, STDIN_SOURCE, check_sources, execute_merge};
pub use prune::{execute_filter, execute_strip};
pub use records::execute_records;
pub use rename::{RenameOptions, execute_rename};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Tree operation error
    Tree(crate::TreeError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// Invalid key pattern
    Pattern(regex::Error),
    /// No input provided
    NoInput,
    /// Stdin named more than once as a source
    RepeatedStdin,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Tree(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Pattern(e) => write!(f, "Invalid pattern: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
            CliError::RepeatedStdin => write!(f, "Stdin ('-') can only be given once."),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Tree(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Pattern(e) => Some(e),
            CliError::NoInput | CliError::RepeatedStdin => None,
        }
    }
}

impl From<crate::TreeError> for CliError {
    fn from(e: crate::TreeError) -> Self {
        CliError::Tree(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<regex::Error> for CliError {
    fn from(e: regex::Error) -> Self {
        CliError::Pattern(e)
    }
}
