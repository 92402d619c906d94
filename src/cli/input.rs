//! Turning JSON text into trees

use super::CliError;
use crate::{Mapping, TreeError, Value, from_json};

/// Parse JSON text into a tree.
pub fn parse_document(text: &str) -> Result<Value, CliError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(json))
}

/// Parse JSON text that must hold an object or an array.
pub fn parse_mapping(text: &str) -> Result<Mapping, CliError> {
    match parse_document(text)? {
        Value::Mapping(map) => Ok(map),
        other => Err(CliError::Tree(TreeError::InvalidArgument(format!(
            "expected a JSON object or array, got {}",
            other.type_name()
        )))),
    }
}
