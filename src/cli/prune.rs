//! Filter and strip commands

use super::{CliError, parse_document, parse_mapping};
use crate::{Value, filter_truthy, strip_sentinel};

/// Drop every falsy entry from a JSON document
pub fn execute_filter(input: &str) -> Result<Value, CliError> {
    let map = parse_mapping(input)?;
    Ok(Value::Mapping(filter_truthy(&map)))
}

/// Drop every entry equal to the string `sentinel` from a JSON document
///
/// Scalar documents are accepted and follow [`strip_sentinel`].
pub fn execute_strip(input: &str, sentinel: &str) -> Result<Value, CliError> {
    let document = parse_document(input)?;
    Ok(strip_sentinel(&document, &Value::from(sentinel)))
}
