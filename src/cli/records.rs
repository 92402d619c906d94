//! Convert `{key, ...}` records into a keyed object

use super::{CliError, parse_document};
use crate::{Value, records_to_keyed_map};

pub fn execute_records(input: &str) -> Result<Value, CliError> {
    let document = parse_document(input)?;
    Ok(Value::Mapping(records_to_keyed_map(&document)?))
}
