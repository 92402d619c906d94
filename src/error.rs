/// Errors raised by tree operations.
///
/// The core operations are total over well-formed trees; these errors cover
/// malformed input handed to them or produced by a caller's callback.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeError {
    /// A value had a shape the operation or callback cannot handle
    InvalidArgument(String),

    /// A list-only operation was given a mapping with named keys
    UnsupportedKeys {
        operation: &'static str,
        found: String,
    },

    /// Converting to or from a typed structure failed
    Conversion(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TreeError::UnsupportedKeys { operation, found } => write!(
                f,
                "{} requires a list-like mapping with integer keys only, found key '{}'",
                operation, found
            ),
            TreeError::Conversion(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

impl From<serde_json::Error> for TreeError {
    fn from(e: serde_json::Error) -> Self {
        TreeError::Conversion(e.to_string())
    }
}
