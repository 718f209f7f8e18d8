//! Error types for the JSON input boundary.

use thiserror::Error;

/// Errors that can occur when fusion input or options arrive as JSON.
///
/// The typed API (`fuse_forward`, `fuse_inverse`, `Fuser`) is total and never
/// produces these.
#[derive(Error, Debug)]
pub enum TurduckenError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON value was neither a string nor an array of strings.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout turducken.
pub type Result<T> = std::result::Result<T, TurduckenError>;
