//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] graphtype_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
