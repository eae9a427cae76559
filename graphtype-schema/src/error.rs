//! Error types for SDL document access.

use thiserror::Error;

/// Error type for SDL parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Syntax error reported by the underlying SDL parser.
    #[error("SDL parse error: {0}")]
    Sdl(#[from] graphql_parser::schema::ParseError),
}
