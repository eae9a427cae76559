//! SDL document access.
//!
//! Parsing is delegated to the `graphql-parser` crate; this module only
//! wraps the entry point and names the handful of document-level facts the
//! generator needs.

use crate::error::ParseError;
use graphql_parser::schema::Document;

/// A parsed SDL document, owned and detached from the source text.
pub type SchemaDocument = Document<'static, String>;

/// Names of the operation-root types.
///
/// These describe RPC entry points rather than data shapes and are excluded
/// from generated output.
pub const OPERATION_ROOT_TYPES: [&str; 3] = ["Query", "Mutation", "Subscription"];

/// Returns true if `name` is one of the operation-root type names.
#[must_use]
pub fn is_operation_root(name: &str) -> bool {
    OPERATION_ROOT_TYPES.contains(&name)
}

/// Parses an SDL schema from a string.
///
/// # Arguments
/// * `sdl` - SDL schema content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the SDL is syntactically malformed.
pub fn parse_document(sdl: &str) -> Result<SchemaDocument, ParseError> {
    Ok(graphql_parser::parse_schema::<String>(sdl)?.into_static())
}
