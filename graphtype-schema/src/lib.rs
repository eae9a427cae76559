//! # Graphtype Schema
//!
//! GraphQL SDL document access and generator configuration.
//!
//! This crate provides:
//! - SDL parsing via the `graphql-parser` crate
//! - The scalar table mapping GraphQL scalars to TypeScript primitives
//! - Operation-root type identification

pub mod document;
pub mod error;
pub mod scalars;

pub use document::{OPERATION_ROOT_TYPES, SchemaDocument, is_operation_root, parse_document};
pub use error::ParseError;
pub use scalars::ScalarMap;
