//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and entry points.
//!
//! ```
//! use graphtype::prelude::*;
//! ```

// Schema types
pub use graphtype_schema::{ParseError, ScalarMap, SchemaDocument, parse_document};

// Codegen entry points
pub use graphtype_codegen::{
    CodegenError, Generator, generate_from_file, generate_from_sdl, generate_from_sdl_with,
    generate_to_file,
};
