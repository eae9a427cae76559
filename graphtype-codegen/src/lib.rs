//! # Graphtype Codegen
//!
//! TypeScript declaration generation from GraphQL SDL schemas.
//!
//! This crate provides:
//! - A post-order fold from the parsed SDL document to declaration text
//! - Per-kind TypeScript declaration formatting
//! - Entry points for strings, files, and build script integration

pub mod emit;
pub mod error;
pub mod fold;
pub mod generator;
pub mod ts;

pub use error::CodegenError;
pub use generator::Generator;

use graphtype_schema::ScalarMap;

/// Generates TypeScript declarations from an SDL schema string.
///
/// # Arguments
/// * `sdl` - SDL schema content
///
/// # Returns
/// Generated declaration text as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_sdl(sdl: &str) -> Result<String, CodegenError> {
    generate_from_sdl_with(sdl, ScalarMap::default())
}

/// Generates TypeScript declarations from an SDL schema string using a
/// custom scalar map.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_sdl_with(sdl: &str, scalars: ScalarMap) -> Result<String, CodegenError> {
    let document = graphtype_schema::parse_document(sdl)?;
    let generator = Generator::with_scalars(&document, scalars);
    Ok(generator.generate())
}

/// Generates TypeScript declarations from an SDL schema file.
///
/// # Arguments
/// * `path` - Path to the SDL schema file
///
/// # Returns
/// Generated declaration text as a string.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl)
}

/// Generates TypeScript declarations from an SDL schema file and writes
/// them to an output file.
///
/// Intended for build scripts that keep a `.d.ts` file in sync with a
/// checked-in schema.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or writing fails.
pub fn generate_to_file(
    schema_path: &std::path::Path,
    out_path: &std::path::Path,
) -> Result<(), CodegenError> {
    let declarations = generate_from_file(schema_path)?;
    std::fs::write(out_path, declarations)?;
    Ok(())
}
