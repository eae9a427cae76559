//! # Graphtype
//!
//! TypeScript type declaration generation from GraphQL SDL schemas.
//!
//! Graphtype turns a schema written in the GraphQL Schema Definition
//! Language into TypeScript declarations, so build pipelines get
//! compile-time types mirroring an API schema without calling that API at
//! build time.
//!
//! ## Quick Start
//!
//! ```
//! use graphtype::prelude::*;
//!
//! let sdl = "type User { id: ID! name: String }";
//! let declarations = generate_from_sdl(sdl)?;
//! assert_eq!(
//!     declarations,
//!     "export interface User {\n\tid: string\n\tname?: string\n}"
//! );
//! # Ok::<(), graphtype::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - SDL document access and scalar configuration
//! - [`codegen`] - document fold and TypeScript declaration emission

pub mod prelude;

/// SDL document access and scalar configuration.
pub mod schema {
    pub use graphtype_schema::*;
}

/// TypeScript declaration generation.
pub mod codegen {
    pub use graphtype_codegen::*;
}
