//! TypeScript declaration generation modules.

pub mod enums;
pub mod objects;
pub mod scalars;
pub mod unions;
