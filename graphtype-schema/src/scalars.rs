//! Scalar resolution.
//!
//! This module maps GraphQL scalar names onto TypeScript primitive names.
//! Unknown names pass through unchanged, so resolution is total: anything
//! that is not a built-in scalar is treated as a reference to a type
//! declared elsewhere in the same document or maintained by hand.

use std::collections::{HashMap, HashSet};

/// Built-in GraphQL scalars and their TypeScript primitives.
const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("ID", "string"),
    ("String", "string"),
    ("Boolean", "boolean"),
    ("Int", "number"),
    ("Float", "number"),
];

/// Scalar name for which generated output defers to a hand-written type.
const DEFAULT_OPAQUE_SCALAR: &str = "Date";

/// Read-only mapping from GraphQL scalar names to TypeScript types.
///
/// The map is fixed at construction time; independent conversions can share
/// clones of it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarMap {
    scalars: HashMap<String, String>,
    opaque: HashSet<String>,
}

impl Default for ScalarMap {
    fn default() -> Self {
        Self {
            scalars: BUILTIN_SCALARS
                .iter()
                .map(|&(name, ts)| (name.to_string(), ts.to_string()))
                .collect(),
            opaque: HashSet::from([DEFAULT_OPAQUE_SCALAR.to_string()]),
        }
    }
}

impl ScalarMap {
    /// Creates the default map: the five built-in scalars plus the `Date`
    /// opaque entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a named type reference to its TypeScript spelling.
    ///
    /// Built-in (and custom-mapped) scalars resolve to their primitive;
    /// every other name is returned unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.scalars.get(name).map_or(name, String::as_str)
    }

    /// Returns true if the scalar's definition should be suppressed in
    /// favor of a hand-written declaration.
    #[must_use]
    pub fn is_opaque(&self, name: &str) -> bool {
        self.opaque.contains(name)
    }

    /// Adds a custom scalar mapping.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, ts_type: impl Into<String>) -> Self {
        self.scalars.insert(name.into(), ts_type.into());
        self
    }

    /// Marks a scalar name as opaque.
    #[must_use]
    pub fn with_opaque(mut self, name: impl Into<String>) -> Self {
        self.opaque.insert(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtins() {
        let scalars = ScalarMap::new();
        assert_eq!(scalars.resolve("ID"), "string");
        assert_eq!(scalars.resolve("String"), "string");
        assert_eq!(scalars.resolve("Boolean"), "boolean");
        assert_eq!(scalars.resolve("Int"), "number");
        assert_eq!(scalars.resolve("Float"), "number");
    }

    #[test]
    fn test_resolve_passthrough() {
        let scalars = ScalarMap::new();
        assert_eq!(scalars.resolve("User"), "User");
        assert_eq!(scalars.resolve("Date"), "Date");
        assert_eq!(scalars.resolve("JSON"), "JSON");
    }

    #[test]
    fn test_default_opaque() {
        let scalars = ScalarMap::new();
        assert!(scalars.is_opaque("Date"));
        assert!(!scalars.is_opaque("JSON"));
    }

    #[test]
    fn test_with_scalar() {
        let scalars = ScalarMap::new().with_scalar("DateTime", "string");
        assert_eq!(scalars.resolve("DateTime"), "string");
        // Built-ins are unaffected.
        assert_eq!(scalars.resolve("Int"), "number");
    }

    #[test]
    fn test_with_opaque() {
        let scalars = ScalarMap::new().with_opaque("BigInt");
        assert!(scalars.is_opaque("BigInt"));
        assert!(scalars.is_opaque("Date"));
    }
}
