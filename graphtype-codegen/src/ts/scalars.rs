//! Scalar declaration generation.

use graphql_parser::schema::ScalarType;
use graphtype_schema::ScalarMap;

use crate::fold::DefinitionEntry;

/// Folds a custom scalar definition.
///
/// Opaque scalars are suppressed so a hand-written declaration elsewhere is
/// used instead; every other custom scalar becomes an alias to `any`.
#[must_use]
pub fn scalar_entry(scalar: &ScalarType<'_, String>, scalars: &ScalarMap) -> DefinitionEntry {
    if scalars.is_opaque(&scalar.name) {
        return DefinitionEntry::Suppressed;
    }

    DefinitionEntry::Declaration(format!("type {} = any", scalar.name))
}
