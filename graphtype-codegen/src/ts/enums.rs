//! Enum declaration generation.

use graphql_parser::schema::EnumType;

use crate::fold::DefinitionEntry;

/// Folds an enum type definition into a string-literal union alias.
///
/// Declared value order is preserved.
#[must_use]
pub fn enum_entry(enum_type: &EnumType<'_, String>) -> DefinitionEntry {
    let values = enum_type
        .values
        .iter()
        .map(|value| format!("\"{}\"", value.name))
        .collect::<Vec<_>>()
        .join(" | ");

    DefinitionEntry::Declaration(format!("type {} = {}", enum_type.name, values))
}
