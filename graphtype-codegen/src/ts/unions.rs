//! Union declaration generation.

use graphql_parser::schema::UnionType;

use crate::fold::DefinitionEntry;

/// Folds a union type definition into a union alias of its member names.
///
/// Declared member order is preserved.
#[must_use]
pub fn union_entry(union_type: &UnionType<'_, String>) -> DefinitionEntry {
    DefinitionEntry::Declaration(format!(
        "type {} = {}",
        union_type.name,
        union_type.types.join(" | ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_parser::schema::{Definition, TypeDefinition};

    #[test]
    fn test_union_entry() {
        let doc = graphtype_schema::parse_document("union SearchResult = User | Post\n")
            .expect("Failed to parse");
        let Definition::TypeDefinition(TypeDefinition::Union(union_type)) = &doc.definitions[0]
        else {
            panic!("expected union definition");
        };

        let entry = union_entry(union_type);
        assert_eq!(
            entry,
            DefinitionEntry::Declaration("type SearchResult = User | Post".to_string())
        );
    }
}
