//! Post-order fold over the parsed SDL document.
//!
//! Every node is replaced by its already-rewritten textual form, children
//! before parents, until each top-level definition has collapsed into a
//! declaration string or the suppression sentinel. Folded text is final:
//! ancestors only concatenate it, never re-parse it.

use graphql_parser::schema::{Definition, Field, InputValue, Type, TypeDefinition};
use graphtype_schema::ScalarMap;

use crate::ts;

/// A folded type position: the TypeScript spelling plus whether the
/// outermost wrapper in the schema was non-null.
///
/// Only the outermost `!` is tracked. Non-null markers nested inside a
/// list degrade to pass-through of the wrapped type, so `[Post!]` and
/// `[Post]` both fold to `Post[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedType {
    /// TypeScript spelling of the type.
    pub text: String,
    /// True when the schema marked the outermost wrapper `!`.
    pub non_null: bool,
}

/// One top-level definition's folded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionEntry {
    /// A finished TypeScript declaration.
    Declaration(String),
    /// The definition has no counterpart in the generated output.
    Suppressed,
}

impl DefinitionEntry {
    /// Returns true if this entry is the suppression sentinel.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

/// Folds a type reference into its TypeScript spelling.
#[must_use]
pub fn fold_type(ty: &Type<'_, String>, scalars: &ScalarMap) -> FoldedType {
    match ty {
        Type::NamedType(name) => FoldedType {
            text: scalars.resolve(name).to_string(),
            non_null: false,
        },
        Type::ListType(inner) => FoldedType {
            text: format!("{}[]", fold_type(inner, scalars).text),
            non_null: false,
        },
        Type::NonNullType(inner) => FoldedType {
            text: fold_type(inner, scalars).text,
            non_null: true,
        },
    }
}

/// Folds a field definition into a `name: type` member line.
///
/// Schema-nullable becomes optional (`name?: type`), schema-non-null
/// becomes required. Field arguments have no structural counterpart in the
/// output and are discarded.
#[must_use]
pub fn fold_field(field: &Field<'_, String>, scalars: &ScalarMap) -> String {
    member_line(&field.name, &fold_type(&field.field_type, scalars))
}

/// Folds an input value definition into a `name: type` member line.
#[must_use]
pub fn fold_input_value(value: &InputValue<'_, String>, scalars: &ScalarMap) -> String {
    member_line(&value.name, &fold_type(&value.value_type, scalars))
}

fn member_line(name: &str, ty: &FoldedType) -> String {
    let suffix = if ty.non_null { "" } else { "?" };
    format!("{name}{suffix}: {}", ty.text)
}

/// Folds one top-level definition into its definition entry.
///
/// Definitions without a declaration counterpart (schema definitions, type
/// extensions, directive definitions) fold to the suppression sentinel, so
/// structurally valid but unhandled shapes never fail the traversal.
#[must_use]
pub fn fold_definition(definition: &Definition<'_, String>, scalars: &ScalarMap) -> DefinitionEntry {
    match definition {
        Definition::TypeDefinition(type_definition) => {
            fold_type_definition(type_definition, scalars)
        }
        other => {
            tracing::warn!(kind = definition_kind(other), "skipping non-type definition");
            DefinitionEntry::Suppressed
        }
    }
}

fn fold_type_definition(
    definition: &TypeDefinition<'_, String>,
    scalars: &ScalarMap,
) -> DefinitionEntry {
    match definition {
        TypeDefinition::Scalar(scalar) => ts::scalars::scalar_entry(scalar, scalars),
        TypeDefinition::Object(object) => ts::objects::object_entry(object, scalars),
        TypeDefinition::Interface(interface) => ts::objects::interface_entry(interface, scalars),
        TypeDefinition::Union(union_type) => ts::unions::union_entry(union_type),
        TypeDefinition::Enum(enum_type) => ts::enums::enum_entry(enum_type),
        TypeDefinition::InputObject(input) => ts::objects::input_object_entry(input, scalars),
    }
}

fn definition_kind(definition: &Definition<'_, String>) -> &'static str {
    match definition {
        Definition::SchemaDefinition(_) => "schema",
        Definition::TypeDefinition(_) => "type",
        Definition::TypeExtension(_) => "type extension",
        Definition::DirectiveDefinition(_) => "directive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Type<'static, String> {
        Type::NamedType(name.to_string())
    }

    #[test]
    fn test_fold_named_type() {
        let scalars = ScalarMap::new();

        let folded = fold_type(&named("ID"), &scalars);
        assert_eq!(folded.text, "string");
        assert!(!folded.non_null);

        let folded = fold_type(&named("Post"), &scalars);
        assert_eq!(folded.text, "Post");
        assert!(!folded.non_null);
    }

    #[test]
    fn test_fold_non_null_type() {
        let scalars = ScalarMap::new();
        let ty = Type::NonNullType(Box::new(named("Int")));

        let folded = fold_type(&ty, &scalars);
        assert_eq!(folded.text, "number");
        assert!(folded.non_null);
    }

    #[test]
    fn test_fold_list_type() {
        let scalars = ScalarMap::new();
        let ty = Type::ListType(Box::new(named("Post")));

        let folded = fold_type(&ty, &scalars);
        assert_eq!(folded.text, "Post[]");
        assert!(!folded.non_null);
    }

    #[test]
    fn test_fold_non_null_list_of_non_null() {
        // [Post!]! - both wrappers non-null; element nullability collapses.
        let scalars = ScalarMap::new();
        let ty = Type::NonNullType(Box::new(Type::ListType(Box::new(Type::NonNullType(
            Box::new(named("Post")),
        )))));

        let folded = fold_type(&ty, &scalars);
        assert_eq!(folded.text, "Post[]");
        assert!(folded.non_null);
    }

    #[test]
    fn test_fold_nullable_list_of_non_null() {
        // [Post!] - element non-null is discarded, list stays nullable.
        let scalars = ScalarMap::new();
        let ty = Type::ListType(Box::new(Type::NonNullType(Box::new(named("Post")))));

        let folded = fold_type(&ty, &scalars);
        assert_eq!(folded.text, "Post[]");
        assert!(!folded.non_null);
    }

    #[test]
    fn test_fold_nested_lists() {
        let scalars = ScalarMap::new();
        let ty = Type::ListType(Box::new(Type::ListType(Box::new(named("Int")))));

        let folded = fold_type(&ty, &scalars);
        assert_eq!(folded.text, "number[][]");
    }

    #[test]
    fn test_fold_field_nullability_inversion() {
        let sdl = r#"
type User {
    id: ID!
    name: String
    tags: [String!]!
}
"#;

        let doc = graphtype_schema::parse_document(sdl).expect("Failed to parse");
        let scalars = ScalarMap::new();
        let TypeDefinition::Object(object) = type_definition(&doc, 0) else {
            panic!("expected object definition");
        };

        let lines: Vec<String> = object
            .fields
            .iter()
            .map(|field| fold_field(field, &scalars))
            .collect();
        assert_eq!(lines, ["id: string", "name?: string", "tags: string[]"]);
    }

    #[test]
    fn test_fold_field_arguments_discarded() {
        let sdl = r#"
type Query {
    posts(limit: Int, after: ID): [Post!]!
}
"#;

        let doc = graphtype_schema::parse_document(sdl).expect("Failed to parse");
        let scalars = ScalarMap::new();
        let TypeDefinition::Object(object) = type_definition(&doc, 0) else {
            panic!("expected object definition");
        };

        assert_eq!(fold_field(&object.fields[0], &scalars), "posts: Post[]");
    }

    #[test]
    fn test_fold_definition_schema_definition_suppressed() {
        let sdl = r#"
schema {
    query: Query
}

type Query {
    ok: Boolean!
}
"#;

        let doc = graphtype_schema::parse_document(sdl).expect("Failed to parse");
        let scalars = ScalarMap::new();

        let entry = fold_definition(&doc.definitions[0], &scalars);
        assert!(entry.is_suppressed());
    }

    fn type_definition<'a>(
        doc: &'a graphtype_schema::SchemaDocument,
        index: usize,
    ) -> &'a TypeDefinition<'static, String> {
        match &doc.definitions[index] {
            Definition::TypeDefinition(type_definition) => type_definition,
            other => panic!("expected type definition, got {other:?}"),
        }
    }
}
