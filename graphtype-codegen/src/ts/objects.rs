//! Object, interface, and input object declaration generation.

use graphql_parser::schema::{InputObjectType, InterfaceType, ObjectType};
use graphtype_schema::{ScalarMap, is_operation_root};

use crate::fold::{DefinitionEntry, fold_field, fold_input_value};

/// Folds an object type definition into a structural declaration.
///
/// Operation-root types describe RPC entry points rather than data shapes
/// and fold to the suppression sentinel regardless of their fields.
#[must_use]
pub fn object_entry(object: &ObjectType<'_, String>, scalars: &ScalarMap) -> DefinitionEntry {
    if is_operation_root(&object.name) {
        return DefinitionEntry::Suppressed;
    }

    let members: Vec<String> = object
        .fields
        .iter()
        .map(|field| fold_field(field, scalars))
        .collect();
    DefinitionEntry::Declaration(shape_declaration(
        &object.name,
        &object.implements_interfaces,
        &members,
    ))
}

/// Folds an interface type definition into a structural declaration.
#[must_use]
pub fn interface_entry(
    interface: &InterfaceType<'_, String>,
    scalars: &ScalarMap,
) -> DefinitionEntry {
    let members: Vec<String> = interface
        .fields
        .iter()
        .map(|field| fold_field(field, scalars))
        .collect();
    DefinitionEntry::Declaration(shape_declaration(&interface.name, &[], &members))
}

/// Folds an input object type definition into a structural declaration.
#[must_use]
pub fn input_object_entry(
    input: &InputObjectType<'_, String>,
    scalars: &ScalarMap,
) -> DefinitionEntry {
    let members: Vec<String> = input
        .fields
        .iter()
        .map(|value| fold_input_value(value, scalars))
        .collect();
    DefinitionEntry::Declaration(shape_declaration(&input.name, &[], &members))
}

/// Formats a structural declaration with one tab-indented member per line.
///
/// The extends clause is present only when at least one interface is
/// declared, joined in declared order.
fn shape_declaration(name: &str, interfaces: &[String], members: &[String]) -> String {
    let extends = if interfaces.is_empty() {
        String::new()
    } else {
        format!("extends {} ", interfaces.join(", "))
    };
    let body = members
        .iter()
        .map(|member| format!("\t{member}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("interface {name} {extends}{{\n{body}\n}}")
}
