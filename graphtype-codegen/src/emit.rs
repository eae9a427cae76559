//! Declaration emission.
//!
//! The last stage of the pipeline: the ordered definition entries are
//! filtered and joined into the final declaration text.

use crate::fold::DefinitionEntry;

/// Visibility marker prefixed to every surviving declaration.
const EXPORT_PREFIX: &str = "export ";

/// Separator between declarations.
const DECLARATION_SEPARATOR: &str = "\n\n";

/// Renders the ordered definition entries into final declaration text.
///
/// Suppressed entries are dropped, the remainder keeps its order, each
/// survivor is prefixed with the export marker, and declarations are
/// separated by a blank line. An empty sequence yields an empty string.
#[must_use]
pub fn render<I>(entries: I) -> String
where
    I: IntoIterator<Item = DefinitionEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            DefinitionEntry::Declaration(declaration) => {
                Some(format!("{EXPORT_PREFIX}{declaration}"))
            }
            DefinitionEntry::Suppressed => None,
        })
        .collect::<Vec<_>>()
        .join(DECLARATION_SEPARATOR)
}
