//! Declaration generator.

use graphtype_schema::{ScalarMap, SchemaDocument};

use crate::emit;
use crate::fold::fold_definition;

/// Generator for TypeScript declarations from a parsed SDL document.
///
/// The document is borrowed read-only for the duration of the fold; the
/// generator never mutates it.
#[derive(Debug)]
pub struct Generator<'a> {
    document: &'a SchemaDocument,
    scalars: ScalarMap,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default scalar map.
    #[must_use]
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self {
            document,
            scalars: ScalarMap::default(),
        }
    }

    /// Creates a generator with a custom scalar map.
    #[must_use]
    pub fn with_scalars(document: &'a SchemaDocument, scalars: ScalarMap) -> Self {
        Self { document, scalars }
    }

    /// Generates the declaration text for the whole document.
    ///
    /// Definitions fold in source order; suppressed definitions leave no
    /// trace in the output.
    #[must_use]
    pub fn generate(&self) -> String {
        tracing::debug!(
            definitions = self.document.definitions.len(),
            "folding schema document"
        );

        emit::render(
            self.document
                .definitions
                .iter()
                .map(|definition| fold_definition(definition, &self.scalars)),
        )
    }
}
