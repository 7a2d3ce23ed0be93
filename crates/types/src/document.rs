use crate::DocumentType;
use serde::Serialize;

/// The fully substituted, ordered paragraph output of one assembly call,
/// ready for a rendering backend.
///
/// Created by the assembler, immediately consumed by a renderer; the core
/// never retains one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    /// The type this document was assembled from.
    pub document_type: DocumentType,
    /// Resolved paragraphs in definition order. Paragraphs may contain
    /// hard line breaks (`\n`); renderers honor them.
    pub paragraphs: Vec<String>,
    /// Suggested output filename, `.pdf` extension included.
    pub filename: String,
}
