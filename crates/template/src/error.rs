//! Error types for catalog validation and document assembly.

use scrivener_types::DocumentType;
use thiserror::Error;

/// Syntax defects in a single paragraph template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateSyntaxError {
    #[error("unterminated placeholder")]
    UnterminatedPlaceholder,
    #[error("empty placeholder")]
    EmptyPlaceholder,
    #[error("invalid character {found:?} in placeholder name")]
    InvalidPlaceholderChar { found: char },
    #[error("unmatched '}}' outside a placeholder")]
    UnmatchedBrace,
}

/// Failures surfaced by one assembly call.
///
/// Assembly either fully succeeds or returns one of these; no partially
/// rendered document is ever exposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// The identifier is outside the registry's closed set.
    #[error("unknown document type '{0}'")]
    UnknownDocumentType(String),
    /// A required field is absent, or blank after trimming whitespace.
    #[error("missing required field '{0}'")]
    MissingField(String),
    /// A template references a placeholder outside the definition's
    /// required-field set; a registry-construction defect that surfaces at
    /// assembly time when the startup self-check was skipped.
    #[error("template references undefined placeholder '{0}'")]
    UndefinedPlaceholder(String),
    /// A field is present but its value cannot be used as configured
    /// (e.g. no four-digit year in `issueDate` under
    /// [`YearPolicy::FromIssueDate`](crate::YearPolicy::FromIssueDate)).
    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
    /// A paragraph template failed to scan; like `UndefinedPlaceholder`,
    /// only reachable when the self-check was skipped.
    #[error("malformed paragraph template: {0}")]
    MalformedTemplate(#[from] TemplateSyntaxError),
}

/// Failures detected while constructing or validating a registry.
///
/// These are configuration defects, caught by the startup self-check rather
/// than per assembly call.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("template for '{document_type}' paragraph {index} is malformed: {source}")]
    MalformedTemplate {
        document_type: DocumentType,
        index: usize,
        #[source]
        source: TemplateSyntaxError,
    },
    #[error("template for '{document_type}' paragraph {index} references undefined placeholder '{name}'")]
    UndefinedPlaceholder {
        document_type: DocumentType,
        index: usize,
        name: String,
    },
    #[error("definition for '{document_type}' declares required field '{name}' more than once")]
    DuplicateField {
        document_type: DocumentType,
        name: String,
    },
    #[error("definition for '{document_type}' declares invalid required field name '{name}'")]
    InvalidFieldName {
        document_type: DocumentType,
        name: String,
    },
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
