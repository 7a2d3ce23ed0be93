//! Template definitions: the per-document-type unit of catalog data.

use crate::assembler;
use crate::error::CatalogError;
use crate::paragraph::ParagraphTemplate;
use scrivener_types::DocumentType;
use serde::{Deserialize, Serialize};

/// Ordered paragraph templates plus the set of caller-supplied fields they
/// need.
///
/// Invariant (enforced by [`Registry::validate`](crate::Registry::validate)):
/// every placeholder referenced by any paragraph is either a required field
/// or one of the assembler's derived fields. Closing lines and signature
/// blocks are ordinary entries here, never special-cased code.
///
/// Definitions are built fluently:
///
/// ```
/// use scrivener_template::TemplateDefinition;
///
/// let notice = TemplateDefinition::new("Notice")
///     .require("recipient")
///     .paragraph("NOTICE\n\nTo {recipient}.");
/// assert_eq!(notice.paragraphs().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    title: String,
    required_fields: Vec<String>,
    paragraphs: Vec<ParagraphTemplate>,
}

impl TemplateDefinition {
    /// Creates an empty definition with a human-readable title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            required_fields: Vec::new(),
            paragraphs: Vec::new(),
        }
    }

    /// Declares a caller-supplied field. Declaration order fixes which
    /// missing field an assembly error names first.
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }

    /// Appends a paragraph template.
    pub fn paragraph(mut self, source: impl Into<String>) -> Self {
        self.paragraphs.push(ParagraphTemplate::new(source));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    /// True when `name` is in the required-field set.
    pub fn requires(&self, name: &str) -> bool {
        self.required_fields.iter().any(|f| f == name)
    }

    pub fn paragraphs(&self) -> &[ParagraphTemplate] {
        &self.paragraphs
    }

    /// Per-definition half of the registry self-check.
    pub(crate) fn check(&self, document_type: DocumentType) -> Result<(), CatalogError> {
        for (i, name) in self.required_fields.iter().enumerate() {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(CatalogError::InvalidFieldName {
                    document_type,
                    name: name.clone(),
                });
            }
            if self.required_fields[..i].contains(name) {
                return Err(CatalogError::DuplicateField {
                    document_type,
                    name: name.clone(),
                });
            }
        }

        for (index, template) in self.paragraphs.iter().enumerate() {
            let names = template.placeholders().map_err(|source| {
                CatalogError::MalformedTemplate {
                    document_type,
                    index,
                    source,
                }
            })?;
            for name in names {
                if !self.requires(&name) && !assembler::DERIVED_FIELDS.contains(&name.as_str()) {
                    return Err(CatalogError::UndefinedPlaceholder {
                        document_type,
                        index,
                        name,
                    });
                }
            }
        }
        Ok(())
    }
}
