//! The document assembler: field validation and paragraph substitution.

use crate::error::AssembleError;
use crate::paragraph::RenderFailure;
use crate::registry::Registry;
use chrono::{Datelike, Local, NaiveDate};
use log::debug;
use scrivener_types::{DocumentType, FieldValues, RenderedDocument};
use std::sync::Arc;

/// The field name the assembler derives instead of the caller.
pub const YEAR_FIELD: &str = "year";

/// Fields templates may reference without declaring them required.
pub const DERIVED_FIELDS: [&str; 1] = [YEAR_FIELD];

/// Field the year is extracted from under [`YearPolicy::FromIssueDate`].
const ISSUE_DATE_FIELD: &str = "issueDate";

/// Where the `{year}` value of closing lines comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearPolicy {
    /// Year of the system clock at assembly time.
    #[default]
    SystemClock,
    /// First four-digit run in the `issueDate` field value
    /// (`"7th April 1878"` yields `"1878"`).
    FromIssueDate,
    /// A fixed year, for deterministic output.
    Fixed(i32),
}

/// Per-assembler configuration.
#[derive(Debug, Clone, Default)]
pub struct AssemblyOptions {
    pub year_policy: YearPolicy,
}

/// Validates field values against a definition and renders the document.
///
/// Assembly performs no I/O and touches no shared mutable state; the only
/// ambient inputs are clock reads for the filename date and the default
/// year policy. The registry is held behind an `Arc`, so assemblers are
/// cheap to clone across sessions.
#[derive(Debug, Clone)]
pub struct Assembler {
    registry: Arc<Registry>,
    options: AssemblyOptions,
}

impl Assembler {
    pub fn new(registry: Registry) -> Self {
        Self::with_options(registry, AssemblyOptions::default())
    }

    pub fn with_options(registry: Registry, options: AssemblyOptions) -> Self {
        Self {
            registry: Arc::new(registry),
            options,
        }
    }

    /// Builds on an already shared registry.
    pub fn from_shared(registry: Arc<Registry>, options: AssemblyOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// Assembles a document with the suggested filename
    /// `<document-type-id>-<YYYY-MM-DD>.pdf`.
    pub fn assemble(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
    ) -> Result<RenderedDocument, AssembleError> {
        let filename = suggested_filename(document_type, Local::now().date_naive());
        self.assemble_into(document_type, fields, filename)
    }

    /// Assembles a document under a caller-supplied filename stem, which is
    /// slugified before the `.pdf` extension is appended.
    pub fn assemble_as(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
        stem: &str,
    ) -> Result<RenderedDocument, AssembleError> {
        let mut slug = slug::slugify(stem);
        if slug.is_empty() {
            slug = document_type.id().to_string();
        }
        self.assemble_into(document_type, fields, format!("{slug}.pdf"))
    }

    fn assemble_into(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
        filename: String,
    ) -> Result<RenderedDocument, AssembleError> {
        let definition = self.registry.get(document_type)?;

        for name in definition.required_fields() {
            if fields.is_blank(name) {
                return Err(AssembleError::MissingField(name.clone()));
            }
        }

        // Pre-flight every placeholder so a defective definition surfaces as
        // a structured error even when the startup self-check was skipped,
        // and so the derived year is only resolved when referenced.
        let mut needs_year = false;
        for template in definition.paragraphs() {
            for name in template.placeholders()? {
                if definition.requires(&name) {
                    continue;
                }
                if name == YEAR_FIELD {
                    needs_year = true;
                } else {
                    return Err(AssembleError::UndefinedPlaceholder(name));
                }
            }
        }

        let year = if needs_year {
            Some(self.resolve_year(fields)?)
        } else {
            None
        };

        let mut paragraphs = Vec::with_capacity(definition.paragraphs().len());
        for template in definition.paragraphs() {
            let rendered = template
                .render(|name| {
                    if definition.requires(name) {
                        fields.get(name)
                    } else if name == YEAR_FIELD {
                        year.as_deref()
                    } else {
                        None
                    }
                })
                .map_err(|failure| match failure {
                    RenderFailure::Syntax(e) => AssembleError::MalformedTemplate(e),
                    RenderFailure::Unresolved(name) => AssembleError::UndefinedPlaceholder(name),
                })?;
            paragraphs.push(rendered);
        }

        debug!(
            "assembled '{document_type}' ({} paragraphs) as {filename}",
            paragraphs.len()
        );
        Ok(RenderedDocument {
            document_type,
            paragraphs,
            filename,
        })
    }

    fn resolve_year(&self, fields: &FieldValues) -> Result<String, AssembleError> {
        match self.options.year_policy {
            YearPolicy::SystemClock => Ok(Local::now().year().to_string()),
            YearPolicy::Fixed(year) => Ok(year.to_string()),
            YearPolicy::FromIssueDate => {
                let value =
                    fields
                        .get(ISSUE_DATE_FIELD)
                        .ok_or_else(|| AssembleError::InvalidField {
                            field: ISSUE_DATE_FIELD.to_string(),
                            reason: "year extraction needs an issueDate value".to_string(),
                        })?;
                extract_year(value)
                    .map(str::to_string)
                    .ok_or_else(|| AssembleError::InvalidField {
                        field: ISSUE_DATE_FIELD.to_string(),
                        reason: format!("no four-digit year in '{value}'"),
                    })
            }
        }
    }
}

/// Deterministic default filename: document-type id plus the current date.
pub fn suggested_filename(document_type: DocumentType, date: NaiveDate) -> String {
    format!("{}-{}.pdf", document_type.id(), date.format("%Y-%m-%d"))
}

/// First maximal run of exactly four ASCII digits, if any.
fn extract_year(value: &str) -> Option<&str> {
    value
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
}
