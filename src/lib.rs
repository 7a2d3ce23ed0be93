//! Scrivener generates court and office documents from a catalog of
//! paragraph templates.
//!
//! Each document type (warrants, petitions, reports) is described by a
//! [`TemplateDefinition`]: the fields it requires and an ordered list of
//! paragraph templates with `{placeholder}` markers. The [`Assembler`]
//! resolves those templates against caller-supplied [`FieldValues`] into a
//! [`RenderedDocument`], which the rendering backends turn into a PDF or a
//! plain-text file. [`DocumentPipeline`] ties the stages together behind
//! one facade.
//!
//! # Quick start
//!
//! ```
//! use scrivener::{DocumentPipeline, DocumentType, FieldValues};
//!
//! # fn main() -> Result<(), scrivener::PipelineError> {
//! let pipeline = DocumentPipeline::with_defaults();
//! let fields = FieldValues::new().with("content", "The premises were found in good order.");
//!
//! let document = pipeline.assemble(DocumentType::Report, &fields)?;
//! assert_eq!(document.paragraphs.len(), 1);
//!
//! let pdf = pipeline.render_pdf(&document)?;
//! assert!(pdf.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, PipelineBuilder};

pub use scrivener_extract as extract;
pub use scrivener_render_core::{
    render_document, DocumentRenderer, PageStyle, RenderError, TextStyle,
};
pub use scrivener_render_lopdf::PdfRenderer;
pub use scrivener_render_text::TextRenderer;
pub use scrivener_template::{
    AssembleError, Assembler, AssemblyOptions, CatalogError, ParagraphTemplate, Registry,
    TemplateDefinition, TemplateSyntaxError, YearPolicy,
};
pub use scrivener_types::{DocumentType, FieldValues, ParseDocumentTypeError, RenderedDocument};
