//! Template registry and document assembly for court forms.
//!
//! This crate is the testable core of the engine. It holds the static
//! catalog of document types and turns `{document type, field values}` into
//! an ordered sequence of resolved paragraphs plus a suggested filename,
//! without performing any I/O.
//!
//! ## Key Abstractions
//!
//! - **`Registry`**: catalog of [`TemplateDefinition`]s keyed by document type
//! - **`TemplateDefinition`**: ordered paragraph templates + required fields
//! - **`ParagraphTemplate`**: a string with `{name}` substitution points
//! - **`Assembler`**: validates fields and renders a [`RenderedDocument`]
//!
//! Rendering backends (PDF, plain text) live in separate crates and consume
//! the assembler's output; nothing here touches a PDF library.

pub mod assembler;
mod catalog;
pub mod definition;
pub mod error;
pub mod paragraph;
pub mod registry;

pub use assembler::{Assembler, AssemblyOptions, YearPolicy, DERIVED_FIELDS, YEAR_FIELD};
pub use definition::TemplateDefinition;
pub use error::{AssembleError, CatalogError, TemplateSyntaxError};
pub use paragraph::ParagraphTemplate;
pub use registry::Registry;
