use crate::error::PipelineError;
use log::{debug, info};
use scrivener_render_core::{render_document, PageStyle, TextStyle};
use scrivener_render_lopdf::PdfRenderer;
use scrivener_render_text::TextRenderer;
use scrivener_template::{Assembler, AssemblyOptions, Registry, YearPolicy};
use scrivener_types::{DocumentType, FieldValues, RenderedDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// The full document pipeline: template catalog, assembler and renderers
/// behind one synchronous facade.
///
/// A pipeline is cheap to build and holds no open resources, so callers can
/// keep one per catalog for the life of the process.
pub struct DocumentPipeline {
    assembler: Assembler,
    page_style: PageStyle,
    text_style: TextStyle,
}

impl DocumentPipeline {
    /// A pipeline over the built-in catalog with default styles.
    pub fn with_defaults() -> Self {
        DocumentPipeline {
            assembler: Assembler::new(Registry::builtin()),
            page_style: PageStyle::default(),
            text_style: TextStyle::default(),
        }
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn registry(&self) -> &Registry {
        self.assembler.registry()
    }

    /// Resolves a document's templates against `fields`, producing the
    /// ordered paragraphs and suggested filename. Pure except for reading
    /// the clock when the year policy asks for it.
    pub fn assemble(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
    ) -> Result<RenderedDocument, PipelineError> {
        Ok(self.assembler.assemble(document_type, fields)?)
    }

    /// Like [`assemble`](Self::assemble), but with a caller-chosen filename
    /// stem instead of the document type id.
    pub fn assemble_as(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
        stem: &str,
    ) -> Result<RenderedDocument, PipelineError> {
        Ok(self.assembler.assemble_as(document_type, fields, stem)?)
    }

    /// Renders an assembled document to PDF bytes.
    pub fn render_pdf(&self, document: &RenderedDocument) -> Result<Vec<u8>, PipelineError> {
        let title = self.title_for(document.document_type);
        let renderer = PdfRenderer::with_styles(self.page_style, self.text_style);
        let bytes = render_document(renderer, document, Vec::new(), &title)?;
        debug!("rendered {} as {} PDF bytes", document.filename, bytes.len());
        Ok(bytes)
    }

    /// Renders an assembled document as plain text, paragraphs separated by
    /// blank lines.
    pub fn render_text(&self, document: &RenderedDocument) -> Result<String, PipelineError> {
        let title = self.title_for(document.document_type);
        let out = render_document(TextRenderer::new(), document, Vec::new(), &title)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Assembles and renders in one step.
    pub fn generate_pdf(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
    ) -> Result<Vec<u8>, PipelineError> {
        let document = self.assemble(document_type, fields)?;
        self.render_pdf(&document)
    }

    /// Assembles, renders and writes the PDF into `output_dir` (created when
    /// missing) under the document's suggested filename. Returns the path
    /// written.
    pub fn generate_pdf_file<P: AsRef<Path>>(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
        output_dir: P,
    ) -> Result<PathBuf, PipelineError> {
        let document = self.assemble(document_type, fields)?;
        let bytes = self.render_pdf(&document)?;
        fs::create_dir_all(output_dir.as_ref())?;
        let path = output_dir.as_ref().join(&document.filename);
        fs::write(&path, bytes)?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    /// As [`generate_pdf_file`](Self::generate_pdf_file), but writes the
    /// plain-text rendition with a `.txt` extension.
    pub fn generate_text_file<P: AsRef<Path>>(
        &self,
        document_type: DocumentType,
        fields: &FieldValues,
        output_dir: P,
    ) -> Result<PathBuf, PipelineError> {
        let document = self.assemble(document_type, fields)?;
        let text = self.render_text(&document)?;
        fs::create_dir_all(output_dir.as_ref())?;
        let path = output_dir
            .as_ref()
            .join(&document.filename)
            .with_extension("txt");
        fs::write(&path, text)?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    /// Extracts the text of an existing PDF, page texts joined in order.
    /// This is the preview path for uploaded documents.
    pub fn preview_text(&self, pdf_bytes: &[u8]) -> Result<String, PipelineError> {
        let extracted = scrivener_extract::extract_text(pdf_bytes)?;
        debug!("extracted text from {} page(s)", extracted.page_count());
        Ok(extracted.concatenated())
    }

    /// The PDF metadata title: the catalog title when the type is known,
    /// otherwise its id.
    fn title_for(&self, document_type: DocumentType) -> String {
        self.assembler
            .registry()
            .get(document_type)
            .map(|definition| definition.title().to_string())
            .unwrap_or_else(|_| document_type.id().to_string())
    }
}

/// Fluent construction of a [`DocumentPipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    registry: Option<Registry>,
    year_policy: YearPolicy,
    page_style: Option<PageStyle>,
    text_style: Option<TextStyle>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Uses `registry` instead of the built-in catalog. The registry is
    /// validated by [`build`](Self::build).
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Parses and validates a catalog from its JSON form.
    pub fn with_catalog_json(mut self, json: &str) -> Result<Self, PipelineError> {
        self.registry = Some(Registry::from_json(json)?);
        Ok(self)
    }

    pub fn with_catalog_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let json = fs::read_to_string(path)?;
        self.with_catalog_json(&json)
    }

    /// Controls how the derived `year` placeholder is resolved.
    pub fn with_year_policy(mut self, policy: YearPolicy) -> Self {
        self.year_policy = policy;
        self
    }

    pub fn with_page_style(mut self, style: PageStyle) -> Self {
        self.page_style = Some(style);
        self
    }

    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let registry = self.registry.unwrap_or_else(Registry::builtin);
        registry.validate()?;
        let options = AssemblyOptions {
            year_policy: self.year_policy,
        };
        Ok(DocumentPipeline {
            assembler: Assembler::with_options(registry, options),
            page_style: self.page_style.unwrap_or_default(),
            text_style: self.text_style.unwrap_or_default(),
        })
    }
}
