pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use scrivener::{DocumentPipeline, DocumentType, FieldValues};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Generates a PDF for `document_type` over the built-in catalog.
pub fn generate_pdf(
    document_type: DocumentType,
    fields: &FieldValues,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = DocumentPipeline::with_defaults().generate_pdf(document_type, fields)?;
    GeneratedPdf::from_bytes(bytes)
}
