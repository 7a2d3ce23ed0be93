//! Text extraction from existing PDF files.
//!
//! This is the reading half of the pipeline: given the bytes of a PDF (for
//! example one uploaded for preview), it pulls the text off every page in
//! order. Extraction is per page and lenient: a page whose content stream
//! cannot be decoded yields an empty string and a warning rather than
//! failing the whole document.

use log::warn;
use lopdf::Document;
use thiserror::Error;

/// Errors raised while reading a PDF for extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("not a valid PDF: {0}")]
    InvalidPdf(String),

    #[error("PDF is encrypted")]
    Encrypted,
}

/// Page texts of one PDF, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub pages: Vec<String>,
}

impl ExtractedText {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined into one string, in page order.
    pub fn concatenated(&self) -> String {
        self.pages.join("\n")
    }

    /// True when no page yielded any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }
}

/// Parses `bytes` as a PDF and extracts the text of every page.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::InvalidPdf(e.to_string()))?;
    if doc.is_encrypted() {
        return Err(ExtractError::Encrypted);
    }
    let page_count = doc.get_pages().len();
    let mut pages = Vec::with_capacity(page_count);
    for page_num in 1..=page_count {
        match doc.extract_text(&[page_num as u32]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!("no text extracted from page {page_num}: {e}");
                pages.push(String::new());
            }
        }
    }
    Ok(ExtractedText { pages })
}
