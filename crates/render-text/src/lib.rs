//! Plain-text rendering backend.
//!
//! [`TextRenderer`] mirrors the PDF backend's paragraph semantics without
//! any layout: hard line breaks are kept as-is and paragraphs are separated
//! by one blank line. Useful for previews, diffing and golden-file tests.

use itertools::Itertools;
use scrivener_render_core::{DocumentRenderer, RenderError};
use std::io::Write;

pub struct TextRenderer<W: Write> {
    paragraphs: Vec<String>,
    writer: Option<W>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new() -> Self {
        TextRenderer {
            paragraphs: Vec::new(),
            writer: None,
        }
    }
}

impl<W: Write> Default for TextRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DocumentRenderer<W> for TextRenderer<W> {
    fn begin_document(&mut self, writer: W, _title: &str) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err("document already started".into());
        }
        self.writer = Some(writer);
        Ok(())
    }

    fn write_paragraph(&mut self, text: &str) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err("document not started".into());
        }
        self.paragraphs.push(text.to_string());
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("document not started".to_string()))?;
        let body = self.paragraphs.iter().join("\n\n");
        writer.write_all(body.as_bytes())?;
        if !body.is_empty() {
            writer.write_all(b"\n")?;
        }
        Ok(writer)
    }
}
