use crate::metrics::{encode_winansi, wrap_line};
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use scrivener_render_core::{DocumentRenderer, PageStyle, RenderError, TextStyle};
use std::io::Write;

/// One laid-out slot of vertical space.
enum Line {
    Text(String),
    ParagraphBreak,
}

/// Renders assembled paragraphs to PDF with the built-in Helvetica font.
///
/// Layout follows the classic form conventions: greedy word wrap at the
/// right margin, hard `\n` breaks honoured, a fixed gap between paragraphs
/// and a page break whenever the baseline would cross the bottom margin.
/// Everything is buffered in memory and serialised on `finish`.
pub struct PdfRenderer<W: Write> {
    page_style: PageStyle,
    text_style: TextStyle,
    title: String,
    lines: Vec<Line>,
    writer: Option<W>,
}

impl<W: Write> PdfRenderer<W> {
    pub fn new() -> Self {
        Self::with_styles(PageStyle::default(), TextStyle::default())
    }

    pub fn with_styles(page_style: PageStyle, text_style: TextStyle) -> Self {
        PdfRenderer {
            page_style,
            text_style,
            title: String::new(),
            lines: Vec::new(),
            writer: None,
        }
    }

    /// Assigns a baseline to every buffered line, breaking pages at the
    /// bottom margin. Always yields at least one (possibly blank) page.
    fn paginate(&self) -> Vec<Vec<(f32, String)>> {
        let top = self.page_style.height - self.page_style.margin_top - self.text_style.leading;
        let bottom = self.page_style.margin_bottom;
        let mut pages = Vec::new();
        let mut current: Vec<(f32, String)> = Vec::new();
        let mut y = top;
        for line in &self.lines {
            match line {
                Line::ParagraphBreak => y -= self.text_style.paragraph_spacing,
                Line::Text(text) => {
                    if y < bottom {
                        pages.push(std::mem::take(&mut current));
                        y = top;
                    }
                    if !text.is_empty() {
                        current.push((y, text.clone()));
                    }
                    y -= self.text_style.leading;
                }
            }
        }
        pages.push(current);
        pages
    }

    fn page_content(&self, lines: &[(f32, String)]) -> Vec<Operation> {
        let x = self.page_style.margin_left;
        let mut operations = Vec::with_capacity(lines.len() * 5);
        for (y, text) in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), self.text_style.font_size.into()],
            ));
            operations.push(Operation::new("Td", vec![x.into(), (*y).into()]));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(encode_winansi(text), StringFormat::Literal)],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        operations
    }

    fn build_document(&self) -> Result<Document, RenderError> {
        let pages = self.paginate();
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in &pages {
            let content = Content {
                operations: self.page_content(page),
            };
            let encoded = content
                .encode()
                .map_err(|e| RenderError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.0.into(),
                    0.0.into(),
                    self.page_style.width.into(),
                    self.page_style.height.into(),
                ],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(self.title.clone()),
            "Producer" => Object::string_literal("scrivener"),
        });
        doc.trailer.set("Info", info_id);
        debug!("laid out {} page(s)", pages.len());
        Ok(doc)
    }
}

impl<W: Write> Default for PdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DocumentRenderer<W> for PdfRenderer<W> {
    fn begin_document(&mut self, writer: W, title: &str) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err("document already started".into());
        }
        self.title = title.to_string();
        self.writer = Some(writer);
        Ok(())
    }

    fn write_paragraph(&mut self, text: &str) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err("document not started".into());
        }
        if !self.lines.is_empty() {
            self.lines.push(Line::ParagraphBreak);
        }
        let max_width = self.page_style.content_width();
        for hard_line in text.split('\n') {
            let wrapped = wrap_line(hard_line, self.text_style.font_size, max_width);
            if wrapped.is_empty() {
                // A blank source line still occupies vertical space.
                self.lines.push(Line::Text(String::new()));
            } else {
                self.lines.extend(wrapped.into_iter().map(Line::Text));
            }
        }
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("document not started".to_string()))?;
        let mut doc = self.build_document()?;
        doc.save_to(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(writer)
    }
}
