use crate::error::RenderError;
use scrivener_types::RenderedDocument;
use std::io::Write;

/// A streaming sink for assembled paragraphs.
///
/// The lifecycle is fixed: `begin_document` hands the renderer its output
/// writer, `write_paragraph` is called once per paragraph in document order,
/// and `finish` flushes everything and returns the writer. Calling the
/// methods out of order is an error, not a panic.
pub trait DocumentRenderer<W: Write> {
    /// Starts a new document on `writer`. `title` is advisory metadata and
    /// backends that have nowhere to put it may ignore it.
    fn begin_document(&mut self, writer: W, title: &str) -> Result<(), RenderError>;

    /// Appends one paragraph. Embedded `\n` characters are honoured as hard
    /// line breaks within the paragraph.
    fn write_paragraph(&mut self, text: &str) -> Result<(), RenderError>;

    /// Completes the document and returns the writer it was built into.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

/// Drives `renderer` over `document`, writing the output into `writer`.
///
/// This is the one place that knows the renderer call sequence; callers that
/// hold a [`RenderedDocument`] should prefer it over driving the trait by
/// hand.
pub fn render_document<W, R>(
    renderer: R,
    document: &RenderedDocument,
    writer: W,
    title: &str,
) -> Result<W, RenderError>
where
    W: Write,
    R: DocumentRenderer<W>,
{
    let mut renderer = Box::new(renderer);
    renderer.begin_document(writer, title)?;
    for paragraph in &document.paragraphs {
        renderer.write_paragraph(paragraph)?;
    }
    renderer.finish()
}
