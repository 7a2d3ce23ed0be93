//! PDF rendering backend built on `lopdf`.
//!
//! [`PdfRenderer`] implements the `DocumentRenderer` trait from
//! `scrivener-render-core`, laying paragraphs out on A4 pages with the
//! built-in Helvetica font, greedy word wrapping and automatic page breaks.
//! The whole document is buffered and serialised when `finish` is called.

mod metrics;
mod renderer;

pub use renderer::PdfRenderer;
