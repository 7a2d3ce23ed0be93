//! Core rendering abstractions shared by every output backend.
//!
//! This crate defines the [`DocumentRenderer`] trait that backends such as
//! `scrivener-render-lopdf` and `scrivener-render-text` implement, the
//! [`RenderError`] type they report through, and the page and text styles
//! that control layout. It deliberately knows nothing about any concrete
//! output format.

pub mod error;
pub mod traits;
pub mod types;

pub use error::RenderError;
pub use traits::{render_document, DocumentRenderer};
pub use types::{PageStyle, TextStyle, MM_TO_PT};
