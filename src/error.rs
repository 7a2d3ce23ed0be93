use scrivener_extract::ExtractError;
use scrivener_render_core::RenderError;
use scrivener_template::{AssembleError, CatalogError};
use thiserror::Error;

/// Top-level error for the pipeline, aggregating every stage it drives.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("assembly error: {0}")]
    Assembly(#[from] AssembleError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
