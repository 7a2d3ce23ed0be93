use thiserror::Error;

/// Errors that can occur while rendering an assembled document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("render error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(message: &str) -> Self {
        RenderError::Other(message.to_string())
    }
}

impl From<String> for RenderError {
    fn from(message: String) -> Self {
        RenderError::Other(message)
    }
}
