//! Raster backend errors.

use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to load font: {0}")]
    Font(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Surface has no pixels (not configured or zero-sized)")]
    EmptySurface,
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
