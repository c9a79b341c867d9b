//! Top-level error type

use thiserror::Error;

/// Errors surfaced by the orchestration layer
///
/// Each wrapped error is fatal for the image being processed but not
/// for a batch; the orchestrator reports it and moves on to the next
/// input.
#[derive(Debug, Error)]
pub enum PixelatorError {
    /// Image loading or pre-processing failed
    #[error(transparent)]
    Io(#[from] pixelator_io::IoError),

    /// Quadtree construction failed
    #[error(transparent)]
    Quadtree(#[from] pixelator_quadtree::QuadtreeError),

    /// Table document construction failed
    #[error(transparent)]
    Table(#[from] pixelator_html::TableError),
}

/// Result type for orchestration operations
pub type PixelatorResult<T> = Result<T, PixelatorError>;
