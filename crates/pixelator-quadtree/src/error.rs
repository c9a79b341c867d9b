//! Error types for pixelator-quadtree

use thiserror::Error;

/// Errors that can occur while building or querying a quadtree
#[derive(Debug, Error)]
pub enum QuadtreeError {
    /// Core library error (invalid region, out-of-bounds point)
    #[error("core error: {0}")]
    Core(#[from] pixelator_core::Error),

    /// Invalid build parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for quadtree operations
pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
