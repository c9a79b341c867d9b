//! Error types for pixelator-html

use thiserror::Error;

/// Errors raised while constructing table documents
#[derive(Debug, Error)]
pub enum TableError {
    /// Cell pixel dimensions must both be at least 1
    #[error("invalid cell size: {width}x{height}")]
    InvalidCellSize { width: u32, height: u32 },

    /// Column spans must be at least 1
    #[error("invalid column span: {0}")]
    InvalidColspan(u32),
}

/// Result type for table construction
pub type TableResult<T> = Result<T, TableError>;
