//! Error types for pixelator-core
//!
//! Provides a unified error type for the core data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Region with zero width or height
    #[error("invalid region: {width}x{height}")]
    InvalidRegion { width: u32, height: u32 },

    /// Raster with zero width or height
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Row stride too small to hold a row of samples
    #[error("invalid stride: {stride} bytes for width {width}")]
    InvalidStride { stride: usize, width: u32 },

    /// Buffer length inconsistent with stride and height
    #[error("buffer length {len} does not match stride {stride} x height {height}")]
    BufferSize {
        len: usize,
        stride: usize,
        height: u32,
    },

    /// Point outside the image extent
    #[error("point out of bounds: ({x}, {y})")]
    OutOfBounds { x: u32, y: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
