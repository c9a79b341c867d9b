//! I/O error types
//!
//! Provides a unified error type for image loading and pre-processing.
//! Decoder errors are wrapped so that callers only handle one type.

use thiserror::Error;

/// Error type for image input operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoder rejected the image data
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// An error from the core library (e.g. inconsistent buffer shape)
    #[error("core error: {0}")]
    Core(#[from] pixelator_core::Error),
}

/// Convenience alias for I/O results
pub type IoResult<T> = Result<T, IoError>;
