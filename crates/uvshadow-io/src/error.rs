//! Error types for uvshadow-io

use thiserror::Error;

/// Errors that can occur reading or writing raster files
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] uvshadow_core::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode error
    #[error("decode error: {0}")]
    Decode(String),

    /// Image encode error
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
