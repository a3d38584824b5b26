//! Error types for uvshadow-filter

use thiserror::Error;

/// Errors that can occur during channel operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] uvshadow_core::Error),

    /// Contrast normalization found no dynamic range to stretch
    #[error("degenerate range: image is a flat {value}, nothing to stretch")]
    DegenerateRange { value: u8 },

    /// Gamma preset lookup missed
    #[error("unknown gamma preset: {0:?}")]
    UnknownPreset(String),

    /// Invalid parameter value
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
