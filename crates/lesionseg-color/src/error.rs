//! Error types for lesionseg-color

use thiserror::Error;

/// Errors that can occur during color processing and thresholding
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lesionseg_core::Error),

    /// Filter error from local statistics
    #[error("filter error: {0}")]
    Filter(#[from] lesionseg_filter::FilterError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Empty input
    #[error("empty input: no samples to process")]
    EmptyImage,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
