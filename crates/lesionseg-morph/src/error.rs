//! Error types for lesionseg-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lesionseg_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Input is not a 0/255 mask
    #[error("not a binary mask: found sample value {0}")]
    NotBinary(u8),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
