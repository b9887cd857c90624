//! Error types for lesionseg-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lesionseg_core::Error),

    /// Color conversion or thresholding error
    #[error("color error: {0}")]
    Color(#[from] lesionseg_color::ColorError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] lesionseg_morph::MorphError),

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
