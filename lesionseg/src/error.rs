//! Error types for the segmentation orchestrator

use thiserror::Error;

/// Errors that can occur while running the segmentation methods
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lesionseg_core::Error),

    /// Color conversion or thresholding error
    #[error("color error: {0}")]
    Color(#[from] lesionseg_color::ColorError),

    /// Region growing or watershed error
    #[error("region error: {0}")]
    Region(#[from] lesionseg_region::RegionError),

    /// Unrecognized method name
    #[error("unknown segmentation method: {0}")]
    UnknownMethod(String),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
