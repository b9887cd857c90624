//! lesionseg-color - Color conversion and thresholding
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> grayscale, sample
//!   normalization for high-bit-depth sources
//! - **Thresholding** ([`threshold`]): fixed inverted threshold, Otsu's
//!   method, adaptive mean and Gaussian thresholds

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use lesionseg_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space functions
pub use colorspace::{
    pix_convert_to_gray, pix_convert_to_rgb, pix_from_samples_normalized, rgb_to_gray,
};

// Re-export threshold functions
pub use threshold::{
    // Types
    AdaptiveMethod,
    AdaptiveThresholdOptions,
    OtsuThreshold,
    // Functions
    adaptive_threshold,
    adaptive_threshold_gaussian,
    adaptive_threshold_mean,
    compute_otsu_threshold,
    threshold_manual_inv,
    threshold_otsu_inv,
};
