//! lesionseg-filter - Image smoothing
//!
//! This crate provides the local-statistic filters used by adaptive
//! thresholding:
//!
//! - Convolution kernels (row, Gaussian)
//! - Border-replicated box blur (exact local mean)
//! - Border-replicated separable convolution and Gaussian blur

pub mod convolve;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, block_sigma};

pub use convolve::{box_blur, convolve_separable, gaussian_blur};
