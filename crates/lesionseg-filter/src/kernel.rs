//! Convolution kernels
//!
//! Defines the kernel structure used by [`crate::convolve`].

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
///
/// Values are stored row-major. The horizontal center is the middle column.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

/// Gaussian sigma used for a smoothing window of `size` pixels.
///
/// `0.3 * ((size - 1) * 0.5 - 1) + 0.8`, which grows linearly with the
/// window so that the kernel tails stay small at the window edge.
///
/// The formula applies to every size. OpenCV's `GaussianBlur` with
/// `sigma = 0` substitutes fixed tables for sizes 3, 5 and 7, so results
/// there can differ slightly from OpenCV.
pub fn block_sigma(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

impl Kernel {
    /// Create a zero-filled kernel with the given dimensions.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Create a kernel from a row-major slice of values.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                kernel.data.len(),
                width,
                height,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a normalized one-row Gaussian kernel of odd `size`.
    ///
    /// Used twice (horizontally, then vertically) for separable smoothing.
    pub fn gaussian_row(size: u32, sigma: f32) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian size must be odd, got {}",
                size
            )));
        }
        if !(sigma > 0.0) {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian sigma must be positive, got {}",
                sigma
            )));
        }
        let mut kernel = Self::new(size, 1)?;
        let half = (size / 2) as f32;
        let denom = 2.0 * sigma * sigma;
        for (i, v) in kernel.data.iter_mut().enumerate() {
            let d = i as f32 - half;
            *v = (-(d * d) / denom).exp();
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Create a normalized square Gaussian kernel of odd `size`.
    pub fn gaussian(size: u32, sigma: f32) -> FilterResult<Self> {
        let row = Self::gaussian_row(size, sigma)?;
        let mut kernel = Self::new(size, size)?;
        for y in 0..size as usize {
            for x in 0..size as usize {
                kernel.data[y * size as usize + x] = row.data[y] * row.data[x];
            }
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel summing to zero is left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
