//! Binary thresholding
//!
//! Converts an 8-bit grayscale image into a 0/255 mask:
//! - Fixed threshold, inverted (dark pixels are foreground)
//! - Otsu's method, inverted (automatic global threshold)
//! - Adaptive mean and Gaussian thresholds, non-inverted (local contrast)
//!
//! The inverted variants target lesions that are darker than the
//! surrounding tissue. The adaptive variants keep the normal polarity
//! because they respond to local contrast rather than global darkness.

use crate::{ColorError, ColorResult};
use lesionseg_core::{MASK_BG, Pix};
use lesionseg_filter::{block_sigma, box_blur, gaussian_blur};

/// Method for adaptive threshold computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveMethod {
    /// Use mean of local window
    Mean,
    /// Use Gaussian-weighted mean
    Gaussian,
}

/// Options for adaptive thresholding
#[derive(Debug, Clone)]
pub struct AdaptiveThresholdOptions {
    /// Size of the local window (odd, at least 3)
    pub block_size: u32,
    /// Constant subtracted from the local statistic
    pub c: i32,
    /// Method for computing the local statistic
    pub method: AdaptiveMethod,
}

impl Default for AdaptiveThresholdOptions {
    fn default() -> Self {
        Self {
            block_size: 35,
            c: 5,
            method: AdaptiveMethod::Mean,
        }
    }
}

impl AdaptiveThresholdOptions {
    /// Create options for the given method with default window and offset
    pub fn new(method: AdaptiveMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Set the window size
    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    /// Set the offset constant
    pub fn with_c(mut self, c: i32) -> Self {
        self.c = c;
        self
    }

    /// Check the window size.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `block_size` is even or
    /// smaller than 3.
    pub fn validate(&self) -> ColorResult<()> {
        if self.block_size < 3 || self.block_size % 2 == 0 {
            return Err(ColorError::InvalidParameters(format!(
                "adaptive block size must be odd and >= 3, got {}",
                self.block_size
            )));
        }
        Ok(())
    }
}

/// Result of Otsu thresholding
#[derive(Debug, Clone)]
pub struct OtsuThreshold {
    /// Inverted binary mask (`v <= threshold` is foreground)
    pub mask: Pix,
    /// Threshold that was applied
    pub threshold: u8,
    /// True when the histogram had a single occupied level
    pub degenerate: bool,
}

/// Inverted fixed threshold.
///
/// Pixels with `v <= threshold` become 255, all others 0.
pub fn threshold_manual_inv(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    Ok(pix.mask_from_gray(|v| v <= threshold)?)
}

/// Compute Otsu's threshold for a grayscale image
///
/// Scans every split point `t` in 0..=255, with class 0 holding `v <= t`,
/// and returns the `t` that maximizes the inter-class variance
/// `w0 * w1 * (mu0 - mu1)^2`. Ties keep the lowest `t`.
///
/// Returns `None` when only one intensity level is present, since no split
/// separates anything.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<Option<u8>> {
    let hist = pix.gray_histogram()?;
    let total = hist.total();
    let sum_all: f64 = hist
        .counts()
        .iter()
        .enumerate()
        .map(|(level, &c)| level as f64 * c as f64)
        .sum();

    let mut w0: u64 = 0;
    let mut sum0 = 0.0f64;
    let mut best: Option<(f64, u8)> = None;

    for (level, &count) in hist.counts().iter().enumerate() {
        w0 += count;
        sum0 += level as f64 * count as f64;
        if w0 == 0 {
            continue;
        }
        let w1 = total - w0;
        if w1 == 0 {
            break;
        }

        let mu0 = sum0 / w0 as f64;
        let mu1 = (sum_all - sum0) / w1 as f64;
        let between = w0 as f64 * w1 as f64 * (mu0 - mu1) * (mu0 - mu1);

        if best.is_none_or(|(b, _)| between > b) {
            best = Some((between, level as u8));
        }
    }

    Ok(best.map(|(_, t)| t))
}

/// Inverted threshold at Otsu's level.
///
/// For a single-level (degenerate) histogram the threshold is reported as
/// 0 and the mask is entirely background.
pub fn threshold_otsu_inv(pix: &Pix) -> ColorResult<OtsuThreshold> {
    match compute_otsu_threshold(pix)? {
        Some(threshold) => {
            log::debug!("otsu threshold = {}", threshold);
            Ok(OtsuThreshold {
                mask: threshold_manual_inv(pix, threshold)?,
                threshold,
                degenerate: false,
            })
        }
        None => {
            log::debug!("otsu histogram is single-level; returning empty mask");
            Ok(OtsuThreshold {
                mask: pix.mask_from_gray(|_| false)?,
                threshold: 0,
                degenerate: true,
            })
        }
    }
}

/// Apply adaptive thresholding
///
/// The local statistic is computed over a `block_size × block_size`
/// border-replicated window and rounded to 8 bits; a pixel becomes 255
/// when `v > local - c`. The comparison is done in `i64`, so any `c` is
/// accepted.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for an even or too small
/// window, and a core error for RGB input.
pub fn adaptive_threshold(pix: &Pix, options: &AdaptiveThresholdOptions) -> ColorResult<Pix> {
    options.validate()?;
    pix.check_gray()?;

    let local = match options.method {
        AdaptiveMethod::Mean => box_blur(pix, options.block_size)?,
        AdaptiveMethod::Gaussian => {
            gaussian_blur(pix, options.block_size, block_sigma(options.block_size))?
        }
    };

    let c = options.c;
    let data = pix
        .data()
        .iter()
        .zip(local.data())
        .map(|(&v, &m)| {
            if v as i64 > m as i64 - c as i64 {
                lesionseg_core::MASK_FG
            } else {
                MASK_BG
            }
        })
        .collect();
    Ok(Pix::from_raw(pix.width(), pix.height(), 1, data)?)
}

/// Adaptive threshold against the local arithmetic mean.
pub fn adaptive_threshold_mean(pix: &Pix, block_size: u32, c: i32) -> ColorResult<Pix> {
    let options = AdaptiveThresholdOptions::new(AdaptiveMethod::Mean)
        .with_block_size(block_size)
        .with_c(c);
    adaptive_threshold(pix, &options)
}

/// Adaptive threshold against the local Gaussian-weighted mean.
pub fn adaptive_threshold_gaussian(pix: &Pix, block_size: u32, c: i32) -> ColorResult<Pix> {
    let options = AdaptiveThresholdOptions::new(AdaptiveMethod::Gaussian)
        .with_block_size(block_size)
        .with_c(c);
    adaptive_threshold(pix, &options)
}
