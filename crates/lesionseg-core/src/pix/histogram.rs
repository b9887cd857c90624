//! Intensity histograms

use super::Pix;
use crate::error::Result;

/// 256-bin intensity histogram of a grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Count of pixels with intensity `level`.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// All 256 bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Total number of pixels counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of bins with a nonzero count.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as f64 * c as f64)
            .sum();
        Some(sum / self.total as f64)
    }
}

impl Pix {
    /// Compute the intensity histogram of a grayscale image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedFormat`] for RGB images.
    pub fn gray_histogram(&self) -> Result<Histogram> {
        self.check_gray()?;
        let mut counts = [0u64; 256];
        for &v in self.data() {
            counts[v as usize] += 1;
        }
        Ok(Histogram {
            counts,
            total: self.data().len() as u64,
        })
    }
}
