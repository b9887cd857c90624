//! Binary mask helpers
//!
//! A mask is a grayscale `Pix` holding only [`MASK_BG`] and [`MASK_FG`].
//! Operations here treat any nonzero sample as foreground on input and
//! always emit clean 0/255 output.

use super::{Pix, PixMut, PixelFormat};
use crate::error::Result;

/// Background sample value of a mask
pub const MASK_BG: u8 = 0;
/// Foreground sample value of a mask
pub const MASK_FG: u8 = 255;

impl Pix {
    /// Create an all-background mask.
    pub fn new_mask(width: u32, height: u32) -> Result<Pix> {
        Pix::new_filled(width, height, PixelFormat::Gray, MASK_BG)
    }

    /// Build a mask from a per-sample predicate over a grayscale image.
    ///
    /// Samples for which `is_fg` returns true become [`MASK_FG`].
    pub fn mask_from_gray<F>(&self, is_fg: F) -> Result<Pix>
    where
        F: Fn(u8) -> bool,
    {
        self.check_gray()?;
        let data = self
            .data()
            .iter()
            .map(|&v| if is_fg(v) { MASK_FG } else { MASK_BG })
            .collect();
        Pix::from_raw(self.width(), self.height(), 1, data)
    }

    /// True if this is a grayscale image containing only 0 and 255.
    pub fn is_binary_mask(&self) -> bool {
        self.format() == PixelFormat::Gray
            && self.data().iter().all(|&v| v == MASK_BG || v == MASK_FG)
    }

    /// Number of nonzero samples.
    pub fn count_foreground(&self) -> usize {
        self.data().iter().filter(|&&v| v != MASK_BG).count()
    }

    /// True if every sample is zero.
    pub fn is_all_background(&self) -> bool {
        self.data().iter().all(|&v| v == MASK_BG)
    }

    /// Saturating per-sample subtraction `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] or
    /// [`crate::Error::UnsupportedFormat`] if the operands differ.
    pub fn subtract(&self, other: &Pix) -> Result<Pix> {
        self.check_gray()?;
        other.check_gray()?;
        other.check_dimensions(self.width(), self.height())?;
        let mut out: PixMut = self.to_mut();
        for (d, &s) in out.data_mut().iter_mut().zip(other.data()) {
            *d = d.saturating_sub(s);
        }
        Ok(out.into())
    }
}
