//! Pixel access functions
//!
//! Checked and unchecked accessors for single pixels. Grayscale accessors
//! read the first (only) sample; RGB accessors require a 3-channel image.

use super::{Pix, PixMut, PixelFormat};
use crate::error::{Error, Result};

#[inline]
fn sample_index(width: u32, channels: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * channels as usize
}

impl Pix {
    /// Get the first sample of pixel (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the first sample of pixel (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[sample_index(self.width(), self.channels(), x, y)]
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` for out-of-bounds coordinates or non-RGB images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.format() != PixelFormat::Rgb || x >= self.width() || y >= self.height() {
            return None;
        }
        let i = sample_index(self.width(), 3, x, y);
        let d = self.data();
        Some((d[i], d[i + 1], d[i + 2]))
    }
}

impl PixMut {
    /// Get the first sample of pixel (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the first sample of pixel (x, y) without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[sample_index(self.width(), self.channels(), x, y)]
    }

    /// Set every sample of pixel (x, y) to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set every sample of pixel (x, y) to `val` without bounds checking.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let channels = self.channels() as usize;
        let i = sample_index(self.width(), self.channels(), x, y);
        self.data_mut()[i..i + channels].fill(val);
    }

    /// Set RGB values at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for grayscale images and
    /// [`Error::IndexOutOfBounds`] for coordinates outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.format() != PixelFormat::Rgb {
            return Err(Error::UnsupportedFormat {
                expected: "8-bit RGB",
                actual: self.format(),
            });
        }
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: sample_index(self.width(), 1, x, y),
                len: self.width() as usize * self.height() as usize,
            });
        }
        let i = sample_index(self.width(), 3, x, y);
        let d = self.data_mut();
        d[i] = r;
        d[i + 1] = g;
        d[i + 2] = b;
        Ok(())
    }
}
