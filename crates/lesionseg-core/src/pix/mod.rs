//! PIX - The main image container
//!
//! `Pix` holds an 8-bit image with either one (grayscale) or three
//! (interleaved RGB) samples per pixel.
//!
//! # Pixel layout
//!
//! - Samples are stored row-major with no row padding
//! - RGB pixels are interleaved as `R, G, B`
//! - The sample for channel `c` of pixel (x, y) lives at
//!   `(y * width + x) * channels + c`
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod histogram;
mod mask;

pub use histogram::Histogram;
pub use mask::{MASK_BG, MASK_FG};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Sample layout of a [`Pix`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    /// One 8-bit intensity sample per pixel
    Gray = 1,
    /// Three interleaved 8-bit samples per pixel (R, G, B)
    Rgb = 3,
}

impl PixelFormat {
    /// Create a `PixelFormat` from a channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `channels` is not 1 or 3.
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            1 => Ok(PixelFormat::Gray),
            3 => Ok(PixelFormat::Rgb),
            _ => Err(Error::InvalidChannels(channels)),
        }
    }

    /// Number of samples per pixel.
    #[inline]
    pub fn channels(self) -> u32 {
        self as u32
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixData {
    fn sample_len(width: u32, height: u32, format: PixelFormat) -> usize {
        width as usize * height as usize * format.channels() as usize
    }
}

/// PIX - Main image container
///
/// Immutable once built; clones share the same sample buffer.
///
/// # Examples
///
/// ```
/// use lesionseg_core::{Pix, PixelFormat};
///
/// let pix = Pix::new(640, 480, PixelFormat::Gray).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.channels(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        Self::new_filled(width, height, format, 0)
    }

    /// Create a new PIX with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, format: PixelFormat, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = PixData::sample_len(width, height, format);
        Ok(Self::from_data(PixData {
            width,
            height,
            format,
            data: vec![value; len],
        }))
    }

    /// Wrap an already-decoded sample buffer.
    ///
    /// `channels` must be 1 (grayscale) or 3 (interleaved RGB) and
    /// `data.len()` must equal `width * height * channels`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidChannels`] for any other channel count
    /// - [`Error::BufferSize`] if the buffer length does not match
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let format = PixelFormat::from_channels(channels)?;
        let expected = PixData::sample_len(width, height, format);
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(PixData {
            width,
            height,
            format,
            data,
        }))
    }

    fn from_data(data: PixData) -> Self {
        Pix {
            inner: Arc::new(data),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the sample layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.format.channels()
    }

    /// Total number of pixels (not samples).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.width as usize * self.inner.height as usize
    }

    /// Get raw access to the sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a zeroed PIX with the same geometry and format.
    pub fn create_template(&self) -> Self {
        let len = self.inner.data.len();
        Self::from_data(PixData {
            width: self.inner.width,
            height: self.inner.height,
            format: self.inner.format,
            data: vec![0; len],
        })
    }

    /// Check if two PIX have the same width, height and format.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.format == other.inner.format
    }

    /// Fail unless this PIX has the given width and height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on any difference.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if self.inner.width != width || self.inner.height != height {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: (self.inner.width, self.inner.height),
            });
        }
        Ok(())
    }

    /// Fail unless this PIX is single-channel.
    pub fn check_gray(&self) -> Result<()> {
        match self.inner.format {
            PixelFormat::Gray => Ok(()),
            actual => Err(Error::UnsupportedFormat {
                expected: "8-bit grayscale",
                actual,
            }),
        }
    }

    /// Try to take exclusive ownership of the data for mutation.
    ///
    /// Fails (returning `self`) if other clones are still alive.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixMut { inner }),
            Err(inner) => Err(Pix { inner }),
        }
    }

    /// Create a mutable deep copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable PIX
///
/// Exclusively owns its sample buffer. Convert back into a shareable
/// [`Pix`] with `Into<Pix>` once writing is done.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the sample layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.inner.format
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.inner.format.channels()
    }

    /// Get raw access to the sample buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample buffer.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<PixMut> for Pix {
    fn from(pix: PixMut) -> Self {
        Pix::from_data(pix.inner)
    }
}
