//! Color space conversion
//!
//! Normalizes decoded input into the two canonical layouts the engine
//! works with:
//! - 8-bit grayscale for intensity-based algorithms
//! - 8-bit RGB for algorithms that compare color vectors (watershed)
//!
//! Conversions always return a freshly allocated image.

use crate::{ColorError, ColorResult};
use lesionseg_core::{Pix, PixelFormat};

/// Fixed-point BT.601 weights, scaled by 2^14
const GRAY_R: u32 = 4899;
const GRAY_G: u32 = 9617;
const GRAY_B: u32 = 1868;
const GRAY_SHIFT: u32 = 14;

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B, evaluated in 14-bit fixed
/// point with rounding. Equal channels map to themselves.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let v = r as u32 * GRAY_R + g as u32 * GRAY_G + b as u32 * GRAY_B + (1 << (GRAY_SHIFT - 1));
    (v >> GRAY_SHIFT) as u8
}

/// Convert an image to 8-bit grayscale.
///
/// Grayscale input is copied unchanged (the luma formula is not re-applied);
/// RGB input is reduced with [`rgb_to_gray`].
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    let data = match pix.format() {
        PixelFormat::Gray => pix.data().to_vec(),
        PixelFormat::Rgb => pix
            .data()
            .chunks_exact(3)
            .map(|c| rgb_to_gray(c[0], c[1], c[2]))
            .collect(),
    };
    Ok(Pix::from_raw(pix.width(), pix.height(), 1, data)?)
}

/// Convert an image to 8-bit RGB.
///
/// Grayscale samples are replicated into all three channels; RGB input is
/// copied unchanged.
pub fn pix_convert_to_rgb(pix: &Pix) -> ColorResult<Pix> {
    let data = match pix.format() {
        PixelFormat::Gray => pix.data().iter().flat_map(|&v| [v, v, v]).collect(),
        PixelFormat::Rgb => pix.data().to_vec(),
    };
    Ok(Pix::from_raw(pix.width(), pix.height(), 3, data)?)
}

/// Build an 8-bit grayscale image from arbitrary-range samples.
///
/// Samples are min-max normalized: `(v - min) / (max - min) * 255`,
/// truncated toward zero. A constant input maps to all zeros. This is how
/// high-bit-depth sources (e.g. 12/16-bit DICOM pixel data) are brought
/// into the engine's 8-bit domain.
///
/// # Errors
///
/// - [`ColorError::EmptyImage`] if `samples` is empty
/// - [`ColorError::InvalidParameters`] if any sample is NaN or infinite
/// - a core error if `samples.len() != width * height`
pub fn pix_from_samples_normalized(width: u32, height: u32, samples: &[f32]) -> ColorResult<Pix> {
    if samples.is_empty() {
        return Err(ColorError::EmptyImage);
    }
    if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
        return Err(ColorError::InvalidParameters(format!(
            "non-finite sample value {}",
            bad
        )));
    }

    let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
    let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    let data = samples
        .iter()
        .map(|&v| {
            if range > 0.0 {
                ((v - min) / range * 255.0) as u8
            } else {
                0
            }
        })
        .collect();
    Ok(Pix::from_raw(width, height, 1, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_gray_primaries() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
    }

    #[test]
    fn test_rgb_to_gray_equal_channels_identity() {
        for v in 0..=255u8 {
            assert_eq!(rgb_to_gray(v, v, v), v);
        }
    }
}
