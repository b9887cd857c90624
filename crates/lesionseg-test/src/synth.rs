//! Synthetic test images
//!
//! Deterministic stand-ins for radiographs: flat fields, dark round
//! lesions on bright tissue, and smooth sin/cos intensity landscapes.

use crate::error::{TestError, TestResult};
use lesionseg_core::{Pix, PixelFormat};

fn build(
    name: &'static str,
    width: u32,
    height: u32,
    channels: u32,
    data: Vec<u8>,
) -> TestResult<Pix> {
    Pix::from_raw(width, height, channels, data)
        .map_err(|source| TestError::Synthesis { name, source })
}

fn gray_from_fn<F>(name: &'static str, width: u32, height: u32, f: F) -> TestResult<Pix>
where
    F: Fn(u32, u32) -> u8,
{
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    build(name, width, height, 1, data)
}

/// Replicate a grayscale image into three identical RGB channels.
pub fn gray_to_rgb(pix: &Pix) -> TestResult<Pix> {
    let data = pix.data().iter().flat_map(|&v| [v, v, v]).collect();
    build("gray_to_rgb", pix.width(), pix.height(), 3, data)
}

/// Flat image of a single intensity.
pub fn uniform(width: u32, height: u32, format: PixelFormat, value: u8) -> TestResult<Pix> {
    Pix::new_filled(width, height, format, value)
        .map_err(|source| TestError::Synthesis {
            name: "uniform",
            source,
        })
}

/// Dark filled disk on a bright background (grayscale).
///
/// A pixel belongs to the disk when its center lies within `radius` of
/// `(cx, cy)`.
pub fn dark_disk(
    width: u32,
    height: u32,
    cx: f32,
    cy: f32,
    radius: f32,
    disk: u8,
    background: u8,
) -> TestResult<Pix> {
    gray_from_fn("dark_disk", width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            disk
        } else {
            background
        }
    })
}

/// Number of pixels [`dark_disk`] paints with the disk value.
pub fn disk_area(width: u32, height: u32, cx: f32, cy: f32, radius: f32) -> usize {
    let mut n = 0;
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                n += 1;
            }
        }
    }
    n
}

/// Left half `left`, right half `right` (split at `width / 2`).
pub fn two_level(width: u32, height: u32, left: u8, right: u8) -> TestResult<Pix> {
    gray_from_fn("two_level", width, height, |x, _| {
        if x < width / 2 { left } else { right }
    })
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn horizontal_ramp(width: u32, height: u32) -> TestResult<Pix> {
    let span = width.saturating_sub(1).max(1) as f32;
    gray_from_fn("horizontal_ramp", width, height, |x, _| {
        (x as f32 * 255.0 / span).round() as u8
    })
}

/// Smooth wavy landscape built from sums of sines and cosines.
pub fn wavy(width: u32, height: u32) -> TestResult<Pix> {
    gray_from_fn("wavy", width, height, |x, y| {
        let fi = y as f32;
        let fj = x as f32;
        let f = 128.0
            + 26.3 * (0.0438 * fi).sin()
            + 33.4 * (0.0712 * fi).cos()
            + 18.6 * (0.0561 * fj).sin()
            + 23.6 * (0.0327 * fj).cos();
        f.clamp(0.0, 255.0) as u8
    })
}
