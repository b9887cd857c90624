//! Convolution and smoothing
//!
//! All filters here work on 8-bit grayscale images and treat the image
//! border by replication: a sample requested at `x < 0` reads column 0,
//! at `x >= width` reads column `width - 1`, and likewise for rows.
//! Results are rounded to the nearest integer and saturated to 0..=255.

use crate::{FilterError, FilterResult, Kernel};
use lesionseg_core::Pix;

#[inline]
fn replicate(i: i64, len: u32) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

fn check_window(size: u32) -> FilterResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "window size must be odd and positive, got {}",
            size
        )));
    }
    Ok(())
}

/// Local arithmetic mean over a `size × size` window.
///
/// Sums are accumulated exactly in `u64`, first along rows and then
/// along columns, so the result is independent of summation order and
/// windows larger than the image are fine.
///
/// # Errors
///
/// Returns an error for RGB input or an even/zero `size`.
pub fn box_blur(pix: &Pix, size: u32) -> FilterResult<Pix> {
    pix.check_gray()?;
    check_window(size)?;

    let w = pix.width();
    let h = pix.height();
    let half = (size / 2) as i64;
    let src = pix.data();

    // Horizontal window sums
    let mut row_sums = vec![0u64; src.len()];
    for y in 0..h as usize {
        let row = &src[y * w as usize..(y + 1) * w as usize];
        let out = &mut row_sums[y * w as usize..(y + 1) * w as usize];
        let mut acc: u64 = (-half..=half)
            .map(|dx| row[replicate(dx, w)] as u64)
            .sum();
        out[0] = acc;
        for x in 1..w as i64 {
            acc += row[replicate(x + half, w)] as u64;
            acc -= row[replicate(x - half - 1, w)] as u64;
            out[x as usize] = acc;
        }
    }

    // Vertical window sums of the horizontal sums
    let area = size as u64 * size as u64;
    let mut out_pix = pix.create_template().to_mut();
    let dst = out_pix.data_mut();
    for x in 0..w as usize {
        let at = |y: i64| row_sums[replicate(y, h) * w as usize + x];
        let mut acc: u64 = (-half..=half).map(&at).sum();
        dst[x] = round_div(acc, area);
        for y in 1..h as i64 {
            acc += at(y + half);
            acc -= at(y - half - 1);
            dst[y as usize * w as usize + x] = round_div(acc, area);
        }
    }

    Ok(out_pix.into())
}

#[inline]
fn round_div(sum: u64, area: u64) -> u8 {
    ((2 * sum + area) / (2 * area)).min(255) as u8
}

/// Separable convolution: `row` kernel horizontally, then `col` vertically.
///
/// `row` must be one pixel high and `col` is read along its width, so the
/// same one-row kernel can be passed for both passes.
pub fn convolve_separable(pix: &Pix, row: &Kernel, col: &Kernel) -> FilterResult<Pix> {
    pix.check_gray()?;
    if row.height() != 1 || col.height() != 1 {
        return Err(FilterError::InvalidKernel(
            "separable convolution expects one-row kernels".to_string(),
        ));
    }

    let w = pix.width();
    let h = pix.height();
    let src = pix.data();

    let rcx = row.center_x() as i64;
    let mut tmp = vec![0f32; src.len()];
    for y in 0..h as usize {
        let line = &src[y * w as usize..(y + 1) * w as usize];
        for x in 0..w as i64 {
            let mut acc = 0f32;
            for (k, &kv) in row.data().iter().enumerate() {
                acc += kv * line[replicate(x + k as i64 - rcx, w)] as f32;
            }
            tmp[y * w as usize + x as usize] = acc;
        }
    }

    let ccx = col.center_x() as i64;
    let mut out_pix = pix.create_template().to_mut();
    let dst = out_pix.data_mut();
    for y in 0..h as i64 {
        for x in 0..w as usize {
            let mut acc = 0f32;
            for (k, &kv) in col.data().iter().enumerate() {
                acc += kv * tmp[replicate(y + k as i64 - ccx, h) * w as usize + x];
            }
            dst[y as usize * w as usize + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out_pix.into())
}

/// Gaussian-weighted local average over a `size × size` window.
///
/// # Errors
///
/// Returns an error for RGB input, an even/zero `size`, or `sigma <= 0`.
pub fn gaussian_blur(pix: &Pix, size: u32, sigma: f32) -> FilterResult<Pix> {
    check_window(size)?;
    let kernel = Kernel::gaussian_row(size, sigma)?;
    convolve_separable(pix, &kernel, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicate() {
        assert_eq!(replicate(-3, 5), 0);
        assert_eq!(replicate(2, 5), 2);
        assert_eq!(replicate(9, 5), 4);
    }

    #[test]
    fn test_round_div() {
        assert_eq!(round_div(4, 9), 0);
        assert_eq!(round_div(5, 9), 1);
        assert_eq!(round_div(255 * 9, 9), 255);
        let area = 65535u64 * 65535;
        assert_eq!(round_div(255 * area, area), 255);
    }
}
