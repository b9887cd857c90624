//! Integer label maps
//!
//! [`Labels`] is the working grid shared by connected-component labeling
//! and watershed flooding. Positive values name regions, 0 means
//! unlabeled, and [`WATERSHED_BOUNDARY`] marks pixels where two regions
//! meet.

use crate::error::{RegionError, RegionResult};
use lesionseg_core::{MASK_BG, MASK_FG, Pix};
use std::collections::BTreeMap;

/// Label assigned to pixels reached by two different regions during flooding
pub const WATERSHED_BOUNDARY: i32 = -1;

/// Row-major grid of `i32` labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    width: u32,
    height: u32,
    data: Vec<i32>,
}

impl Labels {
    /// Create a grid filled with `value`.
    pub fn new_filled(width: u32, height: u32, value: i32) -> RegionResult<Self> {
        if width == 0 || height == 0 {
            return Err(lesionseg_core::Error::InvalidDimension { width, height }.into());
        }
        Ok(Labels {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    /// Create a grid of zeros (unlabeled).
    pub fn new(width: u32, height: u32) -> RegionResult<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Wrap existing row-major label data.
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> RegionResult<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 {
            return Err(lesionseg_core::Error::InvalidDimension { width, height }.into());
        }
        if data.len() != expected {
            return Err(RegionError::InvalidParameters(format!(
                "label data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Labels {
            width,
            height,
            data,
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get raw label data
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get mutable raw label data
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Get the label at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the label at (x, y). Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, label: i32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = label;
        }
    }

    /// Largest label value present (0 for an all-unlabeled grid)
    pub fn max_label(&self) -> i32 {
        self.data.iter().copied().max().unwrap_or(0).max(0)
    }

    /// Pixel count per label, including 0 and [`WATERSHED_BOUNDARY`].
    pub fn counts(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.data {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Label with the most pixels among labels strictly greater than `min`.
    ///
    /// Ties go to the lowest label. Returns `None` when no such label exists.
    pub fn largest_label_above(&self, min: i32) -> Option<i32> {
        let mut best: Option<(i32, usize)> = None;
        for (label, count) in self.counts().into_iter().filter(|&(l, _)| l > min) {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Mask with 255 where the label equals `label`.
    pub fn mask_of(&self, label: i32) -> RegionResult<Pix> {
        let data = self
            .data
            .iter()
            .map(|&l| if l == label { MASK_FG } else { MASK_BG })
            .collect();
        Ok(Pix::from_raw(self.width, self.height, 1, data)?)
    }

    /// Check that the grid matches an image's dimensions.
    pub fn check_size(&self, pix: &Pix) -> RegionResult<()> {
        Ok(pix.check_dimensions(self.width, self.height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_label_tie_goes_low() {
        let labels = Labels::from_data(3, 2, vec![1, 2, 2, 3, 3, -1]).unwrap();
        assert_eq!(labels.largest_label_above(1), Some(2));
        assert_eq!(labels.largest_label_above(3), None);
        assert_eq!(labels.max_label(), 3);
    }

    #[test]
    fn test_mask_of() {
        let labels = Labels::from_data(2, 2, vec![0, 5, 5, -1]).unwrap();
        let mask = labels.mask_of(5).unwrap();
        assert_eq!(mask.data(), &[0, 255, 255, 0]);
    }

    #[test]
    fn test_bad_geometry() {
        assert!(Labels::new(0, 1).is_err());
        assert!(Labels::from_data(2, 2, vec![0; 3]).is_err());
    }
}
