//! Segmentation orchestrator
//!
//! Runs all six segmentation methods on one image under a single parameter
//! set and returns their masks together. Either every mask is produced or
//! the call fails; there are no partial results.

use crate::error::{SegmentError, SegmentResult};
use lesionseg_color::{
    AdaptiveMethod, AdaptiveThresholdOptions, adaptive_threshold, pix_convert_to_gray,
    pix_convert_to_rgb, threshold_manual_inv, threshold_otsu_inv,
};
use lesionseg_core::Pix;
use lesionseg_region::{LesionOptions, SeedPoint, extract_lesion_from, region_grow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MANUAL_THRESHOLD: u8 = 120;
pub const DEFAULT_ADAPTIVE_BLOCK_SIZE: u32 = 35;
pub const DEFAULT_ADAPTIVE_C: i32 = 5;
pub const DEFAULT_REGION_DIFF_THRESHOLD: u32 = 12;
pub const DEFAULT_WATERSHED_FOREGROUND_FRACTION: f32 = 0.5;

fn default_manual_threshold() -> u8 {
    DEFAULT_MANUAL_THRESHOLD
}

fn default_adaptive_block_size() -> u32 {
    DEFAULT_ADAPTIVE_BLOCK_SIZE
}

fn default_adaptive_c() -> i32 {
    DEFAULT_ADAPTIVE_C
}

fn default_region_diff_threshold() -> u32 {
    DEFAULT_REGION_DIFF_THRESHOLD
}

fn default_watershed_foreground_fraction() -> f32 {
    DEFAULT_WATERSHED_FOREGROUND_FRACTION
}

/// Parameters shared by one run of all segmentation methods
///
/// Serializes in camelCase. Every field except `regionSeed` may be omitted
/// and takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationParams {
    /// Level for the inverted manual threshold
    #[serde(default = "default_manual_threshold")]
    pub manual_threshold: u8,
    /// Window size for both adaptive thresholds (odd, at least 3)
    #[serde(default = "default_adaptive_block_size")]
    pub adaptive_block_size: u32,
    /// Offset subtracted from the adaptive local statistic
    #[serde(default = "default_adaptive_c")]
    pub adaptive_c: i32,
    /// Seed for region growing
    pub region_seed: SeedPoint,
    /// Region growing tolerance around the running mean
    #[serde(default = "default_region_diff_threshold")]
    pub region_diff_threshold: u32,
    /// Watershed sure-foreground fraction, clamped to [0.1, 0.9] when used
    #[serde(default = "default_watershed_foreground_fraction")]
    pub watershed_foreground_fraction: f32,
}

impl SegmentationParams {
    /// Default parameters around the given region seed.
    pub fn new(region_seed: SeedPoint) -> Self {
        Self {
            manual_threshold: DEFAULT_MANUAL_THRESHOLD,
            adaptive_block_size: DEFAULT_ADAPTIVE_BLOCK_SIZE,
            adaptive_c: DEFAULT_ADAPTIVE_C,
            region_seed,
            region_diff_threshold: DEFAULT_REGION_DIFF_THRESHOLD,
            watershed_foreground_fraction: DEFAULT_WATERSHED_FOREGROUND_FRACTION,
        }
    }

    pub fn with_manual_threshold(mut self, threshold: u8) -> Self {
        self.manual_threshold = threshold;
        self
    }

    pub fn with_adaptive_block_size(mut self, block_size: u32) -> Self {
        self.adaptive_block_size = block_size;
        self
    }

    pub fn with_adaptive_c(mut self, c: i32) -> Self {
        self.adaptive_c = c;
        self
    }

    pub fn with_region_seed(mut self, seed: SeedPoint) -> Self {
        self.region_seed = seed;
        self
    }

    pub fn with_region_diff_threshold(mut self, tolerance: u32) -> Self {
        self.region_diff_threshold = tolerance;
        self
    }

    pub fn with_watershed_foreground_fraction(mut self, fraction: f32) -> Self {
        self.watershed_foreground_fraction = fraction;
        self
    }

    fn adaptive_options(&self, method: AdaptiveMethod) -> AdaptiveThresholdOptions {
        AdaptiveThresholdOptions::new(method)
            .with_block_size(self.adaptive_block_size)
            .with_c(self.adaptive_c)
    }

    fn lesion_options(&self) -> LesionOptions {
        LesionOptions::new().with_fg_fraction(self.watershed_foreground_fraction)
    }

    /// Check every parameter against an image of the given size.
    ///
    /// # Errors
    ///
    /// - seed outside the image (`InvalidSeed`)
    /// - even or too small adaptive block size (`InvalidParameters`)
    pub fn validate(&self, width: u32, height: u32) -> SegmentResult<()> {
        self.region_seed.check_in_bounds(width, height)?;
        self.adaptive_options(AdaptiveMethod::Mean).validate()?;
        Ok(())
    }
}

/// One of the six segmentation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationMethod {
    /// Fixed threshold, inverted
    ManualInv,
    /// Otsu threshold, inverted
    OtsuInv,
    /// Adaptive local mean threshold
    AdaptMean,
    /// Adaptive Gaussian-weighted threshold
    AdaptGauss,
    /// Seeded region growing
    RegionGrowing,
    /// Marker-controlled watershed lesion
    Watershed,
}

impl SegmentationMethod {
    /// All methods in canonical order
    pub const ALL: [SegmentationMethod; 6] = [
        SegmentationMethod::ManualInv,
        SegmentationMethod::OtsuInv,
        SegmentationMethod::AdaptMean,
        SegmentationMethod::AdaptGauss,
        SegmentationMethod::RegionGrowing,
        SegmentationMethod::Watershed,
    ];

    /// Stable method name
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentationMethod::ManualInv => "manual_inv",
            SegmentationMethod::OtsuInv => "otsu_inv",
            SegmentationMethod::AdaptMean => "adapt_mean",
            SegmentationMethod::AdaptGauss => "adapt_gauss",
            SegmentationMethod::RegionGrowing => "region_growing",
            SegmentationMethod::Watershed => "watershed",
        }
    }

    /// File name a caller should store this method's mask under.
    pub fn file_name(self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl fmt::Display for SegmentationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentationMethod {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SegmentationMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SegmentError::UnknownMethod(s.to_string()))
    }
}

/// Masks produced by [`segment_all_methods`], in canonical method order
#[derive(Debug, Clone)]
pub struct SegmentationResults {
    masks: Vec<(SegmentationMethod, Pix)>,
}

impl SegmentationResults {
    /// Mask for one method
    pub fn get(&self, method: SegmentationMethod) -> Option<&Pix> {
        self.masks
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, pix)| pix)
    }

    /// Iterate over `(method, mask)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentationMethod, &Pix)> {
        self.masks.iter().map(|(m, pix)| (*m, pix))
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

impl IntoIterator for SegmentationResults {
    type Item = (SegmentationMethod, Pix);
    type IntoIter = std::vec::IntoIter<(SegmentationMethod, Pix)>;

    fn into_iter(self) -> Self::IntoIter {
        self.masks.into_iter()
    }
}

/// Run a single method on precomputed grayscale and RGB views.
fn run_method(
    method: SegmentationMethod,
    gray: &Pix,
    rgb: &Pix,
    params: &SegmentationParams,
) -> SegmentResult<Pix> {
    let mask = match method {
        SegmentationMethod::ManualInv => threshold_manual_inv(gray, params.manual_threshold)?,
        SegmentationMethod::OtsuInv => threshold_otsu_inv(gray)?.mask,
        SegmentationMethod::AdaptMean => {
            adaptive_threshold(gray, &params.adaptive_options(AdaptiveMethod::Mean))?
        }
        SegmentationMethod::AdaptGauss => {
            adaptive_threshold(gray, &params.adaptive_options(AdaptiveMethod::Gaussian))?
        }
        SegmentationMethod::RegionGrowing => {
            region_grow(gray, params.region_seed, params.region_diff_threshold)?
        }
        SegmentationMethod::Watershed => {
            extract_lesion_from(gray, rgb, &params.lesion_options())?.mask
        }
    };
    Ok(mask)
}

/// Run all six segmentation methods on one image.
///
/// Parameters are validated against the image before any method runs.
/// Grayscale and RGB views are computed once and shared by all methods.
///
/// # Errors
///
/// Returns the first validation or algorithm error; no masks are returned
/// in that case.
pub fn segment_all_methods(
    pix: &Pix,
    params: &SegmentationParams,
) -> SegmentResult<SegmentationResults> {
    params.validate(pix.width(), pix.height())?;

    let gray = pix_convert_to_gray(pix)?;
    let rgb = pix_convert_to_rgb(pix)?;

    let mut masks = Vec::with_capacity(SegmentationMethod::ALL.len());
    for method in SegmentationMethod::ALL {
        let mask = run_method(method, &gray, &rgb, params)?;
        log::debug!(
            "{}: {} of {} pixels foreground",
            method,
            mask.count_foreground(),
            mask.pixel_count()
        );
        masks.push((method, mask));
    }

    Ok(SegmentationResults { masks })
}
