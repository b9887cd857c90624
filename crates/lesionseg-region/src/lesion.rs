//! Watershed lesion extraction
//!
//! Isolates the dominant dark object of an image:
//!
//! 1. Otsu inverted threshold of the grayscale image (rough lesion mask)
//! 2. Opening with a 3×3 brick to remove specks
//! 3. Dilation of the opened mask gives the sure background boundary
//! 4. Distance transform of the opened mask; pixels farther than a fraction
//!    of the maximum distance are sure foreground
//! 5. Sure foreground components become watershed seeds, the band between
//!    sure foreground and sure background is left for flooding
//! 6. Watershed flooding over the RGB image
//! 7. The largest flooded seed region is the lesion

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::distance::distance_transform;
use crate::error::RegionResult;
use crate::label::Labels;
use crate::watershed::watershed_flood;
use lesionseg_color::{pix_convert_to_gray, pix_convert_to_rgb, threshold_otsu_inv};
use lesionseg_core::{MASK_BG, MASK_FG, Pix};
use lesionseg_morph::{Sel, dilate_iterated, open_iterated};

/// Smallest accepted foreground fraction
pub const MIN_FG_FRACTION: f32 = 0.1;
/// Largest accepted foreground fraction
pub const MAX_FG_FRACTION: f32 = 0.9;

/// Label given to everything outside the sure background region
const BACKGROUND_LABEL: i32 = 1;

/// Options for lesion extraction
#[derive(Debug, Clone)]
pub struct LesionOptions {
    /// Fraction of the maximum distance above which pixels are sure foreground.
    /// Clamped to `[0.1, 0.9]` when used.
    pub fg_fraction: f32,
    /// Number of erosions (then dilations) in the cleanup opening
    pub open_iterations: u32,
    /// Number of dilations producing the sure background
    pub bg_dilate_iterations: u32,
}

impl Default for LesionOptions {
    fn default() -> Self {
        Self {
            fg_fraction: 0.5,
            open_iterations: 2,
            bg_dilate_iterations: 3,
        }
    }
}

impl LesionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sure-foreground fraction
    pub fn with_fg_fraction(mut self, fraction: f32) -> Self {
        self.fg_fraction = fraction;
        self
    }

    /// Set the number of opening iterations
    pub fn with_open_iterations(mut self, iterations: u32) -> Self {
        self.open_iterations = iterations;
        self
    }

    /// Set the number of background dilation iterations
    pub fn with_bg_dilate_iterations(mut self, iterations: u32) -> Self {
        self.bg_dilate_iterations = iterations;
        self
    }

    /// Foreground fraction clamped to the accepted range.
    ///
    /// NaN falls back to the lower bound.
    pub fn effective_fg_fraction(&self) -> f32 {
        if self.fg_fraction.is_nan() {
            return MIN_FG_FRACTION;
        }
        self.fg_fraction.clamp(MIN_FG_FRACTION, MAX_FG_FRACTION)
    }
}

/// Intermediate and final results of a lesion extraction
#[derive(Debug, Clone)]
pub struct LesionExtraction {
    /// Lesion mask (all background when nothing was found)
    pub mask: Pix,
    /// Otsu threshold of the rough mask (0 when degenerate)
    pub otsu_threshold: u8,
    /// Number of sure-foreground seed components
    pub seed_count: i32,
    /// Flooded label map
    pub labels: Labels,
    /// Label of the selected lesion region
    pub lesion_label: Option<i32>,
}

/// Extract the dominant lesion as a mask.
///
/// See [`extract_lesion_detailed`].
pub fn extract_lesion(pix: &Pix, options: &LesionOptions) -> RegionResult<Pix> {
    extract_lesion_detailed(pix, options).map(|e| e.mask)
}

/// Extract the dominant lesion, keeping the intermediate label map.
///
/// Accepts grayscale or RGB input. A degenerate rough mask or an empty
/// sure foreground yields an all-background mask, not an error.
pub fn extract_lesion_detailed(
    pix: &Pix,
    options: &LesionOptions,
) -> RegionResult<LesionExtraction> {
    let gray = pix_convert_to_gray(pix)?;
    let rgb = pix_convert_to_rgb(pix)?;
    extract_lesion_from(&gray, &rgb, options)
}

/// Lesion extraction from precomputed grayscale and RGB views of one image.
pub fn extract_lesion_from(
    gray: &Pix,
    rgb: &Pix,
    options: &LesionOptions,
) -> RegionResult<LesionExtraction> {
    let rough = threshold_otsu_inv(gray)?;

    let brick = Sel::create_square(3)?;
    let opened = open_iterated(&rough.mask, &brick, options.open_iterations)?;
    let sure_bg = dilate_iterated(&opened, &brick, options.bg_dilate_iterations)?;

    let dist = distance_transform(&opened)?;
    let max_dist = dist.max().map(|(v, _, _)| v).unwrap_or(0.0);
    let cutoff = options.effective_fg_fraction() * max_dist;
    let sure_fg_data = dist
        .data()
        .iter()
        .map(|&d| if d > cutoff { MASK_FG } else { MASK_BG })
        .collect();
    let sure_fg = Pix::from_raw(gray.width(), gray.height(), 1, sure_fg_data)?;

    let unknown = sure_bg.subtract(&sure_fg)?;

    let (mut labels, seed_count) =
        label_connected_components(&sure_fg, ConnectivityType::EightWay)?;
    for (label, &u) in labels.data_mut().iter_mut().zip(unknown.data()) {
        *label = if u == MASK_FG { 0 } else { *label + BACKGROUND_LABEL };
    }

    watershed_flood(rgb, &mut labels)?;

    let lesion_label = labels.largest_label_above(BACKGROUND_LABEL);
    let mask = match lesion_label {
        Some(label) => labels.mask_of(label)?,
        None => gray.mask_from_gray(|_| false)?,
    };

    log::debug!(
        "lesion: otsu {}, max distance {:.2}, {} seeds, lesion label {:?}, {} pixels",
        rough.threshold,
        max_dist,
        seed_count,
        lesion_label,
        mask.count_foreground()
    );

    Ok(LesionExtraction {
        mask,
        otsu_threshold: rough.threshold,
        seed_count,
        labels,
        lesion_label,
    })
}
