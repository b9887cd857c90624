//! lesionseg - Classical lesion segmentation for 2D medical images
//!
//! Takes an already-decoded grayscale or RGB image and produces six binary
//! masks, one per segmentation method, so their outputs can be compared:
//!
//! | method           | algorithm                                     |
//! |------------------|-----------------------------------------------|
//! | `manual_inv`     | fixed threshold, inverted                     |
//! | `otsu_inv`       | Otsu global threshold, inverted               |
//! | `adapt_mean`     | adaptive local mean threshold                 |
//! | `adapt_gauss`    | adaptive Gaussian-weighted threshold          |
//! | `region_growing` | seeded 8-connected growth around a running mean |
//! | `watershed`      | marker-controlled watershed, largest basin    |
//!
//! # Example
//!
//! ```
//! use lesionseg::{Pix, PixelFormat, SeedPoint, SegmentationMethod, SegmentationParams};
//!
//! let pix = Pix::new_filled(100, 100, PixelFormat::Rgb, 255).unwrap();
//! let params = SegmentationParams::new(SeedPoint::new(50, 50));
//! let results = lesionseg::segment_all_methods(&pix, &params).unwrap();
//!
//! assert_eq!(results.len(), 6);
//! let grown = results.get(SegmentationMethod::RegionGrowing).unwrap();
//! assert_eq!(grown.count_foreground(), 100 * 100);
//! ```

pub mod detect;
mod error;
pub mod segment;

// Re-export core types (primary data structures used everywhere)
pub use lesionseg_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use lesionseg_color as color;
pub use lesionseg_filter as filter;
pub use lesionseg_morph as morph;
pub use lesionseg_region as region;

pub use lesionseg_region::SeedPoint;

pub use error::{SegmentError, SegmentResult};

pub use segment::{
    SegmentationMethod, SegmentationParams, SegmentationResults, segment_all_methods,
};

pub use detect::{
    BoundingBox, DetectError, DetectResult, Detection, DetectionOutput, Detector, SharedDetector,
};
