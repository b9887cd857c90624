//! lesionseg-region - Region processing for the segmentation engine
//!
//! This crate provides:
//!
//! - **Connected component analysis** - Labeling connected regions of a mask
//! - **Region growing** - Seeded flood fill with a running-mean criterion
//! - **Distance transform** - Exact Euclidean distance to background
//! - **Watershed flooding** - Marker-controlled flooding over an RGB image
//! - **Lesion extraction** - The full watershed pipeline producing one mask
//!
//! # Examples
//!
//! ## Region growing
//!
//! ```
//! use lesionseg_core::{Pix, PixelFormat};
//! use lesionseg_region::{SeedPoint, region_grow};
//!
//! let pix = Pix::new_filled(10, 10, PixelFormat::Gray, 200).unwrap();
//! let mask = region_grow(&pix, SeedPoint::new(5, 5), 10).unwrap();
//! assert_eq!(mask.count_foreground(), 100);
//! ```
//!
//! ## Lesion extraction
//!
//! ```
//! use lesionseg_core::{Pix, PixelFormat};
//! use lesionseg_region::{LesionOptions, extract_lesion};
//!
//! let pix = Pix::new_filled(10, 10, PixelFormat::Rgb, 255).unwrap();
//! let mask = extract_lesion(&pix, &LesionOptions::default()).unwrap();
//! assert!(mask.is_all_background());
//! ```

pub mod conncomp;
pub mod distance;
pub mod error;
pub mod label;
pub mod lesion;
pub mod seedfill;
pub mod watershed;

// Re-export core types
pub use lesionseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectedComponent, ConnectivityType, find_connected_components, label_connected_components,
};

// Re-export label types
pub use label::{Labels, WATERSHED_BOUNDARY};

// Re-export seedfill types and functions
pub use seedfill::{RegionGrowStats, SeedPoint, region_grow, region_grow_with_stats};

// Re-export distance transform
pub use distance::distance_transform;

// Re-export watershed functions
pub use watershed::watershed_flood;

// Re-export lesion extraction
pub use lesion::{
    LesionExtraction, LesionOptions, MAX_FG_FRACTION, MIN_FG_FRACTION, extract_lesion,
    extract_lesion_detailed, extract_lesion_from,
};
