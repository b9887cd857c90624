//! lesionseg Core - Basic data structures for the segmentation engine
//!
//! - [`Pix`] / [`PixMut`] - 8-bit grayscale or RGB image (immutable / mutable)
//! - [`FPix`] - Floating-point image
//! - [`Histogram`] - 256-bin intensity histogram
//!
//! Binary masks are grayscale `Pix` values holding only [`MASK_BG`] and
//! [`MASK_FG`].

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Histogram, MASK_BG, MASK_FG, Pix, PixMut, PixelFormat};
