//! lesionseg-morph - Binary morphology on 0/255 masks
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Erosion, dilation, opening and closing, single or iterated
//! - Brick (rectangular) convenience forms

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{
    close, close_brick, dilate, dilate_brick, dilate_iterated, erode, erode_brick, erode_iterated,
    open, open_brick, open_iterated,
};
