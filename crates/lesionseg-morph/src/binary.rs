//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 0/255 masks.
//!
//! Positions that fall outside the image are ignored: erosion never
//! removes a pixel because its neighborhood leaves the image, and
//! dilation never grows from outside it.

use crate::{MorphError, MorphResult, Sel};
use lesionseg_core::{MASK_BG, MASK_FG, Pix};

/// Dilate a binary mask
///
/// Dilation expands foreground regions. A pixel becomes foreground when
/// any source pixel at `(x - dx, y - dy)` is foreground for some hit
/// `(dx, dy)` of the SEL.
pub fn dilate(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let offsets: Vec<_> = sel.hit_offsets().map(|(dx, dy)| (-dx, -dy)).collect();
    Ok(apply(pix, &offsets, false))
}

/// Erode a binary mask
///
/// Erosion shrinks foreground regions. A pixel stays foreground only when
/// every in-image source pixel at `(x + dx, y + dy)` is foreground.
pub fn erode(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let offsets: Vec<_> = sel.hit_offsets().collect();
    Ok(apply(pix, &offsets, true))
}

/// Open a binary mask
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let eroded = erode(pix, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary mask
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let dilated = dilate(pix, sel)?;
    erode(&dilated, sel)
}

/// Apply [`dilate`] `iterations` times.
///
/// Zero iterations returns a copy of the input.
pub fn dilate_iterated(pix: &Pix, sel: &Sel, iterations: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut out = pix.clone();
    for _ in 0..iterations {
        out = dilate(&out, sel)?;
    }
    Ok(out)
}

/// Apply [`erode`] `iterations` times.
pub fn erode_iterated(pix: &Pix, sel: &Sel, iterations: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut out = pix.clone();
    for _ in 0..iterations {
        out = erode(&out, sel)?;
    }
    Ok(out)
}

/// Iterated opening: `iterations` erosions, then `iterations` dilations.
///
/// This is not the same as opening `iterations` times; the erosions are
/// all applied before any dilation.
pub fn open_iterated(pix: &Pix, sel: &Sel, iterations: u32) -> MorphResult<Pix> {
    let eroded = erode_iterated(pix, sel, iterations)?;
    dilate_iterated(&eroded, sel, iterations)
}

/// Dilate with a `width × height` brick
pub fn dilate_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    dilate(pix, &sel)
}

/// Erode with a `width × height` brick
pub fn erode_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    erode(pix, &sel)
}

/// Open with a `width × height` brick
pub fn open_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    open(pix, &sel)
}

/// Close with a `width × height` brick
pub fn close_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    close(pix, &sel)
}

/// Shared erosion/dilation kernel.
///
/// With `all == true` a pixel is set when every in-image sample at the
/// offsets is foreground (erosion); otherwise when any is (dilation).
fn apply(pix: &Pix, offsets: &[(i32, i32)], all: bool) -> Pix {
    let w = pix.width() as i32;
    let h = pix.height() as i32;
    let src = pix.data();

    let mut out_mut = pix.create_template().to_mut();
    let dst = out_mut.data_mut();

    for y in 0..h {
        for x in 0..w {
            let mut samples = offsets.iter().filter_map(|&(dx, dy)| {
                let sx = x + dx;
                let sy = y + dy;
                if sx >= 0 && sx < w && sy >= 0 && sy < h {
                    Some(src[(sy * w + sx) as usize] == MASK_FG)
                } else {
                    None
                }
            });
            let set = if all {
                samples.all(|fg| fg)
            } else {
                samples.any(|fg| fg)
            };
            dst[(y * w + x) as usize] = if set { MASK_FG } else { MASK_BG };
        }
    }

    out_mut.into()
}

fn check_binary(pix: &Pix) -> MorphResult<()> {
    pix.check_gray()?;
    if let Some(&v) = pix.data().iter().find(|&&v| v != MASK_BG && v != MASK_FG) {
        return Err(MorphError::NotBinary(v));
    }
    Ok(())
}
