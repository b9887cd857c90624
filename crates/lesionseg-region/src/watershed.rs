//! Marker-controlled watershed flooding
//!
//! Floods unlabeled pixels of a marker map from its labeled seeds, in order
//! of increasing color difference between neighboring pixels. Pixels that
//! two different regions reach at the same time become
//! [`WATERSHED_BOUNDARY`].
//!
//! Flooding uses 4-connectivity and 256 FIFO priority levels. The priority
//! of a step from pixel `a` to pixel `b` is the largest per-channel
//! absolute difference between their RGB values.

use crate::error::RegionResult;
use crate::label::{Labels, WATERSHED_BOUNDARY};
use lesionseg_core::{Pix, PixelFormat};
use std::collections::VecDeque;

/// Marks pixels waiting in a priority queue
const IN_QUEUE: i32 = -2;

const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Per-level FIFO queues of pixel indices
struct PriorityQueues {
    levels: Vec<VecDeque<usize>>,
    active: usize,
}

impl PriorityQueues {
    fn new() -> Self {
        Self {
            levels: (0..256).map(|_| VecDeque::new()).collect(),
            active: 256,
        }
    }

    fn push(&mut self, level: u8, idx: usize) {
        self.levels[level as usize].push_back(idx);
        self.active = self.active.min(level as usize);
    }

    /// Pop from the lowest non-empty level.
    fn pop(&mut self) -> Option<usize> {
        while self.active < self.levels.len() {
            if let Some(idx) = self.levels[self.active].pop_front() {
                return Some(idx);
            }
            self.active += 1;
        }
        None
    }
}

#[inline]
fn color_diff(rgb: &[u8], a: usize, b: usize) -> u8 {
    let pa = &rgb[a * 3..a * 3 + 3];
    let pb = &rgb[b * 3..b * 3 + 3];
    pa.iter()
        .zip(pb)
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

/// Flood `markers` in place over an RGB image.
///
/// On entry, positive labels are seeds and 0 marks pixels to be assigned.
/// Negative labels are left untouched and block flooding. On return every
/// reachable unlabeled pixel carries a seed label or [`WATERSHED_BOUNDARY`].
///
/// Unlike OpenCV's `watershed`, no `WATERSHED_BOUNDARY` frame is painted
/// around the image border; border pixels are flooded like any other.
///
/// # Errors
///
/// Returns a core error if the image is not RGB or its size differs from
/// the marker grid.
pub fn watershed_flood(pix: &Pix, markers: &mut Labels) -> RegionResult<()> {
    if pix.format() != PixelFormat::Rgb {
        return Err(lesionseg_core::Error::UnsupportedFormat {
            expected: "rgb",
            actual: pix.format(),
        }
        .into());
    }
    markers.check_size(pix)?;

    let w = markers.width() as i32;
    let h = markers.height() as i32;
    let rgb = pix.data();
    let m = markers.data_mut();
    let mut queues = PriorityQueues::new();

    let neighbors = move |idx: usize| {
        let x = idx as i32 % w;
        let y = idx as i32 / w;
        NEIGHBORS.iter().filter_map(move |&(dx, dy)| {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                None
            } else {
                Some((ny * w + nx) as usize)
            }
        })
    };

    // Unlabeled pixels touching a seed enter the queue at their cheapest step
    for idx in 0..m.len() {
        if m[idx] != 0 {
            continue;
        }
        let level = neighbors(idx)
            .filter(|&n| m[n] > 0)
            .map(|n| color_diff(rgb, idx, n))
            .min();
        if let Some(level) = level {
            queues.push(level, idx);
            m[idx] = IN_QUEUE;
        }
    }

    let mut boundary_count = 0usize;
    while let Some(idx) = queues.pop() {
        let mut label = 0;
        for n in neighbors(idx) {
            let t = m[n];
            if t > 0 {
                if label == 0 {
                    label = t;
                } else if t != label {
                    label = WATERSHED_BOUNDARY;
                }
            }
        }
        m[idx] = label;

        if label == WATERSHED_BOUNDARY {
            boundary_count += 1;
            continue;
        }

        for n in neighbors(idx) {
            if m[n] == 0 {
                m[n] = IN_QUEUE;
                queues.push(color_diff(rgb, idx, n), n);
            }
        }
    }

    log::trace!("watershed flood: {} boundary pixels", boundary_count);
    Ok(())
}
