//! Seeded region growing
//!
//! Grows a region from a single seed pixel over 8-connected neighbors
//! whose intensity stays within a tolerance of the region's running mean.
//! The mean is updated online as pixels are accepted, so the order in
//! which candidates are examined matters; it is fixed here so that results
//! are reproducible.

use crate::error::{RegionError, RegionResult};
use lesionseg_core::{MASK_BG, MASK_FG, Pix};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A seed position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPoint {
    pub x: u32,
    pub y: u32,
}

impl SeedPoint {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Build a seed from `(row, column)` order.
    pub fn from_row_col(row: u32, col: u32) -> Self {
        Self { x: col, y: row }
    }

    /// Check that the seed lies inside a `width × height` image.
    pub fn check_in_bounds(&self, width: u32, height: u32) -> RegionResult<()> {
        if self.x >= width || self.y >= height {
            return Err(RegionError::InvalidSeed {
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }
}

/// Summary of a completed region growth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGrowStats {
    /// Number of pixels in the region, seed included
    pub pixel_count: usize,
    /// Final running mean intensity
    pub mean: f64,
}

/// Neighbor order as `(drow, dcol)`: N, S, W, E, NW, NE, SW, SE
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Grow a region from `seed` and return it as a mask.
///
/// See [`region_grow_with_stats`].
pub fn region_grow(pix: &Pix, seed: SeedPoint, tolerance: u32) -> RegionResult<Pix> {
    region_grow_with_stats(pix, seed, tolerance).map(|(mask, _)| mask)
}

/// Grow a region from `seed`, returning the mask and growth statistics.
///
/// Pixels are examined breadth-first from a FIFO queue. A neighbor that has
/// not been visited is accepted when `|v - mean| <= tolerance`; it is then
/// marked, queued, and folded into the running mean with
/// `mean += (v - mean) / count`. Rejected neighbors stay unvisited and may
/// be accepted later from another direction once the mean has drifted.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed lies outside the image,
/// and a core error for RGB input.
pub fn region_grow_with_stats(
    pix: &Pix,
    seed: SeedPoint,
    tolerance: u32,
) -> RegionResult<(Pix, RegionGrowStats)> {
    pix.check_gray()?;
    seed.check_in_bounds(pix.width(), pix.height())?;

    let w = pix.width() as i32;
    let h = pix.height() as i32;
    let src = pix.data();
    let tolerance = tolerance as f64;

    let mut visited = vec![false; src.len()];
    let seed_idx = (seed.y as i32 * w + seed.x as i32) as usize;
    visited[seed_idx] = true;

    let mut mean = src[seed_idx] as f64;
    let mut count = 1usize;
    let mut queue = VecDeque::new();
    queue.push_back((seed.y as i32, seed.x as i32));

    while let Some((r, c)) = queue.pop_front() {
        for &(dr, dc) in &NEIGHBORS {
            let rr = r + dr;
            let cc = c + dc;
            if rr < 0 || rr >= h || cc < 0 || cc >= w {
                continue;
            }
            let idx = (rr * w + cc) as usize;
            if visited[idx] {
                continue;
            }
            let v = src[idx] as f64;
            if (v - mean).abs() <= tolerance {
                visited[idx] = true;
                queue.push_back((rr, cc));
                count += 1;
                mean += (v - mean) / count as f64;
            }
        }
    }

    log::debug!(
        "region grow from ({}, {}): {} pixels, mean {:.2}",
        seed.x,
        seed.y,
        count,
        mean
    );

    let data = visited
        .into_iter()
        .map(|v| if v { MASK_FG } else { MASK_BG })
        .collect();
    let mask = Pix::from_raw(pix.width(), pix.height(), 1, data)?;
    Ok((
        mask,
        RegionGrowStats {
            pixel_count: count,
            mean,
        },
    ))
}
