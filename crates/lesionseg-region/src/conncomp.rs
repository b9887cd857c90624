//! Connected component analysis
//!
//! Labels the foreground of a 0/255 mask. Components are numbered
//! 1, 2, ... in the raster order of their first pixel; background stays 0.

use crate::error::RegionResult;
use crate::label::Labels;
use lesionseg_core::{MASK_FG, Pix};
use std::collections::VecDeque;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Neighbor offsets `(dx, dy)` for this connectivity
    pub fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const EIGHT: [(i32, i32); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// A connected component in a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component in the label map
    pub label: i32,
    /// Number of pixels in this component
    pub pixel_count: usize,
}

/// Label all connected components of a mask
///
/// Returns the label map and the number of components found.
pub fn label_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<(Labels, i32)> {
    pix.check_gray()?;

    let w = pix.width();
    let h = pix.height();
    let src = pix.data();
    let mut labels = Labels::new(w, h)?;
    let mut next = 0i32;
    let mut queue = VecDeque::new();

    for start in 0..src.len() {
        if src[start] != MASK_FG || labels.data()[start] != 0 {
            continue;
        }
        next += 1;
        labels.data_mut()[start] = next;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            let x = (idx % w as usize) as i32;
            let y = (idx / w as usize) as i32;
            for &(dx, dy) in connectivity.offsets() {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let nidx = ny as usize * w as usize + nx as usize;
                if src[nidx] == MASK_FG && labels.data()[nidx] == 0 {
                    labels.data_mut()[nidx] = next;
                    queue.push_back(nidx);
                }
            }
        }
    }

    Ok((labels, next))
}

/// Find all connected components of a mask, in label order.
pub fn find_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let (labels, count) = label_connected_components(pix, connectivity)?;
    let mut sizes = vec![0usize; count as usize];
    for &label in labels.data() {
        if label > 0 {
            sizes[(label - 1) as usize] += 1;
        }
    }
    Ok(sizes
        .into_iter()
        .enumerate()
        .map(|(i, pixel_count)| ConnectedComponent {
            label: i as i32 + 1,
            pixel_count,
        })
        .collect())
}
