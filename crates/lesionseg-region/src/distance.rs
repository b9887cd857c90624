//! Euclidean distance transform
//!
//! For every foreground pixel of a 0/255 mask, computes the exact
//! Euclidean distance to the nearest background pixel inside the image.
//! Background pixels get 0. Pixels beyond the image edge do not count as
//! background.
//!
//! Uses the separable lower-envelope method: a 1D squared-distance pass
//! down each column, then a second pass along each row over the column
//! results.

use crate::error::RegionResult;
use lesionseg_core::{FPix, MASK_FG, Pix};

/// Compute the Euclidean distance transform of a mask
///
/// A mask with no background pixel at all assigns every pixel the image
/// diagonal `sqrt(w² + h²)`, which exceeds any in-image distance.
pub fn distance_transform(pix: &Pix) -> RegionResult<FPix> {
    pix.check_gray()?;

    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let src = pix.data();

    let mut sq: Vec<f64> = src
        .iter()
        .map(|&v| if v == MASK_FG { f64::INFINITY } else { 0.0 })
        .collect();

    let mut env = Envelope::with_capacity(w.max(h));
    let mut line = vec![0f64; w.max(h)];
    let mut out = vec![0f64; w.max(h)];

    // Columns
    for x in 0..w {
        for y in 0..h {
            line[y] = sq[y * w + x];
        }
        env.transform(&line[..h], &mut out[..h]);
        for y in 0..h {
            sq[y * w + x] = out[y];
        }
    }

    // Rows
    for y in 0..h {
        let row = &mut sq[y * w..(y + 1) * w];
        line[..w].copy_from_slice(row);
        env.transform(&line[..w], &mut out[..w]);
        row.copy_from_slice(&out[..w]);
    }

    let diagonal = ((w * w + h * h) as f64).sqrt();
    let data = sq
        .into_iter()
        .map(|d| {
            if d.is_finite() {
                d.sqrt() as f32
            } else {
                diagonal as f32
            }
        })
        .collect();
    Ok(FPix::from_data(pix.width(), pix.height(), data)?)
}

/// Scratch buffers for the 1D lower envelope of parabolas
struct Envelope {
    /// Parabola vertices
    v: Vec<usize>,
    /// Left boundary of each parabola's region
    z: Vec<f64>,
}

impl Envelope {
    fn with_capacity(n: usize) -> Self {
        Self {
            v: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
        }
    }

    /// `out[q] = min_p (q - p)² + f[p]` over finite `f[p]`.
    ///
    /// If no `f[p]` is finite, `out` is filled with infinity.
    fn transform(&mut self, f: &[f64], out: &mut [f64]) {
        self.v.clear();
        self.z.clear();

        for q in 0..f.len() {
            if !f[q].is_finite() {
                continue;
            }
            let fq = f[q] + (q * q) as f64;
            loop {
                match self.v.last() {
                    None => {
                        self.v.push(q);
                        self.z.push(f64::NEG_INFINITY);
                        break;
                    }
                    Some(&p) => {
                        let s = (fq - (f[p] + (p * p) as f64)) / (2.0 * (q - p) as f64);
                        let zk = self.z.last().copied().unwrap_or(f64::NEG_INFINITY);
                        if s <= zk {
                            self.v.pop();
                            self.z.pop();
                        } else {
                            self.v.push(q);
                            self.z.push(s);
                            break;
                        }
                    }
                }
            }
        }

        if self.v.is_empty() {
            out.fill(f64::INFINITY);
            return;
        }

        let mut k = 0;
        for (q, o) in out.iter_mut().enumerate() {
            while k + 1 < self.v.len() && self.z[k + 1] < q as f64 {
                k += 1;
            }
            let p = self.v[k];
            let d = q as f64 - p as f64;
            *o = d * d + f[p];
        }
    }
}
