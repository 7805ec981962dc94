use ndarray::{Array2, Array3};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::params::DetectParams;

/// Produce a binary mask from an HSV raster and the six channel bounds.
///
/// A pixel is foreground iff `lo <= channel <= hi` holds for all three
/// channels independently. Hue is not treated cyclically: inverted bounds
/// (lo > hi) on any channel yield an all-background mask.
pub fn in_range(hsv: &Array3<u8>, params: &DetectParams) -> Array2<bool> {
    let h = hsv.shape()[0];
    let w = hsv.shape()[1];
    let mut out = vec![false; h * w];

    let lo = [params.hue_lo, params.sat_lo, params.val_lo];
    let hi = [params.hue_hi, params.sat_hi, params.val_hi];

    let test_row = |row: usize, chunk: &mut [bool]| {
        for (col, dst) in chunk.iter_mut().enumerate() {
            *dst = (0..3).all(|ch| {
                let v = hsv[[row, col, ch]];
                lo[ch] <= v && v <= hi[ch]
            });
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(w)
            .enumerate()
            .for_each(|(row, chunk)| test_row(row, chunk));
    } else {
        for (row, chunk) in out.chunks_mut(w).enumerate() {
            test_row(row, chunk);
        }
    }

    Array2::from_shape_vec((h, w), out).expect("buffer matches frame shape")
}
