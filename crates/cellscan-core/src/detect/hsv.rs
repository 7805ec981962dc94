use ndarray::Array3;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::Frame;

/// Convert a single BGR pixel to u8 HSV.
///
/// Hue is stored on the halved-degree scale (0..=179), saturation and
/// value on 0..=255, matching the common u8 HSV convention.
pub fn bgr_pixel_to_hsv(b: u8, g: u8, r: u8) -> [u8; 3] {
    let bf = b as f32;
    let gf = g as f32;
    let rf = r as f32;

    let max = bf.max(gf).max(rf);
    let min = bf.min(gf).min(rf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let h = if delta > 0.0 {
        let deg = if max == rf {
            60.0 * (gf - bf) / delta
        } else if max == gf {
            120.0 + 60.0 * (bf - rf) / delta
        } else {
            240.0 + 60.0 * (rf - gf) / delta
        };
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        deg / 2.0
    } else {
        0.0
    };

    let mut h8 = h.round() as u32;
    if h8 >= 180 {
        h8 -= 180;
    }
    [h8 as u8, s.round() as u8, v.round() as u8]
}

/// Convert a whole BGR frame to an HSV raster of the same shape.
///
/// Deterministic per-pixel transform; rows are processed in parallel
/// above the pixel threshold.
pub fn bgr_to_hsv(frame: &Frame) -> Array3<u8> {
    let h = frame.height();
    let w = frame.width();
    let mut out = vec![0u8; h * w * 3];

    let convert_row = |row: usize, chunk: &mut [u8]| {
        for col in 0..w {
            let hsv = bgr_pixel_to_hsv(
                frame.data[[row, col, 0]],
                frame.data[[row, col, 1]],
                frame.data[[row, col, 2]],
            );
            chunk[col * 3] = hsv[0];
            chunk[col * 3 + 1] = hsv[1];
            chunk[col * 3 + 2] = hsv[2];
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(w * 3)
            .enumerate()
            .for_each(|(row, chunk)| convert_row(row, chunk));
    } else {
        for (row, chunk) in out.chunks_mut(w * 3).enumerate() {
            convert_row(row, chunk);
        }
    }

    Array3::from_shape_vec((h, w, 3), out).expect("buffer matches frame shape")
}
