#![allow(dead_code)]

use cellscan_core::frame::Frame;
use ndarray::Array2;

/// Pure red in BGR storage order.
pub const RED_BGR: [u8; 3] = [0, 0, 255];

/// Build an all-black frame of the given dimensions.
pub fn black_frame(height: usize, width: usize) -> Frame {
    Frame::black(height, width)
}

/// Fill a disk of the given radius (pixel centers within `radius` of the
/// center, inclusive) with a BGR color.
pub fn draw_filled_circle(frame: &mut Frame, cy: i64, cx: i64, radius: i64, bgr: [u8; 3]) {
    let h = frame.height() as i64;
    let w = frame.width() as i64;
    for row in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for col in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let dy = row - cy;
            let dx = col - cx;
            if dy * dy + dx * dx <= radius * radius {
                for (ch, &v) in bgr.iter().enumerate() {
                    frame.data[[row as usize, col as usize, ch]] = v;
                }
            }
        }
    }
}

/// Fill an axis-aligned square with a BGR color.
pub fn draw_filled_square(frame: &mut Frame, row0: usize, col0: usize, side: usize, bgr: [u8; 3]) {
    for row in row0..row0 + side {
        for col in col0..col0 + side {
            for (ch, &v) in bgr.iter().enumerate() {
                frame.data[[row, col, ch]] = v;
            }
        }
    }
}

/// Binary mask with one or more filled squares: (row, col, side) each.
pub fn square_mask(height: usize, width: usize, squares: &[(usize, usize, usize)]) -> Array2<bool> {
    let mut mask = Array2::from_elem((height, width), false);
    for &(row0, col0, side) in squares {
        for row in row0..row0 + side {
            for col in col0..col0 + side {
                mask[[row, col]] = true;
            }
        }
    }
    mask
}
