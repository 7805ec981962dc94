use crate::consts::{CONTOUR_COLOR_BGR, LABEL_COLOR_BGR, LABEL_GLYPH_SCALE, LABEL_OFFSET_PX};
use crate::frame::Frame;

use super::contour::Contour;

/// 5x7 digit glyphs, one row per byte, 5 bits wide (MSB is the left column).
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

/// Glyph cell width in font units, including one column of spacing.
const GLYPH_ADVANCE: u32 = 6;

/// Draw retained contour boundaries and 1-indexed centroid labels on a
/// copy of the input frame. Contours without a defined centroid are
/// outlined but not labeled.
pub fn annotate(frame: &Frame, contours: &[Contour]) -> Frame {
    let mut out = frame.clone();

    for (index, contour) in contours.iter().enumerate() {
        for &(x, y) in &contour.points {
            put_thick(&mut out, x as i64, y as i64, CONTOUR_COLOR_BGR);
        }

        if let Some((cx, cy)) = contour.centroid {
            let x = cx.round() as i64 - LABEL_OFFSET_PX;
            let y = cy.round() as i64 - LABEL_OFFSET_PX;
            draw_number(&mut out, index + 1, x, y, LABEL_COLOR_BGR);
        }
    }

    out
}

/// Paint a 2x2 block so the 1-pixel boundary reads as a visible outline.
fn put_thick(frame: &mut Frame, x: i64, y: i64, color: [u8; 3]) {
    for dy in 0..2 {
        for dx in 0..2 {
            put_pixel(frame, x + dx, y + dy, color);
        }
    }
}

fn put_pixel(frame: &mut Frame, x: i64, y: i64, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= frame.width() as i64 || y >= frame.height() as i64 {
        return;
    }
    for (ch, &v) in color.iter().enumerate() {
        frame.data[[y as usize, x as usize, ch]] = v;
    }
}

/// Render a decimal number with the built-in glyphs, top-left at (x, y).
/// Pixels falling outside the frame are clipped.
pub fn draw_number(frame: &mut Frame, number: usize, x: i64, y: i64, color: [u8; 3]) {
    let digits: Vec<usize> = number
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();

    let scale = LABEL_GLYPH_SCALE as i64;
    for (pos, &digit) in digits.iter().enumerate() {
        let origin_x = x + pos as i64 * GLYPH_ADVANCE as i64 * scale;
        let glyph = &DIGIT_GLYPHS[digit];
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5 {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        put_pixel(
                            frame,
                            origin_x + col as i64 * scale + sx,
                            y + row as i64 * scale + sy,
                            color,
                        );
                    }
                }
            }
        }
    }
}
