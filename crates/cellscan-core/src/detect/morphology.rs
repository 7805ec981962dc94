use ndarray::Array2;

use crate::consts::MIN_KERNEL_SIZE;

/// Coerce a user-supplied kernel size to a usable diameter:
/// values below 1 clamp to 1, even values are incremented to odd.
pub fn coerce_kernel_size(size: i32) -> usize {
    let size = size.max(MIN_KERNEL_SIZE) as usize;
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

/// Neighborhood offsets of a disk-shaped structuring element with the
/// given (odd) diameter: all (dy, dx) with dy^2 + dx^2 <= r^2 for
/// r = (diameter - 1) / 2. Diameter 1 is the single center pixel,
/// diameter 3 the 4-connected cross.
pub fn disk_offsets(diameter: usize) -> Vec<(i64, i64)> {
    let r = (diameter as i64 - 1) / 2;
    let mut offsets = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dy * dy + dx * dx <= r * r {
                offsets.push((dy, dx));
            }
        }
    }
    offsets
}

/// Morphological closing: `iterations` dilation passes followed by the
/// same number of erosion passes, merging nearby foreground fragments
/// and filling small holes.
pub fn close(mask: &Array2<bool>, diameter: usize, iterations: usize) -> Array2<bool> {
    let offsets = disk_offsets(diameter);
    let mut result = mask.clone();
    for _ in 0..iterations {
        result = dilate(&result, &offsets);
    }
    for _ in 0..iterations {
        result = erode(&result, &offsets);
    }
    result
}

/// Binary dilation: a pixel becomes foreground if ANY pixel under the
/// structuring element is foreground. Out-of-bounds counts as background.
pub fn dilate(mask: &Array2<bool>, offsets: &[(i64, i64)]) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            let any = offsets.iter().any(|&(dy, dx)| {
                let nr = row as i64 + dy;
                let nc = col as i64 + dx;
                nr >= 0
                    && nr < h as i64
                    && nc >= 0
                    && nc < w as i64
                    && mask[[nr as usize, nc as usize]]
            });
            result[[row, col]] = any;
        }
    }

    result
}

/// Binary erosion: a pixel stays foreground only if ALL pixels under the
/// structuring element are foreground. Out-of-bounds counts as foreground
/// so border-touching regions are not eaten from the outside.
pub fn erode(mask: &Array2<bool>, offsets: &[(i64, i64)]) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            let all = offsets.iter().all(|&(dy, dx)| {
                let nr = row as i64 + dy;
                let nc = col as i64 + dx;
                if nr < 0 || nr >= h as i64 || nc < 0 || nc >= w as i64 {
                    return true;
                }
                mask[[nr as usize, nc as usize]]
            });
            result[[row, col]] = all;
        }
    }

    result
}
