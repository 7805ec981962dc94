use ndarray::Array2;

/// Traced outer boundary of one connected foreground region.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Boundary polyline as (x, y) pixel coordinates, in tracing order.
    pub points: Vec<(u32, u32)>,
    /// Enclosed polygon area (shoelace over the boundary polyline).
    pub area: f64,
    /// First moment / zeroth moment of the enclosed area.
    /// `None` when the zeroth moment is zero (degenerate contour).
    pub centroid: Option<(f64, f64)>,
}

/// Moore neighborhood, clockwise in image coordinates starting west:
/// W, NW, N, NE, E, SE, S, SW.
const DIRS: [(i64, i64); 8] = [
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
];

/// Extract the outer boundary contour of every 8-connected foreground
/// region in the mask. Interior hole boundaries are never produced.
///
/// Contours are returned in raster-scan order of each region's first
/// (topmost, then leftmost) pixel.
pub fn find_external_contours(mask: &Array2<bool>) -> Vec<Contour> {
    let (labels, seeds) = label_components(mask);

    seeds
        .iter()
        .map(|&(label, start)| {
            let points = trace_boundary(&labels, label, start);
            let (area, centroid) = polygon_moments(&points);
            Contour {
                points,
                area,
                centroid,
            }
        })
        .collect()
}

/// Two-pass 8-connectivity labeling with union-find.
///
/// Returns the resolved label raster plus each component's root label and
/// first pixel, ordered by raster scan.
fn label_components(mask: &Array2<bool>) -> (Array2<u32>, Vec<(u32, (usize, usize))>) {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return (labels, Vec::new());
    }

    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: provisional labels from the four already-visited neighbors.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbor_label = 0u32;
            let neighbors = [
                (row.wrapping_sub(1), col.wrapping_sub(1)),
                (row.wrapping_sub(1), col),
                (row.wrapping_sub(1), col + 1),
                (row, col.wrapping_sub(1)),
            ];
            for &(nr, nc) in &neighbors {
                if nr < h && nc < w {
                    let lbl = labels[[nr, nc]];
                    if lbl > 0 {
                        if neighbor_label == 0 {
                            neighbor_label = lbl;
                        } else if lbl != neighbor_label {
                            union(&mut parent, neighbor_label, lbl);
                            neighbor_label = neighbor_label.min(lbl);
                        }
                    }
                }
            }

            if neighbor_label > 0 {
                labels[[row, col]] = neighbor_label;
            } else {
                if next_label as usize >= parent.len() {
                    parent.resize(parent.len() * 2, 0);
                }
                parent[next_label as usize] = next_label;
                labels[[row, col]] = next_label;
                next_label += 1;
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: write resolved roots back and collect seeds in scan order.
    let mut seeds = Vec::new();
    let mut seen = vec![false; next_label as usize];
    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];
            labels[[row, col]] = root;
            if !seen[root as usize] {
                seen[root as usize] = true;
                seeds.push((root, (row, col)));
            }
        }
    }

    (labels, seeds)
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}

/// Moore neighbor tracing from the component's first raster pixel, with
/// Jacob's stopping criterion (terminate on re-entering the start pixel
/// about to repeat the first move).
fn trace_boundary(labels: &Array2<u32>, label: u32, start: (usize, usize)) -> Vec<(u32, u32)> {
    let (h, w) = labels.dim();
    let is_fg = |row: i64, col: i64| -> bool {
        row >= 0 && row < h as i64 && col >= 0 && col < w as i64
            && labels[[row as usize, col as usize]] == label
    };

    let mut points = vec![(start.1 as u32, start.0 as u32)];
    let mut current = (start.0 as i64, start.1 as i64);
    // The first pixel is entered from the raster scan, so its west
    // neighbor cannot belong to this component: begin scanning at NW.
    let mut scan_start = 1usize;
    let mut first_dir: Option<usize> = None;
    let max_steps = 4 * h * w + 8;

    for _ in 0..max_steps {
        let mut found = None;
        for i in 0..8 {
            let d = (scan_start + i) % 8;
            let (dy, dx) = DIRS[d];
            if is_fg(current.0 + dy, current.1 + dx) {
                found = Some(d);
                break;
            }
        }
        // Isolated pixel: the single-point contour stands alone.
        let Some(d) = found else { break };

        let at_start = current == (start.0 as i64, start.1 as i64);
        match first_dir {
            None => first_dir = Some(d),
            Some(fd) => {
                if at_start && d == fd {
                    break;
                }
            }
        }

        let (dy, dx) = DIRS[d];
        let next = (current.0 + dy, current.1 + dx);
        if next != (start.0 as i64, start.1 as i64) {
            points.push((next.1 as u32, next.0 as u32));
        }
        current = next;
        scan_start = (d + 6) % 8;
    }

    points
}

/// Zeroth and first polygon moments over a closed boundary polyline
/// (Green's theorem). Returns (area, centroid); centroid is `None` for
/// degenerate (zero-area) contours.
fn polygon_moments(points: &[(u32, u32)]) -> (f64, Option<(f64, f64)>) {
    if points.len() < 3 {
        return (0.0, None);
    }

    let mut signed_area2 = 0.0f64;
    let mut cx6 = 0.0f64;
    let mut cy6 = 0.0f64;

    for i in 0..points.len() {
        let (x0, y0) = points[i];
        let (x1, y1) = points[(i + 1) % points.len()];
        let (x0, y0) = (x0 as f64, y0 as f64);
        let (x1, y1) = (x1 as f64, y1 as f64);
        let cross = x0 * y1 - x1 * y0;
        signed_area2 += cross;
        cx6 += (x0 + x1) * cross;
        cy6 += (y0 + y1) * cross;
    }

    let area = signed_area2.abs() / 2.0;
    if area == 0.0 {
        return (0.0, None);
    }

    let cx = cx6 / (3.0 * signed_area2);
    let cy = cy6 / (3.0 * signed_area2);
    (area, Some((cx, cy)))
}
