use cellscan_core::frame::Frame;

/// Convert a BGR frame to an egui ColorImage (RGB display order).
pub fn frame_to_color_image(frame: &Frame) -> egui::ColorImage {
    let h = frame.height();
    let w = frame.width();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            let b = frame.data[[row, col, 0]];
            let g = frame.data[[row, col, 1]];
            let r = frame.data[[row, col, 2]];
            pixels.push(egui::Color32::from_rgb(r, g, b));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
