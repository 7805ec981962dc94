use std::path::Path;

use image::GrayImage;
use ndarray::Array2;

use crate::error::Result;
use crate::frame::Frame;

/// Load a color image file (PNG, JPEG, ...) as a BGR frame.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?.to_rgb8();
    Ok(Frame::from_rgb_image(&img))
}

/// Save a frame, format chosen from the file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    frame.to_rgb_image().save(path)?;
    Ok(())
}

/// Save a binary mask as an 8-bit grayscale image.
pub fn save_mask(mask: &Array2<bool>, path: &Path) -> Result<()> {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = if mask[[row, col]] { 255 } else { 0 };
            img.put_pixel(col as u32, row as u32, image::Luma([val]));
        }
    }
    img.save(path)?;
    Ok(())
}
