use image::RgbImage;
use ndarray::{Array2, Array3};

/// A single color frame as delivered by the capture device.
///
/// Pixel data is 8-bit, row-major, shape = (height, width, 3) in BGR
/// channel order. RGB exists only at the file and presentation boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, shape = (height, width, 3), BGR.
    pub data: Array3<u8>,
}

impl Frame {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// All-black frame of the given dimensions.
    pub fn black(height: usize, width: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, 3)),
        }
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// Build a frame from an RGB image buffer, swapping to BGR storage.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let mut data = Array3::zeros((h as usize, w as usize, 3));
        for (x, y, pixel) in img.enumerate_pixels() {
            let row = y as usize;
            let col = x as usize;
            data[[row, col, 0]] = pixel[2];
            data[[row, col, 1]] = pixel[1];
            data[[row, col, 2]] = pixel[0];
        }
        Self { data }
    }

    /// Convert to an RGB image buffer for display or file output.
    pub fn to_rgb_image(&self) -> RgbImage {
        let h = self.height();
        let w = self.width();
        let mut img = RgbImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                let b = self.data[[row, col, 0]];
                let g = self.data[[row, col, 1]];
                let r = self.data[[row, col, 2]];
                img.put_pixel(col as u32, row as u32, image::Rgb([r, g, b]));
            }
        }
        img
    }

    /// Render a binary mask as a black/white frame.
    pub fn from_mask(mask: &Array2<bool>) -> Self {
        let (h, w) = mask.dim();
        let mut data = Array3::zeros((h, w, 3));
        for row in 0..h {
            for col in 0..w {
                if mask[[row, col]] {
                    data[[row, col, 0]] = 255;
                    data[[row, col, 1]] = 255;
                    data[[row, col, 2]] = 255;
                }
            }
        }
        Self { data }
    }
}
