use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellscanError {
    #[error("Capture device {index} unavailable: {reason}")]
    DeviceUnavailable { index: u32, reason: String },

    #[error("Frame read failed: {0}")]
    ReadFailure(String),

    #[error("No live frame to capture")]
    NothingToCapture,

    #[error("Invalid parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CellscanError>;
