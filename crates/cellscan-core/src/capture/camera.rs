use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use tracing::info;

use crate::error::{CellscanError, Result};
use crate::frame::Frame;

use super::{FrameSource, SourceOpener};

/// nokhwa-backed USB camera source. Frames are decoded to RGB by the
/// backend and re-packed into the capture-native BGR layout.
pub struct CameraSource {
    camera: Camera,
}

impl CameraSource {
    pub fn open(device_index: u32) -> Result<Self> {
        let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(device_index), requested).map_err(|e| {
            CellscanError::DeviceUnavailable {
                index: device_index,
                reason: e.to_string(),
            }
        })?;

        camera
            .open_stream()
            .map_err(|e| CellscanError::DeviceUnavailable {
                index: device_index,
                reason: e.to_string(),
            })?;

        let format = camera.camera_format();
        info!(
            index = device_index,
            width = format.width(),
            height = format.height(),
            "Camera stream opened"
        );
        Ok(Self { camera })
    }
}

impl FrameSource for CameraSource {
    fn read_frame(&mut self) -> Result<Frame> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| CellscanError::ReadFailure(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CellscanError::ReadFailure(e.to_string()))?;
        Ok(Frame::from_rgb_image(&decoded))
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        // Stopping an already-stopped stream is harmless.
        let _ = self.camera.stop_stream();
    }
}

/// Default opener used by the binaries.
pub struct CameraOpener;

impl SourceOpener for CameraOpener {
    fn open(&self, device_index: u32) -> Result<Box<dyn FrameSource>> {
        Ok(Box::new(CameraSource::open(device_index)?))
    }
}

/// One attached capture device, as reported by the OS backend.
#[derive(Clone, Debug)]
pub struct CameraDescriptor {
    pub index: String,
    pub name: String,
    pub description: String,
}

/// Enumerate capture devices visible to the native backend.
pub fn list_cameras() -> Result<Vec<CameraDescriptor>> {
    let cameras = nokhwa::query(ApiBackend::Auto)
        .map_err(|e| CellscanError::DeviceUnavailable {
            index: 0,
            reason: e.to_string(),
        })?;

    Ok(cameras
        .into_iter()
        .map(|info| CameraDescriptor {
            index: info.index().to_string(),
            name: info.human_name(),
            description: info.description().to_string(),
        })
        .collect())
}
