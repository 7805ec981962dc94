#[cfg(feature = "camera")]
pub mod camera;

use crate::error::Result;
use crate::frame::Frame;

/// A live video capture device.
///
/// Releasing the device is modeled as `Drop`: once the boxed source is
/// dropped, no further reads are representable, which gives the close
/// contract (idempotent, never an error) for free.
pub trait FrameSource {
    /// Block until the next frame is available.
    ///
    /// Fails with `ReadFailure` if the device disconnects or the
    /// underlying read errors.
    fn read_frame(&mut self) -> Result<Frame>;
}

/// Factory for frame sources, keyed by a small non-negative device index.
pub trait SourceOpener {
    /// Acquire the capture device, allocating driver resources.
    ///
    /// Fails with `DeviceUnavailable` if the device is absent, busy, or
    /// rejected by the driver.
    fn open(&self, device_index: u32) -> Result<Box<dyn FrameSource>>;
}
