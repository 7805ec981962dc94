use std::time::Duration;

use tracing::{info, warn};

use crate::capture::{FrameSource, SourceOpener};
use crate::detect::{self, Detection};
use crate::error::{CellscanError, Result};
use crate::frame::Frame;
use crate::params::DetectParams;

/// Logical display slot on the presentation side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplaySlot {
    LiveFeed,
    Mask,
    CleanedMask,
    Annotated,
}

/// Sink the controller pushes images and counts into. The presentation
/// layer owns rendering; the core only hands values across read-only.
pub trait DisplaySink {
    fn show(&mut self, slot: DisplaySlot, frame: &Frame);
    fn report_count(&mut self, count: usize);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No device acquired.
    Closed,
    /// Device acquired, polling active.
    Live,
}

/// Owns the frame source, the latest live frame, and the latest detection.
///
/// Single logical thread of control: the caller invokes `tick` from one
/// periodic task and everything else synchronously from user actions, so
/// at most one tick is ever in flight.
pub struct SessionController {
    opener: Box<dyn SourceOpener>,
    source: Option<Box<dyn FrameSource>>,
    current: Option<Frame>,
    last_detection: Option<Detection>,
    poll_interval: Duration,
}

impl SessionController {
    pub fn new(opener: Box<dyn SourceOpener>) -> Self {
        Self {
            opener,
            source: None,
            current: None,
            last_detection: None,
            poll_interval: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.source.is_some() {
            SessionPhase::Live
        } else {
            SessionPhase::Closed
        }
    }

    pub fn is_live(&self) -> bool {
        self.phase() == SessionPhase::Live
    }

    /// Tick period while Live: 1000 / target_fps milliseconds.
    pub fn poll_interval(&self) -> Option<Duration> {
        self.source.as_ref().map(|_| self.poll_interval)
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn last_detection(&self) -> Option<&Detection> {
        self.last_detection.as_ref()
    }

    /// Closed -> Live. On `DeviceUnavailable` the session stays Closed.
    pub fn start(&mut self, device_index: u32, target_fps: u32) -> Result<()> {
        let source = self.opener.open(device_index)?;
        let fps = target_fps.max(1);
        self.poll_interval = Duration::from_millis(1000 / fps as u64);
        self.source = Some(source);
        info!(device_index, fps, "Session started");
        Ok(())
    }

    /// Live -> Closed. Drops the device and clears the frame cache.
    /// A no-op when already Closed.
    pub fn stop(&mut self) {
        if self.source.take().is_some() {
            self.current = None;
            info!("Session stopped");
        }
    }

    /// One poll tick: read a frame, cache it, push it to the live slot.
    ///
    /// On `ReadFailure` the session auto-stops (Live -> Closed) so a
    /// disconnected device cannot produce a tight failure loop; the error
    /// is returned for the presentation layer to surface. Ticking while
    /// Closed is a no-op.
    pub fn tick(&mut self, sink: &mut dyn DisplaySink) -> Result<()> {
        let Some(source) = self.source.as_mut() else {
            return Ok(());
        };

        match source.read_frame() {
            Ok(frame) => {
                sink.show(DisplaySlot::LiveFeed, &frame);
                self.current = Some(frame);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Frame read failed, stopping session");
                self.stop();
                Err(err)
            }
        }
    }

    /// Run detection on the cached live frame and push the results.
    /// Polling is unaffected; the session stays Live.
    pub fn capture(&mut self, params: &DetectParams, sink: &mut dyn DisplaySink) -> Result<()> {
        let frame = self.current.as_ref().ok_or(CellscanError::NothingToCapture)?;

        let detection = detect::detect(frame, params);
        info!(count = detection.count(), "Capture processed");

        sink.show(DisplaySlot::Mask, &Frame::from_mask(&detection.mask));
        sink.show(DisplaySlot::CleanedMask, &Frame::from_mask(&detection.closed));
        sink.show(DisplaySlot::Annotated, &detection.annotated);
        sink.report_count(detection.count());

        self.last_detection = Some(detection);
        Ok(())
    }
}
