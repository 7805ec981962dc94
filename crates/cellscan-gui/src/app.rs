use std::time::Instant;

use cellscan_core::capture::camera::CameraOpener;
use cellscan_core::consts::DEFAULT_TARGET_FPS;
use cellscan_core::frame::Frame;
use cellscan_core::params::RawParams;
use cellscan_core::session::{DisplaySink, DisplaySlot, SessionController};

use crate::convert::frame_to_color_image;
use crate::panels;

/// Everything the panels render: one texture per display slot, the last
/// reported count, and the last user-visible error.
#[derive(Default)]
pub struct ViewState {
    pub live: Option<egui::TextureHandle>,
    pub mask: Option<egui::TextureHandle>,
    pub cleaned: Option<egui::TextureHandle>,
    pub annotated: Option<egui::TextureHandle>,
    pub count: usize,
    pub status: Option<String>,
}

/// DisplaySink that uploads frames as egui textures.
pub struct TextureSink<'a> {
    pub ctx: &'a egui::Context,
    pub view: &'a mut ViewState,
}

impl DisplaySink for TextureSink<'_> {
    fn show(&mut self, slot: DisplaySlot, frame: &Frame) {
        let image = frame_to_color_image(frame);
        let (name, target) = match slot {
            DisplaySlot::LiveFeed => ("live-feed", &mut self.view.live),
            DisplaySlot::Mask => ("mask", &mut self.view.mask),
            DisplaySlot::CleanedMask => ("cleaned-mask", &mut self.view.cleaned),
            DisplaySlot::Annotated => ("annotated", &mut self.view.annotated),
        };
        *target = Some(self.ctx.load_texture(name, image, egui::TextureOptions::NEAREST));
    }

    fn report_count(&mut self, count: usize) {
        self.view.count = count;
    }
}

pub struct CellscanApp {
    pub session: SessionController,
    pub raw_params: RawParams,
    pub device_index: String,
    pub target_fps: String,
    pub view: ViewState,
    last_tick: Instant,
}

impl CellscanApp {
    pub fn new() -> Self {
        Self {
            session: SessionController::new(Box::new(CameraOpener)),
            raw_params: RawParams::default(),
            device_index: "0".to_string(),
            target_fps: DEFAULT_TARGET_FPS.to_string(),
            view: ViewState::default(),
            last_tick: Instant::now(),
        }
    }

    pub fn start_camera(&mut self) {
        let Ok(index) = self.device_index.trim().parse::<u32>() else {
            self.view.status = Some(format!("Invalid device index: {:?}", self.device_index));
            return;
        };
        let Ok(fps) = self.target_fps.trim().parse::<u32>() else {
            self.view.status = Some(format!("Invalid FPS: {:?}", self.target_fps));
            return;
        };

        match self.session.start(index, fps) {
            Ok(()) => {
                self.view.status = None;
                self.last_tick = Instant::now();
            }
            Err(err) => self.view.status = Some(err.to_string()),
        }
    }

    pub fn stop_camera(&mut self) {
        self.session.stop();
    }

    pub fn capture(&mut self, ctx: &egui::Context) {
        let params = match self.raw_params.parse() {
            Ok(params) => params,
            Err(err) => {
                self.view.status = Some(err.to_string());
                return;
            }
        };

        let mut sink = TextureSink {
            ctx,
            view: &mut self.view,
        };
        if let Err(err) = self.session.capture(&params, &mut sink) {
            self.view.status = Some(err.to_string());
        } else {
            self.view.status = None;
        }
    }

    /// Advance the poll loop: read one frame when the tick period has
    /// elapsed, then schedule the next repaint at the coming deadline.
    /// Runs entirely on the UI thread, so at most one tick is in flight.
    fn advance_live_feed(&mut self, ctx: &egui::Context) {
        let Some(interval) = self.session.poll_interval() else {
            return;
        };

        if self.last_tick.elapsed() >= interval {
            let mut sink = TextureSink {
                ctx,
                view: &mut self.view,
            };
            if let Err(err) = self.session.tick(&mut sink) {
                self.view.status = Some(err.to_string());
            }
            self.last_tick = Instant::now();
        }

        let remaining = interval.saturating_sub(self.last_tick.elapsed());
        ctx.request_repaint_after(remaining);
    }
}

impl eframe::App for CellscanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_live_feed(ctx);

        panels::controls(ctx, self);
        panels::status(ctx, self);
        panels::image_grid(ctx, self);
    }
}

impl Drop for CellscanApp {
    fn drop(&mut self) {
        // Application exit always releases the capture device.
        self.session.stop();
    }
}
