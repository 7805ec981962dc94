mod common;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use cellscan_core::capture::{FrameSource, SourceOpener};
use cellscan_core::error::{CellscanError, Result};
use cellscan_core::frame::Frame;
use cellscan_core::params::DetectParams;
use cellscan_core::session::{DisplaySink, DisplaySlot, SessionController, SessionPhase};
use common::{black_frame, draw_filled_circle, RED_BGR};

/// Frame source that replays a scripted sequence of reads.
struct ScriptedSource {
    reads: Rc<RefCell<VecDeque<Result<Frame>>>>,
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> Result<Frame> {
        self.reads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(CellscanError::ReadFailure("script exhausted".into())))
    }
}

struct ScriptedOpener {
    reads: Rc<RefCell<VecDeque<Result<Frame>>>>,
    fail_open: bool,
}

impl ScriptedOpener {
    fn with_reads(reads: Vec<Result<Frame>>) -> (Self, Rc<RefCell<VecDeque<Result<Frame>>>>) {
        let shared = Rc::new(RefCell::new(reads.into_iter().collect()));
        (
            Self {
                reads: Rc::clone(&shared),
                fail_open: false,
            },
            shared,
        )
    }

    fn failing() -> Self {
        Self {
            reads: Rc::new(RefCell::new(VecDeque::new())),
            fail_open: true,
        }
    }
}

impl SourceOpener for ScriptedOpener {
    fn open(&self, device_index: u32) -> Result<Box<dyn FrameSource>> {
        if self.fail_open {
            return Err(CellscanError::DeviceUnavailable {
                index: device_index,
                reason: "no such device".into(),
            });
        }
        Ok(Box::new(ScriptedSource {
            reads: Rc::clone(&self.reads),
        }))
    }
}

#[derive(Default)]
struct RecordingSink {
    shown: Vec<DisplaySlot>,
    counts: Vec<usize>,
}

impl DisplaySink for RecordingSink {
    fn show(&mut self, slot: DisplaySlot, _frame: &Frame) {
        self.shown.push(slot);
    }

    fn report_count(&mut self, count: usize) {
        self.counts.push(count);
    }
}

fn live_frame() -> Frame {
    let mut frame = black_frame(40, 40);
    draw_filled_circle(&mut frame, 20, 20, 6, RED_BGR);
    frame
}

fn params() -> DetectParams {
    DetectParams {
        hue_lo: 0,
        hue_hi: 10,
        sat_lo: 100,
        sat_hi: 255,
        val_lo: 100,
        val_hi: 255,
        kernel_size: 3,
        min_area: 10.0,
        max_area: 500.0,
    }
}

#[test]
fn test_open_failure_stays_closed() {
    let mut session = SessionController::new(Box::new(ScriptedOpener::failing()));

    let err = session.start(9999, 30).unwrap_err();
    assert!(matches!(
        err,
        CellscanError::DeviceUnavailable { index: 9999, .. }
    ));
    assert_eq!(session.phase(), SessionPhase::Closed);
    assert!(session.poll_interval().is_none());
}

#[test]
fn test_stop_while_closed_is_noop() {
    let (opener, _) = ScriptedOpener::with_reads(vec![]);
    let mut session = SessionController::new(Box::new(opener));

    session.stop();
    session.stop();
    assert_eq!(session.phase(), SessionPhase::Closed);
}

#[test]
fn test_capture_before_first_tick_fails() {
    let (opener, _) = ScriptedOpener::with_reads(vec![Ok(live_frame())]);
    let mut session = SessionController::new(Box::new(opener));
    let mut sink = RecordingSink::default();

    session.start(0, 30).unwrap();
    let err = session.capture(&params(), &mut sink).unwrap_err();
    assert!(matches!(err, CellscanError::NothingToCapture));
    assert!(sink.shown.is_empty());
}

#[test]
fn test_tick_then_capture_notifies_all_slots() {
    let (opener, _) = ScriptedOpener::with_reads(vec![Ok(live_frame())]);
    let mut session = SessionController::new(Box::new(opener));
    let mut sink = RecordingSink::default();

    session.start(0, 30).unwrap();
    session.tick(&mut sink).unwrap();
    assert_eq!(sink.shown, vec![DisplaySlot::LiveFeed]);
    assert!(session.current_frame().is_some());

    session.capture(&params(), &mut sink).unwrap();
    assert_eq!(
        sink.shown,
        vec![
            DisplaySlot::LiveFeed,
            DisplaySlot::Mask,
            DisplaySlot::CleanedMask,
            DisplaySlot::Annotated,
        ]
    );
    assert_eq!(sink.counts, vec![1]);
    assert_eq!(session.phase(), SessionPhase::Live);
    assert_eq!(session.last_detection().map(|d| d.count()), Some(1));
}

#[test]
fn test_read_failure_auto_stops() {
    let (opener, _) = ScriptedOpener::with_reads(vec![
        Ok(live_frame()),
        Err(CellscanError::ReadFailure("device unplugged".into())),
    ]);
    let mut session = SessionController::new(Box::new(opener));
    let mut sink = RecordingSink::default();

    session.start(0, 30).unwrap();
    session.tick(&mut sink).unwrap();
    assert_eq!(session.phase(), SessionPhase::Live);

    let err = session.tick(&mut sink).unwrap_err();
    assert!(matches!(err, CellscanError::ReadFailure(_)));
    assert_eq!(session.phase(), SessionPhase::Closed);
    assert!(session.current_frame().is_none());
}

#[test]
fn test_tick_while_closed_is_noop() {
    let (opener, _) = ScriptedOpener::with_reads(vec![]);
    let mut session = SessionController::new(Box::new(opener));
    let mut sink = RecordingSink::default();

    session.tick(&mut sink).unwrap();
    assert!(sink.shown.is_empty());
}

#[test]
fn test_poll_interval_from_fps() {
    let (opener, _) = ScriptedOpener::with_reads(vec![]);
    let mut session = SessionController::new(Box::new(opener));

    session.start(0, 30).unwrap();
    assert_eq!(session.poll_interval(), Some(Duration::from_millis(33)));
    session.stop();

    // fps 0 clamps to 1 rather than dividing by zero.
    session.start(0, 0).unwrap();
    assert_eq!(session.poll_interval(), Some(Duration::from_millis(1000)));
}

#[test]
fn test_restart_after_stop() {
    let (opener, reads) = ScriptedOpener::with_reads(vec![Ok(live_frame())]);
    let mut session = SessionController::new(Box::new(opener));
    let mut sink = RecordingSink::default();

    session.start(0, 30).unwrap();
    session.tick(&mut sink).unwrap();
    session.stop();
    assert!(session.current_frame().is_none());

    reads.borrow_mut().push_back(Ok(live_frame()));
    session.start(0, 15).unwrap();
    session.tick(&mut sink).unwrap();
    assert!(session.current_frame().is_some());
}
