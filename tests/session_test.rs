//! Integration tests for the tracking session

use head_mouse::config::Config;
use head_mouse::cursor_control::CursorBackend;
use head_mouse::error::{Error, Result};
use head_mouse::mapping::Zone;
use head_mouse::sensor::{SensorStatus, SkeletonSource};
use head_mouse::session::{SessionState, StatusDisplay, TrackingSession};
use head_mouse::skeleton::{Position3, SkeletonFrame};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Scripted sensor feeding a fixed sequence of frames
struct ScriptedSensor {
    status: SensorStatus,
    frames: VecDeque<Result<Option<SkeletonFrame>>>,
}

impl ScriptedSensor {
    fn new(status: SensorStatus, frames: Vec<Result<Option<SkeletonFrame>>>) -> Self {
        Self {
            status,
            frames: frames.into(),
        }
    }
}

impl SkeletonSource for ScriptedSensor {
    fn status(&self) -> SensorStatus {
        self.status
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn poll_frame(&mut self) -> Result<Option<SkeletonFrame>> {
        self.frames.pop_front().unwrap_or(Ok(None))
    }
}

/// Cursor double recording every write, shared with the test body
#[derive(Default)]
struct CursorLog {
    position: (i32, i32),
    writes: Vec<(i32, i32)>,
}

struct SharedCursor(Rc<RefCell<CursorLog>>);

impl CursorBackend for SharedCursor {
    fn get_position(&mut self) -> Result<(i32, i32)> {
        Ok(self.0.borrow().position)
    }

    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        let mut log = self.0.borrow_mut();
        log.position = (x, y);
        log.writes.push((x, y));
        Ok(())
    }

    fn release_capture(&mut self) -> Result<()> {
        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        (1920, 1080)
    }
}

/// Display double recording the latest text per surface
#[derive(Default)]
struct DisplayLog {
    status: String,
    head: String,
    cursor: String,
}

struct SharedDisplay(Rc<RefCell<DisplayLog>>);

impl StatusDisplay for SharedDisplay {
    fn set_status(&mut self, text: &str) {
        self.0.borrow_mut().status = text.to_string();
    }

    fn set_head_position(&mut self, text: &str) {
        self.0.borrow_mut().head = text.to_string();
    }

    fn set_cursor_position(&mut self, text: &str) {
        self.0.borrow_mut().cursor = text.to_string();
    }

    fn set_sensitivity(&mut self, _text: &str) {}
}

fn build_session(
    config: Config,
    sensor: ScriptedSensor,
) -> (
    TrackingSession,
    Rc<RefCell<CursorLog>>,
    Rc<RefCell<DisplayLog>>,
) {
    let cursor_log = Rc::new(RefCell::new(CursorLog {
        position: (300, 540),
        writes: Vec::new(),
    }));
    let display_log = Rc::new(RefCell::new(DisplayLog::default()));
    let session = TrackingSession::new(
        config,
        Box::new(sensor),
        Box::new(SharedCursor(Rc::clone(&cursor_log))),
        Box::new(SharedDisplay(Rc::clone(&display_log))),
    )
    .unwrap();
    (session, cursor_log, display_log)
}

fn head_frame(x: f32) -> SkeletonFrame {
    SkeletonFrame::with_tracked_head(Position3::new(x, 0.4, 1.8))
}

#[test]
fn test_zone_frame_drives_cursor_and_preserves_y() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, cursor, _) = build_session(Config::default(), sensor);

    session.start().unwrap();
    let target = session.handle_frame(head_frame(0.2)).unwrap().unwrap();

    assert_eq!(target.zone, Some(Zone::Right));
    assert_eq!(cursor.borrow().position, (1440, 540));
}

#[test]
fn test_no_subject_frame_updates_display_only() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, cursor, display) = build_session(Config::default(), sensor);

    session.start().unwrap();
    session.handle_frame(head_frame(0.2)).unwrap();
    let writes_before = cursor.borrow().writes.len();

    session.handle_frame(SkeletonFrame::default()).unwrap();

    assert_eq!(cursor.borrow().writes.len(), writes_before);
    assert_eq!(display.borrow().head, "No subject detected");
    assert_eq!(session.last_target_x(), Some(1440));
}

#[test]
fn test_enforcement_corrects_external_drift() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, cursor, _) = build_session(Config::default(), sensor);

    session.start().unwrap();
    session.handle_frame(head_frame(0.2)).unwrap();
    assert_eq!(cursor.borrow().position.0, 1440);

    // Another input source drags the cursor away
    cursor.borrow_mut().position = (700, 333);
    assert!(session.enforcement_tick().unwrap());
    assert_eq!(cursor.borrow().position, (1440, 333));

    // Converged: the next tick stays quiet
    assert!(!session.enforcement_tick().unwrap());
}

#[test]
fn test_drift_within_tolerance_is_ignored() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, cursor, _) = build_session(Config::default(), sensor);

    session.start().unwrap();
    session.handle_frame(head_frame(0.2)).unwrap();
    let writes_before = cursor.borrow().writes.len();

    cursor.borrow_mut().position = (1443, 540);
    assert!(!session.enforcement_tick().unwrap());
    assert_eq!(cursor.borrow().writes.len(), writes_before);
}

#[test]
fn test_start_fails_without_usable_sensor() {
    let sensor = ScriptedSensor::new(SensorStatus::Disconnected, vec![]);
    let (mut session, cursor, display) = build_session(Config::default(), sensor);

    let err = session.start().unwrap_err();
    assert!(matches!(err, Error::DeviceUnavailable(_)));
    assert_eq!(session.state(), SessionState::Idle);
    assert!(cursor.borrow().writes.is_empty());
    assert!(display.borrow().status.contains("not ready"));
}

#[test]
fn test_transient_frame_error_does_not_stop_run() {
    let frames = vec![
        Err(Error::Frame("skeleton stream hiccup".to_string())),
        Ok(Some(head_frame(0.2))),
    ];
    let sensor = ScriptedSensor::new(SensorStatus::Connected, frames);
    let (mut session, cursor, _) = build_session(Config::default(), sensor);

    session
        .run(Some(std::time::Duration::from_millis(30)))
        .unwrap();

    // The frame after the error was still mapped
    assert!(cursor.borrow().writes.contains(&(1440, 540)));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_calibrate_then_recenter_changes_zone() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, _, display) = build_session(Config::default(), sensor);

    session.start().unwrap();

    // Head sits at 0.2 m: far right of the default center
    let before = session.handle_frame(head_frame(0.2)).unwrap().unwrap();
    assert_eq!(before.zone, Some(Zone::Right));

    // Calibrating makes that position the neutral reference
    session.calibrate().unwrap();
    assert!(display.borrow().status.starts_with("Calibrated!"));

    let after = session.handle_frame(head_frame(0.2)).unwrap().unwrap();
    assert_eq!(after.zone, Some(Zone::Center));
}

#[test]
fn test_linear_session_writes_continuous_targets() {
    let mut config = Config::default();
    config.mapping.variant = "linear".to_string();
    config.mapping.sensitivity = 1.0;
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, cursor, _) = build_session(config, sensor);

    session.start().unwrap();
    session.handle_frame(head_frame(0.15)).unwrap();
    assert_eq!(cursor.borrow().position.0, 1440);

    session.handle_frame(head_frame(-0.15)).unwrap();
    assert_eq!(cursor.borrow().position.0, 480);

    // Drift is not fought in linear mode
    cursor.borrow_mut().position = (100, 100);
    assert!(!session.enforcement_tick().unwrap());
    assert_eq!(cursor.borrow().position, (100, 100));
}

#[test]
fn test_run_stops_idle_after_duration() {
    let sensor = ScriptedSensor::new(SensorStatus::Connected, vec![]);
    let (mut session, _, display) = build_session(Config::default(), sensor);

    session
        .run(Some(std::time::Duration::from_millis(10)))
        .unwrap();

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(display.borrow().status, "Tracking stopped");
}
