//! Tracking session state machine and cooperative run loop.
//!
//! All mapping state lives in one owner: the session. Frame arrival, the UI
//! tick and the enforcement tick are interleaved on a single thread, so no
//! locking is needed; stopping is observed by the next loop iteration.

use crate::{
    calibration::CalibrationState,
    config::Config,
    cursor_control::CursorBackend,
    enforcement::Enforcement,
    error::{Error, Result},
    mapping::{MappedTarget, TargetMapper},
    sensor::SkeletonSource,
    skeleton::SkeletonFrame,
};
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not tracking; frames are ignored and enforcement is disarmed
    Idle,
    /// Consuming frames and driving the cursor
    Tracking,
}

/// Write-only text surfaces of the UI collaborator
pub trait StatusDisplay {
    /// General status line
    fn set_status(&mut self, text: &str);

    /// Head position readout
    fn set_head_position(&mut self, text: &str);

    /// Cursor target readout
    fn set_cursor_position(&mut self, text: &str);

    /// Sensitivity readout
    fn set_sensitivity(&mut self, text: &str);
}

/// Default display routing the text surfaces to the logger
pub struct LogDisplay;

impl StatusDisplay for LogDisplay {
    fn set_status(&mut self, text: &str) {
        info!("Status: {text}");
    }

    fn set_head_position(&mut self, text: &str) {
        debug!("Head: {text}");
    }

    fn set_cursor_position(&mut self, text: &str) {
        debug!("Cursor: {text}");
    }

    fn set_sensitivity(&mut self, text: &str) {
        debug!("Sensitivity: {text}");
    }
}

/// A head tracking session driving the cursor
pub struct TrackingSession {
    config: Config,
    state: SessionState,
    sensor: Box<dyn SkeletonSource>,
    cursor: Box<dyn CursorBackend>,
    display: Box<dyn StatusDisplay>,
    calibration: CalibrationState,
    mapper: Box<dyn TargetMapper>,
    enforcement: Enforcement,
    enforcement_enabled: bool,
    last_frame: Option<SkeletonFrame>,
}

impl TrackingSession {
    /// Create a session over the given collaborators
    ///
    /// # Errors
    ///
    /// Returns an error when the configured mapping strategy is unknown
    pub fn new(
        config: Config,
        sensor: Box<dyn SkeletonSource>,
        cursor: Box<dyn CursorBackend>,
        mut display: Box<dyn StatusDisplay>,
    ) -> Result<Self> {
        let (screen_width, _) = cursor.screen_size();
        let mapper = config.create_mapper(screen_width)?;
        let calibration = config.calibration();
        let enforcement = config.enforcement();

        // Re-assertion only applies to the zone strategy; the linear mapping
        // writes once per frame and lets the cursor move freely in between.
        let enforcement_enabled = config.enforcement.enabled && mapper.name() == "zone";

        info!(
            "Session created: {} mapping, screen width {}, enforcement {}",
            mapper.name(),
            screen_width,
            if enforcement_enabled { "on" } else { "off" }
        );
        display.set_status("Ready - start to begin tracking");

        Ok(Self {
            config,
            state: SessionState::Idle,
            sensor,
            cursor,
            display,
            calibration,
            mapper,
            enforcement,
            enforcement_enabled,
            last_frame: None,
        })
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current calibration state
    #[must_use]
    pub const fn calibration(&self) -> &CalibrationState {
        &self.calibration
    }

    /// The most recently mapped target X, if any
    #[must_use]
    pub const fn last_target_x(&self) -> Option<i32> {
        self.enforcement.last_target_x()
    }

    /// Begin tracking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnavailable`] without a state change when the
    /// sensor is not in a usable status
    pub fn start(&mut self) -> Result<()> {
        let status = self.sensor.status();
        if !status.is_usable() {
            self.display
                .set_status(&format!("Sensor not ready: {status}"));
            return Err(Error::DeviceUnavailable(status.to_string()));
        }

        self.sensor.start()?;
        self.state = SessionState::Tracking;
        self.display.set_status("Tracking head movement");
        info!("Tracking started (sensor {status})");
        Ok(())
    }

    /// Stop tracking. Always legal, idempotent.
    pub fn stop(&mut self) {
        self.state = SessionState::Idle;
        self.enforcement.deactivate();
        self.sensor.stop();
        self.display.set_status("Tracking stopped");
        info!("Tracking stopped");
    }

    /// Record the current head position as the neutral reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceUnavailable`] when the sensor is not usable,
    /// or [`Error::NoSubjectTracked`] when no tracked head is available;
    /// calibration is unchanged in both cases
    pub fn calibrate(&mut self) -> Result<()> {
        let status = self.sensor.status();
        if !status.is_usable() {
            self.display.set_status("Sensor not connected");
            return Err(Error::DeviceUnavailable(status.to_string()));
        }

        let frame = self.last_frame.clone().unwrap_or_default();
        match self.calibration.calibrate(&frame) {
            Ok(center) => {
                self.display.set_status(&format!(
                    "Calibrated! Center: {center:.3}, threshold: ±{:.3}",
                    self.calibration.effective_threshold()
                ));
                Ok(())
            }
            Err(e) => {
                self.display
                    .set_status("No subject detected for calibration");
                Err(e)
            }
        }
    }

    /// Overwrite the sensitivity multiplier and refresh its readout
    pub fn set_sensitivity(&mut self, value: f64) {
        self.calibration.set_sensitivity(value);
        self.display.set_sensitivity(&format!("{value:.1}x"));
    }

    /// Consume one sensor frame.
    ///
    /// Ignored while idle. Frames without a tracked subject update the
    /// display only; the calibrated center and the last target stay in
    /// effect. Returns the mapped target when one was computed.
    ///
    /// # Errors
    ///
    /// Propagates cursor read/write failures; the run loop treats them as
    /// non-fatal
    pub fn handle_frame(&mut self, frame: SkeletonFrame) -> Result<Option<MappedTarget>> {
        if self.state != SessionState::Tracking {
            return Ok(None);
        }

        self.last_frame = Some(frame.clone());

        let Some(head) = frame.tracked_head() else {
            self.display.set_head_position("No subject detected");
            self.display.set_cursor_position("Waiting for subject...");
            return Ok(None);
        };

        self.display.set_head_position(&format!(
            "{:.3} (center: {:.3})",
            head.x(),
            self.calibration.center_x
        ));

        let target = self.mapper.map(head.x(), &self.calibration);
        let (_, live_y) = self.cursor.get_position()?;

        if self.enforcement_enabled {
            self.enforcement.activate(target.target_x);
            self.enforcement
                .assert_position(self.cursor.as_mut(), target.target_x, live_y)?;
        } else {
            self.cursor.set_position(target.target_x, live_y)?;
        }

        let movement = head.x() - self.calibration.center_x;
        match target.zone {
            Some(zone) => self.display.set_cursor_position(&format!(
                "{} - {zone} (movement: {movement:.3}, threshold: ±{:.3})",
                target.target_x,
                self.calibration.effective_threshold()
            )),
            None => self.display.set_cursor_position(&format!(
                "{} (movement: {movement:.3})",
                target.target_x
            )),
        }

        Ok(Some(target))
    }

    /// One enforcement cycle; quiet while idle or when re-assertion is off.
    ///
    /// # Errors
    ///
    /// Propagates cursor read/write failures
    pub fn enforcement_tick(&mut self) -> Result<bool> {
        if self.state != SessionState::Tracking || !self.enforcement_enabled {
            return Ok(false);
        }
        self.enforcement.tick(self.cursor.as_mut())
    }

    /// UI-rate refresh of the sensitivity readout
    pub fn ui_tick(&mut self) {
        let sensitivity = self.calibration.sensitivity;
        self.display.set_sensitivity(&format!("{sensitivity:.1}x"));
    }

    /// Cooperative tracking loop.
    ///
    /// Interleaves frame polling with the enforcement and UI ticks on the
    /// calling thread until `duration` elapses (or forever when `None`).
    /// Frame and cursor failures are surfaced and tolerated; the loop keeps
    /// tracking.
    ///
    /// # Errors
    ///
    /// Returns an error only when tracking cannot start
    pub fn run(&mut self, duration: Option<Duration>) -> Result<()> {
        self.start()?;

        let started = Instant::now();
        let ui_tick = Duration::from_millis(self.config.timing.ui_tick_ms);
        let enforcement_tick = Duration::from_millis(self.config.timing.enforcement_tick_ms);
        let mut last_ui_tick = Instant::now();
        let mut last_enforcement_tick = Instant::now();

        while self.state == SessionState::Tracking {
            if let Some(limit) = duration {
                if started.elapsed() >= limit {
                    info!("Run duration elapsed");
                    break;
                }
            }

            match self.sensor.poll_frame() {
                Ok(Some(frame)) => {
                    if let Err(e) = self.handle_frame(frame) {
                        warn!("Frame processing error: {e}");
                        self.display.set_status(&format!("Frame error: {e}"));
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    // Transient by design: report and keep tracking
                    warn!("Frame read error: {e}");
                    self.display.set_status(&format!("Frame error: {e}"));
                }
            }

            if last_enforcement_tick.elapsed() >= enforcement_tick {
                last_enforcement_tick = Instant::now();
                if let Err(e) = self.enforcement_tick() {
                    debug!("Enforcement error: {e}");
                }
            }

            if last_ui_tick.elapsed() >= ui_tick {
                last_ui_tick = Instant::now();
                self.ui_tick();
            }

            thread::sleep(Duration::from_millis(1));
        }

        self.stop();
        Ok(())
    }
}

impl Drop for TrackingSession {
    fn drop(&mut self) {
        if self.state == SessionState::Tracking {
            self.enforcement.deactivate();
            self.sensor.stop();
        }
    }
}
