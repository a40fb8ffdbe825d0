//! Sensor collaborator boundary.
//!
//! The depth camera's device enumeration, stream enablement and frame
//! delivery live behind the [`SkeletonSource`] trait. The session polls the
//! source cooperatively; a source never blocks and reports frame read
//! failures as transient [`Error::Frame`] values.

use crate::{
    constants::{DEFAULT_SWEEP_AMPLITUDE_M, DEFAULT_SWEEP_PERIOD_S},
    error::Result,
    skeleton::{Position3, SkeletonFrame},
};
use log::info;
use std::fmt;
use std::time::Instant;

/// Device status as reported by the sensor runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorStatus {
    /// Device connected and ready
    Connected,
    /// Third-party device reporting as not genuine; tracks normally
    DeviceNotGenuine,
    /// Device found but still initializing
    Initializing,
    /// Device found but not ready for streaming
    NotReady,
    /// No device attached
    Disconnected,
    /// Device reported an unrecoverable error
    Error,
}

impl SensorStatus {
    /// Whether tracking can be started in this status.
    ///
    /// `DeviceNotGenuine` counts as usable: clone hardware reports it but
    /// streams skeleton data like a genuine device.
    #[must_use]
    pub const fn is_usable(self) -> bool {
        matches!(self, Self::Connected | Self::DeviceNotGenuine)
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connected => "connected",
            Self::DeviceNotGenuine => "device not genuine",
            Self::Initializing => "initializing",
            Self::NotReady => "not ready",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// Source of skeletal tracking frames.
///
/// Implemented by the device-facing glue and by test doubles. `poll_frame`
/// returns `Ok(None)` when no new frame is available yet.
pub trait SkeletonSource {
    /// Current device status
    fn status(&self) -> SensorStatus;

    /// Enable streaming. Only called when `status().is_usable()`.
    fn start(&mut self) -> Result<()>;

    /// Disable streaming. Always legal, idempotent.
    fn stop(&mut self);

    /// Fetch the next frame if one is ready
    fn poll_frame(&mut self) -> Result<Option<SkeletonFrame>>;
}

/// Synthetic source sweeping the head horizontally along a sine wave.
///
/// Stands in for the depth camera when none is attached, exercising the full
/// mapping pipeline with a predictable motion.
pub struct SweepSource {
    amplitude: f32,
    period_s: f64,
    started: Option<Instant>,
}

impl SweepSource {
    /// Create a sweep source with the given amplitude (meters) and period
    /// (seconds)
    #[must_use]
    pub fn new(amplitude: f32, period_s: f64) -> Self {
        Self {
            amplitude,
            period_s,
            started: None,
        }
    }
}

impl Default for SweepSource {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_AMPLITUDE_M, DEFAULT_SWEEP_PERIOD_S)
    }
}

impl SkeletonSource for SweepSource {
    fn status(&self) -> SensorStatus {
        SensorStatus::Connected
    }

    fn start(&mut self) -> Result<()> {
        info!(
            "Starting sweep source: amplitude {:.3} m, period {:.1} s",
            self.amplitude, self.period_s
        );
        self.started = Some(Instant::now());
        Ok(())
    }

    fn stop(&mut self) {
        self.started = None;
    }

    #[allow(clippy::cast_possible_truncation)] // Sine output is in [-1, 1]
    fn poll_frame(&mut self) -> Result<Option<SkeletonFrame>> {
        let Some(started) = self.started else {
            return Ok(None);
        };
        let t = started.elapsed().as_secs_f64();
        let phase = (t / self.period_s) * std::f64::consts::TAU;
        let x = self.amplitude * phase.sin() as f32;
        Ok(Some(SkeletonFrame::with_tracked_head(Position3::new(
            x, 0.4, 1.8,
        ))))
    }
}
