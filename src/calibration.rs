//! Calibration state for the head-to-cursor mapping.
//!
//! Holds the neutral head reference and the user-adjustable sensitivity.
//! The mapping functions read this state but never mutate it; only the
//! explicit calibrate action and the sensitivity control do.

use crate::{
    constants::{DEFAULT_HEAD_RANGE_M, DEFAULT_HEAD_THRESHOLD_M, DEFAULT_SENSITIVITY},
    error::{Error, Result},
    skeleton::SkeletonFrame,
};
use log::info;

/// Calibrated mapping parameters, valid for one application session
#[derive(Debug, Clone, Copy)]
pub struct CalibrationState {
    /// Neutral horizontal head position, in meters
    pub center_x: f32,
    /// Zone detection threshold, in meters
    pub threshold: f32,
    /// Horizontal head span covered by the linear mapping, in meters
    pub range_x: f32,
    /// User-adjustable threshold multiplier
    pub sensitivity: f64,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            threshold: DEFAULT_HEAD_THRESHOLD_M,
            range_x: DEFAULT_HEAD_RANGE_M,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl CalibrationState {
    /// Create calibration state with explicit mapping parameters
    #[must_use]
    pub fn new(threshold: f32, range_x: f32, sensitivity: f64) -> Self {
        Self {
            center_x: 0.0,
            threshold,
            range_x,
            sensitivity,
        }
    }

    /// Record the current head position as the neutral reference.
    ///
    /// Idempotent for a given frame. Returns the new center on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSubjectTracked`] and leaves the state unchanged
    /// when the frame holds no tracked head.
    pub fn calibrate(&mut self, frame: &SkeletonFrame) -> Result<f32> {
        let head = frame.tracked_head().ok_or(Error::NoSubjectTracked)?;
        self.center_x = head.x();
        info!(
            "Calibrated: center {:.3} m, threshold ±{:.3} m",
            self.center_x,
            self.effective_threshold()
        );
        Ok(self.center_x)
    }

    /// Overwrite the sensitivity multiplier.
    ///
    /// The value comes from a bounded UI control; no validation is applied.
    pub fn set_sensitivity(&mut self, value: f64) {
        self.sensitivity = value;
    }

    /// Zone threshold scaled by the current sensitivity
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Sensitivity is a small UI value
    pub fn effective_threshold(&self) -> f32 {
        self.threshold * self.sensitivity as f32
    }
}
