//! Head-to-cursor mapping strategies.
//!
//! Two mutually exclusive strategies translate a head X position into a
//! target screen X coordinate: a three-zone discrete classifier and a
//! continuous linear mapping. Neither supersedes the other; the active one
//! is chosen by configuration. Both are pure functions over the calibration
//! state and never mutate it. No smoothing is applied: a head oscillating
//! across a zone boundary flips the target just as fast.

use crate::{
    calibration::CalibrationState,
    error::{Error, Result},
};
use std::fmt;

/// One of the three fixed horizontal screen regions used by the zone mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Left quarter point of the screen
    Left,
    /// Screen center
    Center,
    /// Right quarter point of the screen
    Right,
}

impl Zone {
    /// Fixed target X coordinate for this zone
    #[must_use]
    pub const fn target_x(self, screen_width: i32) -> i32 {
        match self {
            Self::Left => screen_width / 4,
            Self::Center => screen_width / 2,
            Self::Right => (screen_width * 3) / 4,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
        };
        write!(f, "{label}")
    }
}

/// Result of mapping one head sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedTarget {
    /// Target screen X coordinate
    pub target_x: i32,
    /// Zone label, present for the zone strategy only
    pub zone: Option<Zone>,
}

/// A strategy turning a head X position into a target screen X coordinate
pub trait TargetMapper: Send {
    /// Map a head X position under the given calibration
    fn map(&self, head_x: f32, calib: &CalibrationState) -> MappedTarget;

    /// Strategy name
    fn name(&self) -> &str;
}

/// Discrete three-zone classifier.
///
/// Compares the head's offset from center against the sensitivity-scaled
/// threshold. Comparisons are strict, so a sample exactly at the boundary
/// classifies as Center.
pub struct ZoneMapper {
    screen_width: i32,
}

impl ZoneMapper {
    /// Create a zone mapper for the given screen width
    #[must_use]
    pub const fn new(screen_width: i32) -> Self {
        Self { screen_width }
    }

    /// Classify a head offset into a zone
    #[must_use]
    pub fn classify(movement: f32, effective_threshold: f32) -> Zone {
        if movement < -effective_threshold {
            Zone::Left
        } else if movement > effective_threshold {
            Zone::Right
        } else {
            Zone::Center
        }
    }
}

impl TargetMapper for ZoneMapper {
    fn map(&self, head_x: f32, calib: &CalibrationState) -> MappedTarget {
        let movement = head_x - calib.center_x;
        let zone = Self::classify(movement, calib.effective_threshold());
        MappedTarget {
            target_x: zone.target_x(self.screen_width),
            zone: Some(zone),
        }
    }

    fn name(&self) -> &str {
        "zone"
    }
}

/// Continuous linear mapping.
///
/// The head offset is normalized by the calibrated range, clamped to
/// [-1, 1], scaled by sensitivity and affine-mapped onto the screen.
/// Sensitivity applies after the clamp, so values above 1 cannot push the
/// target past the screen edges but do compress the usable head range.
pub struct LinearMapper {
    screen_width: i32,
}

impl LinearMapper {
    /// Create a linear mapper for the given screen width
    #[must_use]
    pub const fn new(screen_width: i32) -> Self {
        Self { screen_width }
    }
}

impl TargetMapper for LinearMapper {
    #[allow(clippy::cast_possible_truncation)] // Rounded value is clamped to screen bounds
    fn map(&self, head_x: f32, calib: &CalibrationState) -> MappedTarget {
        let relative = f64::from((head_x - calib.center_x) / calib.range_x);
        let relative = relative.clamp(-1.0, 1.0) * calib.sensitivity;
        let target = (f64::from(self.screen_width) * (relative + 1.0) / 2.0).round() as i32;
        MappedTarget {
            target_x: target.clamp(0, self.screen_width - 1),
            zone: None,
        }
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Create a mapping strategy by name
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for unknown strategy names
pub fn create_mapper(name: &str, screen_width: i32) -> Result<Box<dyn TargetMapper>> {
    match name.to_lowercase().as_str() {
        "zone" => Ok(Box::new(ZoneMapper::new(screen_width))),
        "linear" => Ok(Box::new(LinearMapper::new(screen_width))),
        _ => Err(Error::InvalidInput(format!(
            "Unknown mapping strategy: {name}"
        ))),
    }
}
