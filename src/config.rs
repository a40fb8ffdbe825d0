//! Configuration management for the head mouse application

use crate::{
    calibration::CalibrationState,
    constants::{
        DEFAULT_HEAD_RANGE_M, DEFAULT_HEAD_THRESHOLD_M, DEFAULT_SENSITIVITY,
        DRIFT_TOLERANCE_PX, ENFORCEMENT_TICK_MS, MAX_SET_ATTEMPTS, SETTLE_TOLERANCE_PX,
        UI_TICK_MS,
    },
    enforcement::Enforcement,
    error::{Error, Result},
    mapping::{self, TargetMapper},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Mapping strategy configuration
    pub mapping: MappingConfig,

    /// Timer intervals
    pub timing: TimingConfig,

    /// Cursor enforcement configuration
    pub enforcement: EnforcementConfig,

    /// Sensor stream configuration
    pub sensor: SensorConfig,
}

/// Mapping strategy parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Strategy name ("zone" or "linear")
    pub variant: String,

    /// Zone detection threshold in meters
    pub threshold: f32,

    /// Head range covered by the linear mapping, in meters
    pub range_x: f32,

    /// Initial sensitivity multiplier
    pub sensitivity: f64,
}

/// Timer intervals driving the cooperative loop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// UI refresh interval in milliseconds
    pub ui_tick_ms: u64,

    /// Enforcement interval in milliseconds
    pub enforcement_tick_ms: u64,
}

/// Cursor enforcement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnforcementConfig {
    /// Enable the periodic re-assertion (zone strategy)
    pub enabled: bool,

    /// Drift beyond this many pixels triggers a corrective write
    pub drift_tolerance_px: i32,

    /// A write is settled within this many pixels
    pub settle_tolerance_px: i32,

    /// Attempts per corrective write
    pub max_attempts: u32,
}

/// Sensor stream options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Track the upper body only (subject is seated)
    pub seated_mode: bool,

    /// Enable near-range tracking where the device supports it
    pub near_range: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            variant: "zone".to_string(),
            threshold: DEFAULT_HEAD_THRESHOLD_M,
            range_x: DEFAULT_HEAD_RANGE_M,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ui_tick_ms: UI_TICK_MS,
            enforcement_tick_ms: ENFORCEMENT_TICK_MS,
        }
    }
}

impl Default for EnforcementConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            drift_tolerance_px: DRIFT_TOLERANCE_PX,
            settle_tolerance_px: SETTLE_TOLERANCE_PX,
            max_attempts: MAX_SET_ATTEMPTS,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            seated_mode: true,
            near_range: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build the initial calibration state from the mapping parameters
    #[must_use]
    pub fn calibration(&self) -> CalibrationState {
        CalibrationState::new(
            self.mapping.threshold,
            self.mapping.range_x,
            self.mapping.sensitivity,
        )
    }

    /// Build the enforcement state from the configured tolerances
    #[must_use]
    pub fn enforcement(&self) -> Enforcement {
        Enforcement::new(
            self.enforcement.drift_tolerance_px,
            self.enforcement.settle_tolerance_px,
            self.enforcement.max_attempts,
        )
    }

    /// Create the configured mapping strategy for the given screen width
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown strategy name
    pub fn create_mapper(&self, screen_width: i32) -> Result<Box<dyn TargetMapper>> {
        mapping::create_mapper(&self.mapping.variant, screen_width)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a descriptive [`Error::Config`] for the first invalid field
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.mapping.variant.to_lowercase().as_str(), "zone" | "linear") {
            return Err(Error::Config(format!(
                "Unknown mapping variant: {}",
                self.mapping.variant
            )));
        }
        if self.mapping.threshold <= 0.0 {
            return Err(Error::Config(
                "Zone threshold must be greater than 0".to_string(),
            ));
        }
        if self.mapping.range_x <= 0.0 {
            return Err(Error::Config(
                "Linear range must be greater than 0".to_string(),
            ));
        }

        if self.timing.ui_tick_ms == 0 {
            return Err(Error::Config(
                "UI tick interval must be greater than 0".to_string(),
            ));
        }
        if self.timing.enforcement_tick_ms == 0 {
            return Err(Error::Config(
                "Enforcement tick interval must be greater than 0".to_string(),
            ));
        }

        if self.enforcement.drift_tolerance_px < 0 || self.enforcement.settle_tolerance_px < 0 {
            return Err(Error::Config(
                "Enforcement tolerances must not be negative".to_string(),
            ));
        }
        if self.enforcement.settle_tolerance_px > self.enforcement.drift_tolerance_px {
            return Err(Error::Config(
                "Settle tolerance must not exceed drift tolerance".to_string(),
            ));
        }
        if self.enforcement.max_attempts == 0 {
            return Err(Error::Config(
                "Enforcement attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Mouse Configuration

# Mapping strategy: "zone" (three fixed targets) or "linear" (continuous)
mapping:
  variant: "zone"
  threshold: 0.01
  range_x: 0.3
  sensitivity: 0.5

# Timer intervals in milliseconds
timing:
  ui_tick_ms: 50
  enforcement_tick_ms: 10

# Cursor enforcement (zone strategy)
enforcement:
  enabled: true
  drift_tolerance_px: 5
  settle_tolerance_px: 2
  max_attempts: 3

# Sensor stream options
sensor:
  seated_mode: true
  near_range: true
"#;
