//! Constants used throughout the application

/// Default head movement threshold for zone detection, in meters (1 cm)
pub const DEFAULT_HEAD_THRESHOLD_M: f32 = 0.01;

/// Default horizontal head range for linear mapping, in meters
pub const DEFAULT_HEAD_RANGE_M: f32 = 0.3;

/// Default sensitivity multiplier applied to the zone threshold
pub const DEFAULT_SENSITIVITY: f64 = 0.5;

/// UI refresh tick interval in milliseconds (20 Hz)
pub const UI_TICK_MS: u64 = 50;

/// Cursor enforcement tick interval in milliseconds (100 Hz)
pub const ENFORCEMENT_TICK_MS: u64 = 10;

/// Cursor drift beyond this many pixels triggers a corrective set
pub const DRIFT_TOLERANCE_PX: i32 = 5;

/// A cursor write is considered settled within this many pixels
pub const SETTLE_TOLERANCE_PX: i32 = 2;

/// Maximum cursor-set attempts per corrective write
pub const MAX_SET_ATTEMPTS: u32 = 3;

/// Default sweep amplitude for the synthetic sensor source, in meters
pub const DEFAULT_SWEEP_AMPLITUDE_M: f32 = 0.15;

/// Default sweep period for the synthetic sensor source, in seconds
pub const DEFAULT_SWEEP_PERIOD_S: f64 = 4.0;
