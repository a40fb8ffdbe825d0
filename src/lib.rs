//! Head mouse library for hands-free cursor control.
//!
//! This library translates head positions, captured from a depth-sensing
//! camera's skeletal tracking stream, into mouse cursor movement for users
//! who cannot operate a conventional pointing device. The pipeline is:
//!
//! 1. A [`sensor::SkeletonSource`] delivers skeleton frames
//! 2. The frame's tracked head sample is compared against the calibrated
//!    center in [`calibration::CalibrationState`]
//! 3. A [`mapping::TargetMapper`] strategy turns the offset into a target
//!    screen X coordinate (three-zone discrete or continuous linear)
//! 4. The target is written through a [`cursor_control::CursorBackend`] and
//!    periodically re-asserted by [`enforcement::Enforcement`] against other
//!    input sources
//!
//! # Examples
//!
//! ## Running a tracking session
//!
//! ```no_run
//! use head_mouse::{
//!     config::Config,
//!     cursor_control::CursorController,
//!     sensor::SweepSource,
//!     session::{LogDisplay, TrackingSession},
//! };
//! use std::time::Duration;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let cursor = CursorController::new()?;
//! let sensor = SweepSource::default();
//!
//! let mut session = TrackingSession::new(
//!     config,
//!     Box::new(sensor),
//!     Box::new(cursor),
//!     Box::new(LogDisplay),
//! )?;
//! session.run(Some(Duration::from_secs(10)))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Mapping a head sample directly
//!
//! ```
//! use head_mouse::{calibration::CalibrationState, mapping::create_mapper};
//!
//! # fn main() -> head_mouse::Result<()> {
//! let mut calib = CalibrationState::new(0.01, 0.3, 0.5);
//! calib.center_x = 0.10;
//!
//! let mapper = create_mapper("zone", 1920)?;
//! let target = mapper.map(0.12, &calib);
//! assert_eq!(target.target_x, 1440); // head turned right
//! # Ok(())
//! # }
//! ```

/// Skeletal tracking data model
pub mod skeleton;

/// Sensor collaborator boundary and synthetic sources
pub mod sensor;

/// Calibration state for the head-to-cursor mapping
pub mod calibration;

/// Head-to-cursor mapping strategies
pub mod mapping;

/// Periodic cursor target re-assertion
pub mod enforcement;

/// Cursor control for X11 systems
pub mod cursor_control;

/// Tracking session state machine
pub mod session;

/// Configuration management
pub mod config;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

pub use error::{Error, Result};
