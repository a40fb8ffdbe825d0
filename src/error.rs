//! Error types for the head mouse library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// No sensor found, or the sensor is not in a usable status
    #[error("Sensor unavailable: {0}")]
    DeviceUnavailable(String),

    /// The current frame contains no tracked skeleton or head joint
    #[error("No tracked subject in frame")]
    NoSubjectTracked,

    /// Reading a frame from the sensor failed (transient, tracking continues)
    #[error("Frame error: {0}")]
    Frame(String),

    /// Cursor control operation failed
    #[error("Cursor control error: {0}")]
    CursorControl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
