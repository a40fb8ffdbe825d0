//! Cursor control module for X11-based systems.
//!
//! The OS owns the cursor position as a single global value; this module
//! treats that ownership as contended and overwrites it. The
//! [`CursorBackend`] trait keeps the enforcement logic testable without a
//! display.

use crate::error::{Error, Result};
use log::{debug, info};
use x11rb::{
    connection::Connection,
    protocol::xproto::{ConnectionExt, Screen},
    rust_connection::RustConnection,
};

/// Synchronous OS cursor primitives consumed by the mapping pipeline
pub trait CursorBackend {
    /// Current cursor position
    fn get_position(&mut self) -> Result<(i32, i32)>;

    /// Move the cursor to an absolute position
    fn set_position(&mut self, x: i32, y: i32) -> Result<()>;

    /// Release any pointer grab that may be holding the cursor
    fn release_capture(&mut self) -> Result<()>;

    /// Screen dimensions in pixels
    fn screen_size(&self) -> (i32, i32);
}

/// Cursor control implementation for X11
pub struct CursorController {
    connection: RustConnection,
    screen: Screen,
    screen_width: u16,
    screen_height: u16,
}

impl CursorController {
    /// Create a new cursor controller
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorControl`] when no X11 display is reachable
    pub fn new() -> Result<Self> {
        info!("Initializing X11 cursor controller");

        let (connection, screen_num) = RustConnection::connect(None)
            .map_err(|e| Error::CursorControl(format!("Failed to connect to X11: {e}")))?;

        let screen = connection
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| Error::CursorControl("Failed to get screen".to_string()))?
            .clone();

        let screen_width = screen.width_in_pixels;
        let screen_height = screen.height_in_pixels;

        info!(
            "Connected to X11 display, screen: {}x{}",
            screen_width, screen_height
        );

        Ok(Self {
            connection,
            screen,
            screen_width,
            screen_height,
        })
    }
}

impl CursorBackend for CursorController {
    fn get_position(&mut self) -> Result<(i32, i32)> {
        let reply = self
            .connection
            .query_pointer(self.screen.root)
            .map_err(|e| Error::CursorControl(format!("Failed to send query pointer: {e}")))?
            .reply()
            .map_err(|e| Error::CursorControl(format!("Failed to query pointer: {e}")))?;

        Ok((i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    fn set_position(&mut self, x: i32, y: i32) -> Result<()> {
        // Clamp to screen bounds safely
        let max_x = i32::from(self.screen_width.saturating_sub(1));
        let max_y = i32::from(self.screen_height.saturating_sub(1));
        let x = i16::try_from(x.clamp(0, max_x)).unwrap_or(i16::MAX);
        let y = i16::try_from(y.clamp(0, max_y)).unwrap_or(i16::MAX);

        debug!("Setting cursor position to ({}, {})", x, y);

        self.connection
            .warp_pointer(x11rb::NONE, self.screen.root, 0, 0, 0, 0, x, y)
            .map_err(|e| Error::CursorControl(format!("Failed to warp pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| Error::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    fn release_capture(&mut self) -> Result<()> {
        debug!("Releasing pointer grab");

        self.connection
            .ungrab_pointer(x11rb::CURRENT_TIME)
            .map_err(|e| Error::CursorControl(format!("Failed to ungrab pointer: {e}")))?;

        self.connection
            .flush()
            .map_err(|e| Error::CursorControl(format!("Failed to flush connection: {e}")))?;

        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        (i32::from(self.screen_width), i32::from(self.screen_height))
    }
}
