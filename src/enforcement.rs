//! Periodic re-assertion of the last computed cursor target.
//!
//! Other input sources may move the cursor between frames. The enforcement
//! tick runs faster than frame arrival and drags the cursor X back to the
//! last mapped target whenever it drifts past a tolerance. Each corrective
//! write is a bounded-retry heuristic: it can still lose the race to
//! whatever is fighting for the cursor, and that is tolerated.

use crate::{
    constants::{DRIFT_TOLERANCE_PX, MAX_SET_ATTEMPTS, SETTLE_TOLERANCE_PX},
    cursor_control::CursorBackend,
    error::Result,
};
use log::debug;

/// Re-assertion state and tolerances
#[derive(Debug, Clone, Copy)]
pub struct Enforcement {
    last_target_x: Option<i32>,
    active: bool,
    drift_tolerance: i32,
    settle_tolerance: i32,
    max_attempts: u32,
}

impl Default for Enforcement {
    fn default() -> Self {
        Self::new(DRIFT_TOLERANCE_PX, SETTLE_TOLERANCE_PX, MAX_SET_ATTEMPTS)
    }
}

impl Enforcement {
    /// Create enforcement state with explicit tolerances
    #[must_use]
    pub const fn new(drift_tolerance: i32, settle_tolerance: i32, max_attempts: u32) -> Self {
        Self {
            last_target_x: None,
            active: false,
            drift_tolerance,
            settle_tolerance,
            max_attempts,
        }
    }

    /// Remember a newly mapped target and arm the periodic re-assertion
    pub fn activate(&mut self, target_x: i32) {
        self.last_target_x = Some(target_x);
        self.active = true;
    }

    /// Disarm the periodic re-assertion; the remembered target is kept
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether re-assertion is armed
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The most recently mapped target X, if any
    #[must_use]
    pub const fn last_target_x(&self) -> Option<i32> {
        self.last_target_x
    }

    /// One enforcement cycle. Returns whether a corrective write was issued.
    ///
    /// # Errors
    ///
    /// Propagates cursor read/write failures; the caller treats them as
    /// non-fatal.
    pub fn tick(&mut self, cursor: &mut dyn CursorBackend) -> Result<bool> {
        if !self.active {
            return Ok(false);
        }
        let Some(target_x) = self.last_target_x else {
            return Ok(false);
        };

        let (live_x, live_y) = cursor.get_position()?;
        if (live_x - target_x).abs() <= self.drift_tolerance {
            return Ok(false);
        }

        debug!(
            "Cursor drifted to {} (target {}), re-asserting",
            live_x, target_x
        );
        self.assert_position(cursor, target_x, live_y)?;
        Ok(true)
    }

    /// Write the cursor position with bounded retries.
    ///
    /// After each attempt the live position is read back; if it is still off
    /// by more than the settle tolerance, any pointer capture is released
    /// and the write is retried. Gives up silently after the attempt cap.
    ///
    /// # Errors
    ///
    /// Propagates cursor read/write failures
    pub fn assert_position(&self, cursor: &mut dyn CursorBackend, x: i32, y: i32) -> Result<()> {
        for attempt in 1..=self.max_attempts {
            cursor.set_position(x, y)?;

            let (check_x, _) = cursor.get_position()?;
            if (check_x - x).abs() <= self.settle_tolerance {
                return Ok(());
            }

            debug!(
                "Cursor write attempt {} off by {} px, releasing capture",
                attempt,
                (check_x - x).abs()
            );
            cursor.release_capture()?;
        }

        debug!(
            "Cursor position not settled after {} attempts, giving up",
            self.max_attempts
        );
        Ok(())
    }
}
