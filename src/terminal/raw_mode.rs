//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Keeps raw mode on for its lifetime.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Leave raw mode early, e.g. before printing a trailing newline.
    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
