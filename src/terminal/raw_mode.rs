//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode for the guard's lifetime, optionally with the cursor hidden.
pub struct RawModeGuard {
    hid_cursor: bool,
}

impl RawModeGuard {
    /// Enable raw mode; it is disabled again on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { hid_cursor: false })
    }

    /// Raw mode with the cursor hidden, for single-key screens.
    pub fn hidden() -> io::Result<Self> {
        let mut guard = Self::new()?;
        execute!(io::stdout(), Hide)?;
        guard.hid_cursor = true;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.hid_cursor {
            let _ = execute!(io::stdout(), Show);
        }
        let _ = disable_raw_mode();
    }
}
