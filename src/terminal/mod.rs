//! Terminal helpers for the interactive screens.
//!
//! Boxed layout, ANSI styles, and the raw-mode guard used while reading keys.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
