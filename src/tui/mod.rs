//! Interactive terminal screens.

mod input;
mod session;
mod text;

pub use input::*;
pub use session::run;
pub use text::*;
