//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("could not copy: {0}")]
    Write(String),
}

/// Lazily opened clipboard. Holding it keeps X11 selections alive for the
/// lifetime of an interactive session.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    /// Open the system clipboard now, so callers can fall back early.
    pub fn open() -> Result<Self, ClipboardError> {
        let mut clipboard = Self::default();
        clipboard.context()?;
        Ok(clipboard)
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no context".into()))
    }

    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!(chars = text.chars().count(), "copied to clipboard");
        Ok(())
    }
}
