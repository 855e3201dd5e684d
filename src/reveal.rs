//! One-at-a-time view over a generated batch.

use zeroize::Zeroize;

/// Result of asking for the next password.
#[derive(Debug, PartialEq, Eq)]
pub enum Reveal<'a> {
    Shown {
        index: usize,
        total: usize,
        password: &'a str,
    },
    /// Every password has been shown; the cursor stays on the last one.
    Exhausted,
}

/// Cursor over an immutable batch, starting before the first element.
#[derive(Debug, Default)]
pub struct PasswordCursor {
    passwords: Vec<String>,
    index: Option<usize>,
}

impl PasswordCursor {
    pub fn new(passwords: Vec<String>) -> Self {
        Self {
            passwords,
            index: None,
        }
    }

    /// Step forward, clamping on the last password.
    pub fn advance(&mut self) -> Reveal<'_> {
        let total = self.passwords.len();
        if total == 0 {
            return Reveal::Exhausted;
        }
        let next = self.index.map_or(0, |i| i + 1);
        if next >= total {
            self.index = Some(total - 1);
            return Reveal::Exhausted;
        }
        self.index = Some(next);
        Reveal::Shown {
            index: next,
            total,
            password: &self.passwords[next],
        }
    }

    pub fn has_next(&self) -> bool {
        match self.index {
            Some(i) => i + 1 < self.passwords.len(),
            None => !self.passwords.is_empty(),
        }
    }

    /// The password on display, if any.
    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.passwords[i].as_str())
    }

    /// `(shown, total)` for an "i / N" indicator.
    pub fn position(&self) -> (usize, usize) {
        (self.index.map_or(0, |i| i + 1), self.passwords.len())
    }
}

impl Drop for PasswordCursor {
    fn drop(&mut self) {
        self.passwords.zeroize();
    }
}
