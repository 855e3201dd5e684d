//! Password generation settings.

/// Passwords per batch.
pub const DEFAULT_COUNT: usize = 50;
/// Characters per password.
pub const DEFAULT_LENGTH: usize = 8;
/// Digits/symbols injected into a candidate.
pub const DEFAULT_INSERTIONS: usize = 3;
/// Per-character leet substitution probability.
pub const DEFAULT_LEET_INTENSITY: f64 = 0.45;

#[derive(Debug, Clone)]
pub struct Settings {
    pub number_of_passwords: usize,
    pub pass_length: usize,
    pub insertions: usize,
    pub leet_intensity: f64,
    pub to_clipboard: bool,
}

impl Settings {
    /// Settings for a batch of `count` passwords of `length` chars.
    pub fn batch(count: usize, length: usize) -> Self {
        Self {
            number_of_passwords: count,
            pass_length: length,
            ..Default::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_passwords: DEFAULT_COUNT,
            pass_length: DEFAULT_LENGTH,
            insertions: DEFAULT_INSERTIONS,
            leet_intensity: DEFAULT_LEET_INTENSITY,
            to_clipboard: false,
        }
    }
}
