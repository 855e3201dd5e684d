//! Character sets and the leet substitution table.

use std::sync::LazyLock;

pub const SYMBOLS: &str = "!@#$%&*";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Characters injected by `insert_random_digits_symbols`.
pub static INSERTABLE: LazyLock<Vec<char>> =
    LazyLock::new(|| DIGITS.chars().chain(SYMBOLS.chars()).collect());

/// Characters used to pad short candidates and for the random-fill fallback.
pub static FILL: LazyLock<Vec<char>> = LazyLock::new(|| {
    LETTERS
        .chars()
        .chain(DIGITS.chars())
        .chain(SYMBOLS.chars())
        .collect()
});

/// Look-alike substitutes for `ch`, keyed on its lowercase form.
pub fn leet_candidates(ch: char) -> Option<&'static [char]> {
    match single_lowercase(ch)? {
        'a' => Some(&['@', '4']),
        'e' => Some(&['3']),
        'i' => Some(&['1', '!']),
        'o' => Some(&['0']),
        's' => Some(&['$', '5']),
        't' => Some(&['7']),
        _ => None,
    }
}

/// Lowercase mapping of `ch` when it is exactly one char.
fn single_lowercase(ch: char) -> Option<char> {
    let mut lower = ch.to_lowercase();
    let first = lower.next()?;
    lower.next().is_none().then_some(first)
}

/// How many distinct fallback strings of `length` exist (saturating).
pub fn distinct_fills(length: usize) -> usize {
    let exp = u32::try_from(length).unwrap_or(u32::MAX);
    FILL.len().saturating_pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(INSERTABLE.len(), 17);
        assert_eq!(FILL.len(), 69);
    }

    #[test]
    fn leet_lookup_is_case_insensitive() {
        assert_eq!(leet_candidates('a'), Some(&['@', '4'][..]));
        assert_eq!(leet_candidates('A'), Some(&['@', '4'][..]));
        assert_eq!(leet_candidates('T'), Some(&['7'][..]));
        assert_eq!(leet_candidates('x'), None);
        assert_eq!(leet_candidates('ñ'), None);
        assert_eq!(leet_candidates('İ'), None);
    }

    #[test]
    fn distinct_fills_saturates() {
        assert_eq!(distinct_fills(0), 1);
        assert_eq!(distinct_fills(2), 69 * 69);
        assert_eq!(distinct_fills(64), usize::MAX);
    }
}
