//! Stateless string transforms applied to seeds and candidates.
//!
//! Lengths here are counted in `char`s, never bytes.

use zeroize::Zeroize;

use super::charset::{FILL, INSERTABLE, leet_candidates};
use crate::entropy::SecureRandom;

/// Swap mappable letters for look-alikes with probability `intensity`.
///
/// Characters without a substitute, or that lose the draw, keep their case.
pub fn leet_transform<R: SecureRandom>(rng: &mut R, word: &str, intensity: f64) -> String {
    let threshold = (100.0 * intensity) as usize;
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match leet_candidates(ch) {
            Some(options) if rng.below(100) < threshold => {
                out.push(*rng.choose(options).unwrap_or(&ch));
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Upper- or lowercase each character on a coin flip.
pub fn random_case_mix<R: SecureRandom>(rng: &mut R, word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        if rng.coin() {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Insert `n` digits/symbols one at a time at uniform positions.
///
/// Each position is drawn against the length after the previous insert.
pub fn insert_random_digits_symbols<R: SecureRandom>(rng: &mut R, s: &str, n: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    for _ in 0..n {
        let pos = rng.below(chars.len() + 1);
        if let Some(&ch) = rng.choose(INSERTABLE.as_slice()) {
            chars.insert(pos, ch);
        }
    }
    let out = chars.iter().collect();
    chars.zeroize();
    out
}

/// Permute the characters of `s`, keep `length` of them, pad from [`FILL`].
pub fn shuffle_and_trim<R: SecureRandom>(rng: &mut R, s: &str, length: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    rng.shuffle(&mut chars);
    chars.truncate(length);
    while chars.len() < length {
        if let Some(&ch) = rng.choose(FILL.as_slice()) {
            chars.push(ch);
        }
    }
    let out = chars.iter().collect();
    chars.zeroize();
    out
}

/// A string of `length` characters drawn uniformly from [`FILL`].
pub fn random_fill<R: SecureRandom>(rng: &mut R, length: usize) -> String {
    shuffle_and_trim(rng, "", length)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::entropy::seeded;
    use crate::pass::charset::SYMBOLS;

    fn count(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn leet_with_zero_intensity_is_identity() {
        let mut rng = seeded(1);
        assert_eq!(leet_transform(&mut rng, "Satoshi", 0.0), "Satoshi");
    }

    #[test]
    fn leet_with_full_intensity_replaces_every_mappable_char() {
        let mut rng = seeded(2);
        let out = leet_transform(&mut rng, "AeIoSt", 1.0);
        let allowed: [&[char]; 6] = [&['@', '4'], &['3'], &['1', '!'], &['0'], &['$', '5'], &['7']];
        for (ch, options) in out.chars().zip(allowed) {
            assert!(options.contains(&ch), "{ch} not in {options:?}");
        }
    }

    #[test]
    fn leet_leaves_unmapped_chars_alone() {
        let mut rng = seeded(3);
        assert_eq!(leet_transform(&mut rng, "Rxñ9Z", 1.0), "Rxñ9Z");
    }

    #[test]
    fn case_mix_only_changes_case() {
        let mut rng = seeded(4);
        let out = random_case_mix(&mut rng, "MixedCase Ñandú");
        assert_eq!(out.to_lowercase(), "mixedcase ñandú");
    }

    #[test]
    fn case_mix_eventually_produces_both_cases() {
        let mut rng = seeded(5);
        let out = random_case_mix(&mut rng, &"a".repeat(64));
        assert!(out.contains('a'));
        assert!(out.contains('A'));
    }

    #[test]
    fn insertions_come_from_digits_and_symbols() {
        let mut rng = seeded(6);
        let out = insert_random_digits_symbols(&mut rng, "", 5);
        assert_eq!(count(&out), 5);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_digit() || SYMBOLS.contains(c))
        );
    }

    #[test]
    fn insertions_keep_original_order() {
        let mut rng = seeded(7);
        let out = insert_random_digits_symbols(&mut rng, "abc", 3);
        let kept: String = out.chars().filter(|c| c.is_ascii_lowercase()).collect();
        assert_eq!(kept, "abc");
    }

    #[test]
    fn shuffle_and_trim_pads_short_input() {
        let mut rng = seeded(8);
        let out = shuffle_and_trim(&mut rng, "ab", 8);
        assert_eq!(count(&out), 8);
        assert!(out.contains('a') && out.contains('b'));
    }

    #[test]
    fn shuffle_and_trim_keeps_all_chars_of_exact_input() {
        let mut rng = seeded(9);
        let mut out: Vec<char> = shuffle_and_trim(&mut rng, "Ana4Rex!", 8).chars().collect();
        out.sort_unstable();
        let mut expected: Vec<char> = "Ana4Rex!".chars().collect();
        expected.sort_unstable();
        assert_eq!(out, expected);
    }

    #[test]
    fn random_fill_uses_fill_alphabet() {
        let mut rng = seeded(10);
        let out = random_fill(&mut rng, 32);
        assert_eq!(count(&out), 32);
        assert!(out.chars().all(|c| FILL.contains(&c)));
    }

    proptest! {
        #[test]
        fn prop_shuffle_and_trim_has_exact_length(
            seed in any::<u64>(),
            input in "\\PC{0,40}",
            length in 0usize..24,
        ) {
            let mut rng = seeded(seed);
            prop_assert_eq!(count(&shuffle_and_trim(&mut rng, &input, length)), length);
        }

        #[test]
        fn prop_insert_adds_exactly_n_chars(
            seed in any::<u64>(),
            input in "\\PC{0,40}",
            n in 0usize..10,
        ) {
            let mut rng = seeded(seed);
            let out = insert_random_digits_symbols(&mut rng, &input, n);
            prop_assert_eq!(count(&out), count(&input) + n);
        }

        #[test]
        fn prop_leet_preserves_char_count(seed in any::<u64>(), input in "[a-zA-Z ]{0,40}") {
            let mut rng = seeded(seed);
            prop_assert_eq!(count(&leet_transform(&mut rng, &input, 0.45)), count(&input));
        }
    }
}
