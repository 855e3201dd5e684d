//! Password generation.

use std::collections::HashSet;

use tracing::debug;
use zeroize::Zeroize;

use super::seeds::SeedPool;
use super::transform::{
    insert_random_digits_symbols, leet_transform, random_case_mix, random_fill, shuffle_and_trim,
};
use crate::entropy::{self, SecureRandom};
use crate::settings::Settings;

/// Attempts allowed per requested password before falling back to random fill.
const ATTEMPTS_PER_PASSWORD: usize = 60;
/// Seeds concatenated per candidate: 1..=MAX_PARTS.
const MAX_PARTS: usize = 3;
/// Percent chance a part is leet-transformed.
const LEET_PERCENT: usize = 30;
/// Percent chance a part is case-mixed (checked after leet).
const CASE_MIX_PERCENT: usize = 30;
/// Percent chance a candidate gets digits/symbols injected.
const INSERT_PERCENT: usize = 75;

/// Generate `count` unique passwords of `length` chars from raw inputs.
pub fn generate_passwords_from_inputs(
    name: &str,
    pet: &str,
    dni: &str,
    count: usize,
    length: usize,
) -> Vec<String> {
    generate_batch(name, pet, dni, &Settings::batch(count, length))
}

/// Generate a batch per `settings` using the OS random source.
pub fn generate_batch(name: &str, pet: &str, dni: &str, settings: &Settings) -> Vec<String> {
    let mut rng = entropy::os();
    let pool = SeedPool::from_inputs(
        &mut rng,
        name.trim(),
        pet.trim(),
        dni.trim(),
        settings.leet_intensity,
    );
    generate_with(&mut rng, &pool, settings)
}

/// Core loop: compose candidates from `pool` until the batch is full or the
/// attempt budget runs out, then top up with random fill.
///
/// Always returns exactly `settings.number_of_passwords` unique strings of
/// `settings.pass_length` chars, provided that many distinct strings exist.
pub fn generate_with<R: SecureRandom>(
    rng: &mut R,
    pool: &SeedPool,
    settings: &Settings,
) -> Vec<String> {
    let count = settings.number_of_passwords;
    let length = settings.pass_length;
    let budget = count.saturating_mul(ATTEMPTS_PER_PASSWORD);

    let mut passwords = Vec::with_capacity(count);
    let mut seen = HashSet::with_capacity(count);
    let mut attempts = 0;

    if pool.is_empty() {
        debug!("empty seed pool, candidates are pure padding");
    }

    while passwords.len() < count && attempts < budget {
        attempts += 1;
        let mut candidate = compose(rng, pool, settings);
        if rng.below(100) < INSERT_PERCENT {
            let injected = insert_random_digits_symbols(rng, &candidate, settings.insertions);
            candidate.zeroize();
            candidate = injected;
        }
        let pass = shuffle_and_trim(rng, &candidate, length);
        candidate.zeroize();
        accept(&mut passwords, &mut seen, pass);
    }

    let composed = passwords.len();
    while passwords.len() < count {
        let pass = random_fill(rng, length);
        accept(&mut passwords, &mut seen, pass);
    }

    for mut pass in seen.drain() {
        pass.zeroize();
    }

    debug!(
        pool = pool.len(),
        attempts,
        composed,
        filled = count - composed,
        "generated password batch"
    );
    passwords
}

/// Concatenate 1..=3 randomly drawn (and maybe transformed) seeds.
fn compose<R: SecureRandom>(rng: &mut R, pool: &SeedPool, settings: &Settings) -> String {
    let parts = rng.below(MAX_PARTS) + 1;
    let mut candidate = String::new();

    for _ in 0..parts {
        let Some(seed) = rng.choose(pool.as_slice()) else {
            break;
        };
        let roll = rng.below(100);
        let mut part = if roll < LEET_PERCENT {
            leet_transform(rng, seed, settings.leet_intensity)
        } else if roll < LEET_PERCENT + CASE_MIX_PERCENT {
            random_case_mix(rng, seed)
        } else {
            seed.clone()
        };
        candidate.push_str(&part);
        part.zeroize();
    }

    candidate
}

fn accept(passwords: &mut Vec<String>, seen: &mut HashSet<String>, mut pass: String) {
    if seen.insert(pass.clone()) {
        passwords.push(pass);
    } else {
        pass.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::entropy::seeded;

    fn assert_batch(batch: &[String], count: usize, length: usize) {
        assert_eq!(batch.len(), count);
        assert!(batch.iter().all(|p| p.chars().count() == length));
        let unique: HashSet<&String> = batch.iter().collect();
        assert_eq!(unique.len(), count, "duplicates in batch");
    }

    #[test]
    fn end_to_end_batch_has_fifty_unique_eight_char_passwords() {
        let batch = generate_passwords_from_inputs("Ana", "Rex", "12345678A", 50, 8);
        assert_batch(&batch, 50, 8);
    }

    #[test]
    fn repeated_calls_give_different_batches() {
        let first = generate_passwords_from_inputs("Ana", "Rex", "12345678A", 50, 8);
        let second = generate_passwords_from_inputs("Ana", "Rex", "12345678A", 50, 8);
        assert_batch(&second, 50, 8);
        assert_ne!(first, second);
    }

    #[test]
    fn inputs_are_trimmed_before_seeding() {
        let batch = generate_passwords_from_inputs("  Ana ", "\tRex", "12345678A  ", 10, 8);
        assert_batch(&batch, 10, 8);
        assert!(batch.iter().all(|p| !p.contains(' ') && !p.contains('\t')));
    }

    #[test]
    fn empty_pool_still_fills_the_batch() {
        let mut rng = seeded(21);
        let pool = SeedPool::default();
        let batch = generate_with(&mut rng, &pool, &Settings::default());
        assert_batch(&batch, 50, 8);
    }

    #[test]
    fn exhausted_budget_falls_back_to_random_fill() {
        // One-char passwords from a one-char pool collide almost immediately.
        let mut rng = seeded(22);
        let mut pool = SeedPool::default();
        pool.push("a".into());
        let settings = Settings {
            insertions: 0,
            ..Settings::batch(60, 1)
        };
        let batch = generate_with(&mut rng, &pool, &settings);
        assert_batch(&batch, 60, 1);
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        let build = |seed| {
            let mut rng = seeded(seed);
            let pool = SeedPool::from_inputs(&mut rng, "Ana", "Rex", "12345678A", 0.45);
            generate_with(&mut rng, &pool, &Settings::default())
        };
        assert_eq!(build(5), build(5));
    }

    #[test]
    fn compose_uses_only_pool_material() {
        let mut rng = seeded(23);
        let mut pool = SeedPool::default();
        pool.push("xyz".into());
        for _ in 0..20 {
            let candidate = compose(&mut rng, &pool, &Settings::default());
            assert!(!candidate.is_empty());
            assert!(candidate.to_lowercase().chars().all(|c| "xyz".contains(c)));
        }
    }

    #[test]
    fn compose_on_empty_pool_is_empty() {
        let mut rng = seeded(24);
        assert_eq!(compose(&mut rng, &SeedPool::default(), &Settings::default()), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_batch_is_full_unique_and_fixed_length(
            seed in any::<u64>(),
            name in "[a-zA-ZñÑáé ]{1,12}",
            pet in "[a-zA-Z]{1,10}",
            dni in "[A-Z0-9]{9}",
            count in 1usize..80,
            length in 4usize..16,
        ) {
            let mut rng = seeded(seed);
            let pool = SeedPool::from_inputs(&mut rng, name.trim(), &pet, &dni, 0.45);
            let batch = generate_with(&mut rng, &pool, &Settings::batch(count, length));
            prop_assert_eq!(batch.len(), count);
            prop_assert!(batch.iter().all(|p| p.chars().count() == length));
            let unique: HashSet<&String> = batch.iter().collect();
            prop_assert_eq!(unique.len(), count);
        }
    }
}
