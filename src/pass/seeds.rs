//! Seed pool built from the personal inputs.

use std::collections::HashSet;

use zeroize::Zeroize;

use super::transform::{leet_transform, random_case_mix};
use crate::entropy::SecureRandom;

/// Insertion-ordered set of non-empty seed strings.
#[derive(Debug, Default)]
pub struct SeedPool {
    seeds: Vec<String>,
    seen: HashSet<String>,
}

impl SeedPool {
    /// Build the pool from already-trimmed inputs; any of them may be empty.
    ///
    /// Raw inputs come first, then the `name+pet`, `pet+dni`, `name+dni`
    /// pairs, then a reversed, case-mixed and leet variant of each of those.
    pub fn from_inputs<R: SecureRandom>(
        rng: &mut R,
        name: &str,
        pet: &str,
        dni: &str,
        leet_intensity: f64,
    ) -> Self {
        let mut raw: Vec<String> = [name, pet, dni]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        for (a, b) in [(name, pet), (pet, dni), (name, dni)] {
            if !a.is_empty() && !b.is_empty() {
                raw.push(format!("{a}{b}"));
            }
        }

        let bases = raw.len();
        for i in 0..bases {
            let reversed: String = raw[i].chars().rev().collect();
            let mixed = random_case_mix(rng, &raw[i]);
            let leet = leet_transform(rng, &raw[i], leet_intensity);
            raw.extend([reversed, mixed, leet]);
        }

        let mut pool = Self::default();
        for seed in raw {
            pool.push(seed);
        }
        pool
    }

    /// Append `seed` unless it is empty or already present.
    pub fn push(&mut self, mut seed: String) {
        if seed.is_empty() || self.seen.contains(&seed) {
            seed.zeroize();
            return;
        }
        self.seen.insert(seed.clone());
        self.seeds.push(seed);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

impl Drop for SeedPool {
    fn drop(&mut self) {
        self.seeds.zeroize();
        for mut seed in self.seen.drain() {
            seed.zeroize();
        }
    }
}
