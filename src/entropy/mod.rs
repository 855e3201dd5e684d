//! Secure random source.
//!
//! Every decision that shapes a password (substitutions, insert positions,
//! the final permutation, fallback fill) is drawn through [`SecureRandom`].
//! Production code uses the OS CSPRNG; tests inject a seeded generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Uniform sampling capability used by the password pipeline.
pub trait SecureRandom {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform element of `items`, or `None` when empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }

    /// Fisher-Yates, one fresh draw per swap.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RngCore + CryptoRng> SecureRandom for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Production source: the operating system CSPRNG.
#[inline]
pub fn os() -> OsRng {
    OsRng
}

/// Deterministic CSPRNG for reproducible tests.
#[cfg(test)]
pub fn seeded(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}
