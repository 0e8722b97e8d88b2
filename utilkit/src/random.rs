//! Random alphanumeric strings.
//!
//! There is no process-wide generator: callers either pass their own
//! [`Rng`] to [`random_string`] or hold a [`StringGenerator`]. Seeding the
//! generator makes output reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw `n` characters uniformly from `[0-9a-zA-Z]`.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Owns its own RNG so that independent callers never share state.
#[derive(Debug, Clone)]
pub struct StringGenerator {
    rng: StdRng,
}

impl StringGenerator {
    /// Deterministic generator; the same seed yields the same strings.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn generate(&mut self, n: usize) -> String {
        random_string(&mut self.rng, n)
    }
}
