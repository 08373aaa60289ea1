//! Random input generation for the sort benchmarks.
//!
//! Values are integers uniform over `0..=MAX_VALUE`. The seeded entry points
//! use `ChaCha8Rng` so tests and benches are reproducible; the interactive
//! demo seeds from OS entropy instead (each run gets fresh data).

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Upper bound (inclusive) of generated values.
pub const MAX_VALUE: i32 = 1_000_000;

/// Generate `n` uniform integers in `0..=MAX_VALUE` from the given RNG.
pub fn random_ints_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}

/// Generate `n` uniform integers in `0..=MAX_VALUE` from a fixed seed.
pub fn random_ints(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_ints_with_rng(n, &mut rng)
}

/// Generate `n` uniform integers in `0..=MAX_VALUE`, seeded from OS entropy.
pub fn random_ints_from_entropy(n: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::from_entropy();
    random_ints_with_rng(n, &mut rng)
}
