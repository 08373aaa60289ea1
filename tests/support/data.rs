#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random integers over the benchmark value range.
pub fn random_ints(n: usize, seed: u64) -> Vec<i32> {
    halfsort::generate::random_ints(n, seed)
}

/// Ascending run (already sorted).
pub fn sorted_ints(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Descending run (every merge comparison goes to the right half first).
pub fn reverse_sorted_ints(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

/// Every element equal.
pub fn constant_ints(n: usize, value: i32) -> Vec<i32> {
    vec![value; n]
}

/// Repeating 0..period ramps.
pub fn sawtooth_ints(n: usize, period: i32) -> Vec<i32> {
    (0..n).map(|i| (i as i32) % period).collect()
}

/// Random draws from only two distinct values (duplicate-heavy).
pub fn two_value_ints(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| if rng.gen::<bool>() { 7 } else { 42 }).collect()
}
