//! Test fixtures for freight-match.
//!
//! Provides:
//! - Real US truck and cargo records (the reference dispatch dataset)
//! - Seeded random cost matrices and a brute-force assignment oracle

#![allow(dead_code)]

pub mod us_freight;

#[allow(unused_imports)]
pub use us_freight::*;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Square matrix of uniform costs in `[0, max)`.
pub fn random_matrix(rng: &mut ChaCha8Rng, n: usize, max: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0.0..max)).collect())
        .collect()
}

/// Square matrix of small integers, so many assignments tie.
pub fn tied_matrix(rng: &mut ChaCha8Rng, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0..3) as f64).collect())
        .collect()
}

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Cheapest assignment cost by trying every permutation.
pub fn brute_force_min_cost(costs: &[Vec<f64>]) -> f64 {
    fn search(costs: &[Vec<f64>], row: usize, taken: &mut [bool], acc: f64, best: &mut f64) {
        if row == costs.len() {
            *best = best.min(acc);
            return;
        }
        for col in 0..costs.len() {
            if taken[col] {
                continue;
            }
            taken[col] = true;
            search(costs, row + 1, taken, acc + costs[row][col], best);
            taken[col] = false;
        }
    }

    let mut best = f64::INFINITY;
    let mut taken = vec![false; costs.len()];
    search(costs, 0, &mut taken, 0.0, &mut best);
    if costs.is_empty() { 0.0 } else { best }
}
