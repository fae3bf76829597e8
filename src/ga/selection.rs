//! Parent sampling for crossover search.
//!
//! The crossover loop asks a [`ParentSelection`] for an index into the
//! retained parent pool, so the sampling policy can change without touching
//! the loop itself.

use super::types::Individual;
use rand::Rng;

/// How a parent is drawn from the retained pool.
///
/// Both policies sample with replacement: the same parent may be drawn twice
/// for one crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParentSelection {
    /// Every member of the pool is equally likely.
    #[default]
    Uniform,

    /// Draw `k` members uniformly and keep the lowest-scoring one.
    ///
    /// - k=1: identical to `Uniform`
    /// - larger k: stronger pull toward the best of the pool
    Tournament(usize),
}

impl ParentSelection {
    /// Selects a parent index from `pool`.
    ///
    /// # Panics
    /// Panics if `pool` is empty.
    pub fn select<R: Rng>(&self, pool: &[Individual], rng: &mut R) -> usize {
        assert!(!pool.is_empty(), "cannot select from empty pool");

        match self {
            ParentSelection::Uniform => rng.random_range(0..pool.len()),
            ParentSelection::Tournament(k) => tournament(pool, *k, rng),
        }
    }
}

fn tournament<R: Rng>(pool: &[Individual], k: usize, rng: &mut R) -> usize {
    let n = pool.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if pool[idx].score < pool[best_idx].score {
            best_idx = idx;
        }
    }
    best_idx
}
