//! Random source construction.
//!
//! Every component draws from one explicitly threaded generator, so a fixed
//! seed reproduces a whole run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh OS-derived seed when `None`.
///
/// Returns the seed actually used so it can be logged and replayed.
pub fn seeded_or_fresh(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}

/// Fisher-Yates shuffle: every permutation of `items` is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
