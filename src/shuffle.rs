//! Review order for the questions of a deck.
//!
//! The generator is always passed in by the caller, so a fixed seed gives the
//! same order every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub type ShuffleRng = StdRng;

pub fn rng_from_seed(seed: Option<u64>) -> ShuffleRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A permutation of `0..len`.
pub fn shuffled_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}
