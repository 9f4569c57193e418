//! Seedable random number generation.
//!
//! Every run owns exactly one generator, created here and passed by
//! `&mut` to the codec, selection and crossover.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
///
/// The same seed always yields the same sequence, which makes runs and
/// tests reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
