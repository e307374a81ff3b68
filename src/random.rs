//! Seeded random source shared by every stage of a run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The concrete generator used by [`HybridSolver`](crate::hybrid::HybridSolver).
pub type TimetableRng = ChaCha8Rng;

/// Creates the run's random generator from a seed.
///
/// A run seeds exactly once and threads the same generator through
/// construction, annealing and tabu search, so a fixed seed reproduces
/// the whole pipeline.
pub fn create_rng(seed: u64) -> TimetableRng {
    ChaCha8Rng::seed_from_u64(seed)
}
