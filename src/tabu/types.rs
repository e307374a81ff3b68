//! Core trait for Tabu Search problems.

use std::hash::Hash;

use rand::Rng;

/// Defines a problem searchable by [`TabuRunner`](super::TabuRunner).
///
/// The tabu memory stores whole-solution signatures, so
/// [`signature`](TabuProblem::signature) must be equal for two solutions
/// exactly when they are the same solution.
pub trait TabuProblem {
    /// The solution type.
    type Solution: Clone;

    /// Key remembered in the tabu list.
    type Signature: Eq + Hash + Clone;

    /// Evaluates the cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Draws one random neighbor of `solution` without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Structural key of `solution`.
    fn signature(&self, solution: &Self::Solution) -> Self::Signature;
}
