//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a problem searchable by [`SaRunner`](super::SaRunner).
///
/// The runner owns temperature management and the acceptance criterion;
/// the problem supplies the cost function and the move.
///
/// The starting solution is handed to the runner by the caller, so a
/// constructive heuristic or a previous stage can seed the search.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of `solution` without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
