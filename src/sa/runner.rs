//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost at the end of each temperature level, starting with the
    /// initial cost.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::InvalidConfig`](crate::error::TimetableError::InvalidConfig)
    /// if `config` does not validate.
    pub fn run<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, initial, config, rng, None)
    }

    /// Runs SA with an optional cancellation flag, checked once per
    /// temperature level.
    #[tracing::instrument(level = "debug", name = "SA Search", skip_all)]
    pub fn run_with_cancel<P: SaProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let initial_cost = current_cost;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut ceiling_hit = false;

        let mut cost_history = Vec::new();
        cost_history.push(best_cost);

        while temperature > config.min_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    ceiling_hit = true;
                    break;
                }

                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis criterion; the uniform draw only happens for
                // non-improving moves.
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            cost_history.push(best_cost);

            if ceiling_hit {
                tracing::debug!(
                    iterations = total_iterations,
                    "SA: iteration ceiling reached at T={temperature}"
                );
                break;
            }

            tracing::trace!(
                temperature,
                current_cost,
                best_cost,
                "SA: temperature level done"
            );
            temperature *= config.alpha;
        }

        tracing::info!(
            initial_cost,
            best_cost,
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            cancelled,
            "SA finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
