//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given solution with an empty tabu memory
//! 2. At each iteration:
//!    a. Sample `neighborhood_size` neighbors of the current solution
//!    b. Drop every neighbor whose signature is in the tabu memory
//!    c. If none is left, the iteration is a no-op
//!    d. Otherwise move to the cheapest survivor (first one on ties),
//!    update the global best if strictly improved, and remember the new
//!    current solution's signature
//! 3. Stop after `max_iterations` iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::types::TabuProblem;
use crate::error::Result;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Cost of the starting solution.
    pub initial_cost: f64,
    /// Total iterations executed, including stalled ones.
    pub iterations: usize,
    /// Iterations in which every sampled neighbor was tabu.
    pub stalled_iterations: usize,
    /// Iteration at which the best solution was found; `None` if the
    /// starting solution was never beaten.
    pub best_iteration: Option<usize>,
    /// Cost history (best cost after each iteration).
    pub cost_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from `initial`, drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::InvalidConfig`](crate::error::TimetableError::InvalidConfig)
    /// if `config` does not validate.
    pub fn run<P: TabuProblem, R: Rng>(
        problem: &P,
        initial: P::Solution,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult<P::Solution>> {
        Self::run_observed(problem, initial, config, rng, |_, _| {})
    }

    /// Runs the search, calling `on_move(memory, chosen)` every time a move
    /// is selected and before its signature enters the memory.
    #[tracing::instrument(level = "debug", name = "Tabu Search", skip_all)]
    fn run_observed<P, R, F>(
        problem: &P,
        initial: P::Solution,
        config: &TabuConfig,
        rng: &mut R,
        mut on_move: F,
    ) -> Result<TabuResult<P::Solution>>
    where
        P: TabuProblem,
        R: Rng,
        F: FnMut(&TabuMemory<P::Signature>, &P::Signature),
    {
        config.validate()?;

        let mut current = initial;
        let initial_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = initial_cost;
        let mut best_iteration = None;

        let mut memory = TabuMemory::new(config.tabu_tenure);
        let mut cost_history = Vec::new();
        let mut stalled_iterations = 0;

        for iteration in 0..config.max_iterations {
            // Sample the whole batch before filtering so the random stream
            // does not depend on the memory contents.
            let batch: Vec<P::Solution> = (0..config.neighborhood_size)
                .map(|_| problem.neighbor(&current, rng))
                .collect();

            let mut chosen: Option<(P::Solution, P::Signature, f64)> = None;
            for candidate in batch {
                let signature = problem.signature(&candidate);
                if memory.contains(&signature) {
                    continue;
                }
                let cost = problem.cost(&candidate);
                if chosen.as_ref().is_none_or(|(_, _, c)| cost < *c) {
                    chosen = Some((candidate, signature, cost));
                }
            }

            let Some((next, signature, cost)) = chosen else {
                stalled_iterations += 1;
                tracing::trace!(iteration, "Tabu: every sampled neighbor is tabu");
                cost_history.push(best_cost);
                continue;
            };

            on_move(&memory, &signature);

            current = next;
            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
                best_iteration = Some(iteration);
                tracing::debug!(iteration, best_cost, "Tabu: new best");
            }

            memory.push(signature);
            cost_history.push(best_cost);
        }

        tracing::info!(
            initial_cost,
            best_cost,
            iterations = config.max_iterations,
            stalled_iterations,
            "Tabu finished"
        );

        Ok(TabuResult {
            best,
            best_cost,
            initial_cost,
            iterations: config.max_iterations,
            stalled_iterations,
            best_iteration,
            cost_history,
        })
    }
}
