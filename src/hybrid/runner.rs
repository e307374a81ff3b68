//! Pipeline driver.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use super::config::HybridConfig;
use super::problem::TimetableProblem;
use crate::construct::{BuildStats, GreedyBuilder};
use crate::cost::{CostBreakdown, CostEvaluator};
use crate::error::Result;
use crate::model::{Grid, Instance};
use crate::random::create_rng;
use crate::sa::SaRunner;
use crate::tabu::TabuRunner;

/// Cost and effort of one search stage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageSummary {
    /// Cost of the solution the stage started from.
    pub initial_cost: f64,
    /// Cost of the stage's best solution.
    pub best_cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Moves taken: accepted moves for SA, non-stalled iterations for tabu.
    pub moves: usize,
}

/// Outcome of [`HybridSolver::solve`].
#[derive(Debug, Clone)]
pub struct HybridReport {
    /// Final allocation.
    pub grid: Grid,
    /// Score of `grid`.
    pub cost: f64,
    /// Per-constraint tally of `grid`.
    pub breakdown: CostBreakdown,
    /// Score of the constructed starting grid.
    pub initial_cost: f64,
    /// Construction counters.
    pub build: BuildStats,
    /// Annealing stage summary.
    pub sa: StageSummary,
    /// Tabu stage summary.
    pub tabu: StageSummary,
    /// Whether the annealing stage was cancelled.
    pub cancelled: bool,
}

/// Runs construction, Simulated Annealing and Tabu Search in sequence.
///
/// # Examples
///
/// ```
/// use u_timetable::hybrid::{HybridConfig, HybridSolver};
/// use u_timetable::model::{Instance, Room, Session};
///
/// let instance = Instance::new(
///     3,
///     vec![Session::new(1, 20, [0, 1]), Session::new(2, 45, [1, 2])],
///     vec![Room::new(0, 25, []), Room::new(1, 50, [0])],
/// )
/// .unwrap();
///
/// let report = HybridSolver::new(HybridConfig::default()).solve(&instance).unwrap();
/// assert!(report.cost <= report.initial_cost);
/// assert!(report.breakdown.is_feasible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HybridSolver {
    config: HybridConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl HybridSolver {
    pub fn new(config: HybridConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Installs a flag that stops the annealing stage at its next
    /// temperature level when set.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    /// Solves `instance` with a generator seeded from the config.
    ///
    /// # Errors
    ///
    /// - [`TimetableError::InvalidConfig`](crate::error::TimetableError::InvalidConfig)
    ///   if the config does not validate
    /// - [`TimetableError::TooFewRoomsForSwap`](crate::error::TimetableError::TooFewRoomsForSwap)
    ///   if the instance has fewer than two rooms
    pub fn solve(&self, instance: &Instance) -> Result<HybridReport> {
        let mut rng = create_rng(self.config.seed);
        self.solve_with_rng(instance, &mut rng)
    }

    /// Solves `instance` drawing every random decision from `rng`.
    #[tracing::instrument(level = "debug", name = "Hybrid Solve", skip_all)]
    pub fn solve_with_rng<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Result<HybridReport> {
        self.config.validate()?;

        let evaluator = CostEvaluator::new(instance).with_hard_weight(self.config.hard_weight);
        let problem = TimetableProblem::new(evaluator)?;

        tracing::info!(
            sessions = instance.sessions().len(),
            rooms = instance.num_rooms(),
            timeslots = instance.num_timeslots(),
            seed = self.config.seed,
            "solving timetable"
        );

        let (initial, build) = GreedyBuilder::build_with_stats(instance, rng);
        let initial_cost = evaluator.evaluate(&initial);

        let annealed =
            SaRunner::run_with_cancel(&problem, initial, &self.config.sa, rng, self.cancel.clone())?;
        let sa = StageSummary {
            initial_cost: annealed.initial_cost,
            best_cost: annealed.best_cost,
            iterations: annealed.iterations,
            moves: annealed.accepted_moves,
        };

        let searched = TabuRunner::run(&problem, annealed.best, &self.config.tabu, rng)?;
        let tabu = StageSummary {
            initial_cost: searched.initial_cost,
            best_cost: searched.best_cost,
            iterations: searched.iterations,
            moves: searched.iterations - searched.stalled_iterations,
        };

        let grid = searched.best;
        let breakdown = evaluator.breakdown(&grid);
        let cost = breakdown.total(self.config.hard_weight);

        tracing::info!(
            initial_cost,
            annealed_cost = sa.best_cost,
            cost,
            hard_violations = breakdown.hard_violations(),
            "timetable solved"
        );

        Ok(HybridReport {
            grid,
            cost,
            breakdown,
            initial_cost,
            build,
            sa,
            tabu,
            cancelled: annealed.cancelled,
        })
    }
}
