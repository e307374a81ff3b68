//! Hybrid pipeline: greedy construction, then Simulated Annealing, then
//! Tabu Search.
//!
//! Each stage starts from the previous stage's best solution. There is no
//! feedback between stages and no comparison across them; the tabu
//! stage's best is the final answer.

mod config;
mod problem;
mod runner;

pub use config::HybridConfig;
pub use problem::TimetableProblem;
pub use runner::{HybridReport, HybridSolver, StageSummary};
