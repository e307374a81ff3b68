//! Tabu Search (TS).
//!
//! A single-solution trajectory search that samples a batch of neighbors
//! each iteration and moves to the cheapest one whose signature is not in
//! a bounded FIFO memory of recently visited solutions. Used as the
//! second refinement stage of the hybrid pipeline.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;
mod types;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner};
pub use types::TabuProblem;
