//! Simulated Annealing (SA).
//!
//! Single-solution trajectory search that accepts worsening moves with a
//! probability `exp(-delta / T)` which shrinks as the temperature `T` is
//! cooled geometrically. Used as the first refinement stage of the hybrid
//! pipeline.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
