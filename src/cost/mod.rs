//! Solution scoring.
//!
//! A grid is scored as `hard_weight * g + h`, where `g` counts hard
//! constraint violations and `h` is the accumulated space-waste penalty.
//! With the default weight of 100, fewer violations always wins as long as
//! the waste penalty per violation stays below 100.

mod evaluator;
mod types;

pub use evaluator::{CostEvaluator, DEFAULT_HARD_WEIGHT};
pub use types::CostBreakdown;
