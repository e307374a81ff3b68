//! Search-framework adapter for timetabling grids.

use rand::Rng;

use crate::cost::CostEvaluator;
use crate::error::{Result, TimetableError};
use crate::model::{Grid, GridSignature};
use crate::neighbor::swap_neighbor;
use crate::sa::SaProblem;
use crate::tabu::TabuProblem;

/// Binds the cost evaluator and the swap neighborhood so both runners can
/// search over [`Grid`]s.
#[derive(Debug, Clone, Copy)]
pub struct TimetableProblem<'a> {
    evaluator: CostEvaluator<'a>,
}

impl<'a> TimetableProblem<'a> {
    /// # Errors
    ///
    /// [`TimetableError::TooFewRoomsForSwap`] when the instance has fewer
    /// than two rooms, since no swap move exists.
    pub fn new(evaluator: CostEvaluator<'a>) -> Result<Self> {
        let rooms = evaluator.instance().num_rooms();
        if rooms < 2 {
            return Err(TimetableError::TooFewRoomsForSwap { rooms });
        }
        Ok(Self { evaluator })
    }

    pub fn evaluator(&self) -> &CostEvaluator<'a> {
        &self.evaluator
    }
}

impl SaProblem for TimetableProblem<'_> {
    type Solution = Grid;

    fn cost(&self, grid: &Grid) -> f64 {
        self.evaluator.evaluate(grid)
    }

    fn neighbor<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Grid {
        swap_neighbor(grid, rng)
    }
}

impl TabuProblem for TimetableProblem<'_> {
    type Solution = Grid;
    type Signature = GridSignature;

    fn cost(&self, grid: &Grid) -> f64 {
        self.evaluator.evaluate(grid)
    }

    fn neighbor<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Grid {
        swap_neighbor(grid, rng)
    }

    fn signature(&self, grid: &Grid) -> GridSignature {
        grid.signature()
    }
}
