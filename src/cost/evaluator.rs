//! Grid cost evaluation.

use super::types::CostBreakdown;
use crate::error::{Result, TimetableError};
use crate::model::{Grid, Instance};

/// Default multiplier applied to each hard violation.
pub const DEFAULT_HARD_WEIGHT: f64 = 100.0;

/// Scores grids against an [`Instance`].
///
/// Evaluation is pure: the same grid always yields the same score.
///
/// Hard violations, counted once per offending cell:
/// - the cell's session also sits in another room of the same timeslot
/// - the session's enrollment exceeds the room's capacity
/// - the room is unavailable at that timeslot
///
/// Soft penalty per occupied cell: `sqrt(|capacity - enrollment|)`.
///
/// Cells holding an id that is not in the instance are skipped and only
/// counted in [`CostBreakdown::unknown_sessions`].
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    instance: &'a Instance,
    hard_weight: f64,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator with [`DEFAULT_HARD_WEIGHT`].
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            hard_weight: DEFAULT_HARD_WEIGHT,
        }
    }

    /// Overrides the hard violation multiplier.
    pub fn with_hard_weight(mut self, weight: f64) -> Self {
        self.hard_weight = weight;
        self
    }

    pub fn hard_weight(&self) -> f64 {
        self.hard_weight
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Scalar cost of `grid`. Lower is better, never negative.
    ///
    /// # Panics
    ///
    /// If `grid` is not shaped `num_timeslots x num_rooms` of the instance.
    pub fn evaluate(&self, grid: &Grid) -> f64 {
        self.breakdown(grid).total(self.hard_weight)
    }

    /// Per-constraint tally of `grid`.
    ///
    /// # Panics
    ///
    /// If `grid` is not shaped `num_timeslots x num_rooms` of the instance.
    pub fn breakdown(&self, grid: &Grid) -> CostBreakdown {
        assert_eq!(
            (grid.num_timeslots(), grid.num_rooms()),
            (self.instance.num_timeslots(), self.instance.num_rooms()),
            "grid shape does not match instance"
        );

        let rooms = self.instance.rooms();
        let mut b = CostBreakdown::default();

        for (t, r, id) in grid.occupied() {
            let Some(session) = self.instance.session(id) else {
                b.unknown_sessions += 1;
                tracing::trace!(timeslot = t, room = r, session = %id, "unknown session in grid");
                continue;
            };
            let room = &rooms[r];

            if grid.row(t).iter().filter(|&&c| c == Some(id)).count() > 1 {
                b.duplicates += 1;
            }
            if session.enrollment > room.capacity {
                b.over_capacity += 1;
            }
            if !room.is_available(t) {
                b.unavailable += 1;
            }

            b.soft += (room.capacity as f64 - session.enrollment as f64)
                .abs()
                .sqrt();
        }

        b
    }

    /// Like [`breakdown`](Self::breakdown) for grids of unknown origin.
    ///
    /// # Errors
    ///
    /// [`TimetableError::GridShapeMismatch`] instead of panicking.
    pub fn try_breakdown(&self, grid: &Grid) -> Result<CostBreakdown> {
        let expected = (self.instance.num_timeslots(), self.instance.num_rooms());
        let actual = (grid.num_timeslots(), grid.num_rooms());
        if expected != actual {
            return Err(TimetableError::GridShapeMismatch { expected, actual });
        }
        Ok(self.breakdown(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Room, Session, SessionId};
    use proptest::prelude::*;

    fn sample_instance() -> Instance {
        Instance::new(
            5,
            vec![
                Session::new(1, 40, [1, 2]),
                Session::new(2, 25, [2, 3]),
                Session::new(3, 60, [3, 4]),
                Session::new(4, 35, [1, 4]),
            ],
            vec![
                Room::new(0, 30, [3]),
                Room::new(1, 50, []),
                Room::new(2, 70, [2]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_single_cell_feasible_score() {
        let inst = Instance::new(1, vec![Session::new(1, 8, [0])], vec![Room::new(0, 10, [])])
            .unwrap();
        let mut grid = inst.empty_grid();
        grid.set(0, 0, SessionId(1));

        let eval = CostEvaluator::new(&inst);
        let b = eval.breakdown(&grid);
        assert_eq!(b.hard_violations(), 0);
        assert!((b.soft - 2f64.sqrt()).abs() < 1e-12);
        assert!((eval.evaluate(&grid) - 1.414_213_562).abs() < 1e-6);
    }

    #[test]
    fn test_empty_grid_costs_nothing() {
        let inst = sample_instance();
        assert_eq!(CostEvaluator::new(&inst).evaluate(&inst.empty_grid()), 0.0);
    }

    #[test]
    fn test_over_capacity_everywhere_costs_at_least_hard_weight() {
        let inst = sample_instance();
        let eval = CostEvaluator::new(&inst);
        // Session 3 has 60 students; only room 2 (70 seats) fits it.
        for r in 0..2 {
            let mut grid = inst.empty_grid();
            grid.set(3, r, SessionId(3));
            let b = eval.breakdown(&grid);
            assert!(b.over_capacity >= 1);
            assert!(eval.evaluate(&grid) >= 100.0);
        }
    }

    #[test]
    fn test_duplicate_counted_per_cell() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        grid.set(1, 1, SessionId(1));
        grid.set(1, 2, SessionId(1));

        let b = CostEvaluator::new(&inst).breakdown(&grid);
        assert_eq!(b.duplicates, 2);
        assert_eq!(b.over_capacity, 0);
        assert_eq!(b.unavailable, 0);
        let expected_soft = 10f64.sqrt() + 30f64.sqrt();
        assert!((b.soft - expected_soft).abs() < 1e-12);
    }

    #[test]
    fn test_same_session_in_different_rows_is_not_duplicate() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        grid.set(1, 1, SessionId(1));
        grid.set(2, 1, SessionId(1));
        assert_eq!(CostEvaluator::new(&inst).breakdown(&grid).duplicates, 0);
    }

    #[test]
    fn test_unavailable_room() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        grid.set(2, 2, SessionId(2));
        let b = CostEvaluator::new(&inst).breakdown(&grid);
        assert_eq!(b.unavailable, 1);
        assert_eq!(b.hard_violations(), 1);
    }

    #[test]
    fn test_violations_stack_on_one_cell() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        // Room 0 is closed at 3 and holds only 30 seats.
        grid.set(3, 0, SessionId(3));
        let b = CostEvaluator::new(&inst).breakdown(&grid);
        assert_eq!(b.over_capacity, 1);
        assert_eq!(b.unavailable, 1);
        assert_eq!(b.hard_violations(), 2);
    }

    #[test]
    fn test_unknown_session_contributes_nothing() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        grid.set(0, 0, SessionId(99));
        grid.set(0, 1, SessionId(99));

        let eval = CostEvaluator::new(&inst);
        let b = eval.breakdown(&grid);
        assert_eq!(b.unknown_sessions, 2);
        assert_eq!(b.hard_violations(), 0);
        assert_eq!(eval.evaluate(&grid), 0.0);
    }

    #[test]
    fn test_custom_hard_weight() {
        let inst = sample_instance();
        let mut grid = inst.empty_grid();
        grid.set(2, 2, SessionId(2));
        let eval = CostEvaluator::new(&inst).with_hard_weight(1000.0);
        let expected = 1000.0 + 45f64.sqrt();
        assert!((eval.evaluate(&grid) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_try_breakdown_rejects_wrong_shape() {
        let inst = sample_instance();
        let err = CostEvaluator::new(&inst)
            .try_breakdown(&Grid::new(4, 3))
            .unwrap_err();
        assert_eq!(
            err,
            TimetableError::GridShapeMismatch {
                expected: (5, 3),
                actual: (4, 3)
            }
        );
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_pure_and_non_negative(
            cells in prop::collection::vec(prop::option::of(1u32..6), 15)
        ) {
            let inst = sample_instance();
            let mut grid = inst.empty_grid();
            for (i, cell) in cells.into_iter().enumerate() {
                if let Some(id) = cell {
                    grid.set(i / 3, i % 3, SessionId(id));
                }
            }
            let snapshot = grid.clone();
            let eval = CostEvaluator::new(&inst);
            let first = eval.evaluate(&grid);
            let second = eval.evaluate(&grid);
            prop_assert_eq!(first, second);
            prop_assert!(first >= 0.0);
            prop_assert_eq!(grid, snapshot);
        }

        #[test]
        fn prop_feasible_cells_have_no_hard_violations(slot in 0usize..5) {
            // Session 2 (25 students) in room 1 (50 seats, always open).
            let inst = sample_instance();
            let mut grid = inst.empty_grid();
            grid.set(slot, 1, SessionId(2));
            prop_assert!(CostEvaluator::new(&inst).breakdown(&grid).is_feasible());
        }
    }
}
