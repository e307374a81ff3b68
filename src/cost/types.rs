//! Cost components.

/// Per-constraint tally of a scored grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    /// Cells whose session also occupies another room in the same timeslot.
    pub duplicates: u32,
    /// Cells whose session enrollment exceeds the room capacity.
    pub over_capacity: u32,
    /// Cells placed in a room at a timeslot the room is closed.
    pub unavailable: u32,
    /// Cells holding an id absent from the session dataset. Not penalized.
    pub unknown_sessions: u32,
    /// Sum of `sqrt(|capacity - enrollment|)` over known occupied cells.
    pub soft: f64,
}

impl CostBreakdown {
    /// Number of hard violations (`g`).
    pub fn hard_violations(&self) -> u32 {
        self.duplicates + self.over_capacity + self.unavailable
    }

    /// Scalar score `hard_weight * g + soft`.
    pub fn total(&self, hard_weight: f64) -> f64 {
        hard_weight * self.hard_violations() as f64 + self.soft
    }

    /// Whether no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.hard_violations() == 0
    }
}
