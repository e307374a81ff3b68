//! The allocation table.

use super::SessionId;

/// Timeslot x room allocation table.
///
/// Stored as a flat row-major vector: row `t` holds the occupants of every
/// room at timeslot `t`. `None` marks an empty cell.
///
/// `Clone` is a deep copy; search stages clone before every mutation so a
/// recorded best solution is never aliased by the current one.
///
/// # Panics
///
/// Cell accessors panic when `timeslot >= num_timeslots()` or
/// `room >= num_rooms()`. Indices are never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    num_timeslots: usize,
    num_rooms: usize,
    cells: Vec<Option<SessionId>>,
}

/// Structural equality key of a [`Grid`].
///
/// Two signatures are equal iff both grids have the same shape and the same
/// occupant in every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSignature {
    num_rooms: usize,
    cells: Box<[Option<SessionId>]>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(num_timeslots: usize, num_rooms: usize) -> Self {
        Self {
            num_timeslots,
            num_rooms,
            cells: vec![None; num_timeslots * num_rooms],
        }
    }

    pub fn num_timeslots(&self) -> usize {
        self.num_timeslots
    }

    pub fn num_rooms(&self) -> usize {
        self.num_rooms
    }

    #[inline]
    fn index(&self, timeslot: usize, room: usize) -> usize {
        assert!(
            timeslot < self.num_timeslots && room < self.num_rooms,
            "cell ({timeslot}, {room}) out of range for {}x{} grid",
            self.num_timeslots,
            self.num_rooms
        );
        timeslot * self.num_rooms + room
    }

    /// Returns the occupant of a cell.
    #[inline]
    pub fn get(&self, timeslot: usize, room: usize) -> Option<SessionId> {
        self.cells[self.index(timeslot, room)]
    }

    /// Places `session` in a cell, overwriting any occupant.
    ///
    /// No constraint is checked here; violations are scored by the
    /// [`CostEvaluator`](crate::cost::CostEvaluator).
    #[inline]
    pub fn set(&mut self, timeslot: usize, room: usize, session: SessionId) {
        let idx = self.index(timeslot, room);
        self.cells[idx] = Some(session);
    }

    /// Empties a cell.
    #[inline]
    pub fn clear(&mut self, timeslot: usize, room: usize) {
        let idx = self.index(timeslot, room);
        self.cells[idx] = None;
    }

    /// Exchanges the occupants of two rooms within one timeslot.
    pub fn swap(&mut self, timeslot: usize, room_a: usize, room_b: usize) {
        let a = self.index(timeslot, room_a);
        let b = self.index(timeslot, room_b);
        self.cells.swap(a, b);
    }

    /// All cells of one timeslot, indexed by room.
    pub fn row(&self, timeslot: usize) -> &[Option<SessionId>] {
        assert!(
            timeslot < self.num_timeslots,
            "timeslot {timeslot} out of range for {} timeslots",
            self.num_timeslots
        );
        let start = timeslot * self.num_rooms;
        &self.cells[start..start + self.num_rooms]
    }

    /// Iterates `(timeslot, room, session)` over occupied cells, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, SessionId)> + '_ {
        let rooms = self.num_rooms;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|s| (i / rooms, i % rooms, s)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Structural key used by tabu memory.
    pub fn signature(&self) -> GridSignature {
        GridSignature {
            num_rooms: self.num_rooms,
            cells: self.cells.clone().into_boxed_slice(),
        }
    }
}

impl std::fmt::Display for Grid {
    /// One line per timeslot, one column per room, `-` for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|s| s.to_string().len())
            .max()
            .unwrap_or(1);
        for t in 0..self.num_timeslots {
            let line: Vec<String> = self
                .row(t)
                .iter()
                .map(|cell| match cell {
                    Some(s) => format!("{:>width$}", s.0),
                    None => format!("{:>width$}", "-"),
                })
                .collect();
            writeln!(f, "[{}]", line.join(" "))?;
        }
        Ok(())
    }
}
