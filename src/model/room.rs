//! Rooms.

use std::collections::BTreeSet;

/// A room with a seat capacity and timeslots at which it cannot be used.
///
/// `id` doubles as the room's column in a [`Grid`](super::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: usize,
    pub capacity: u32,
    pub unavailable: BTreeSet<usize>,
}

impl Room {
    pub fn new(id: usize, capacity: u32, unavailable: impl IntoIterator<Item = usize>) -> Self {
        Self {
            id,
            capacity,
            unavailable: unavailable.into_iter().collect(),
        }
    }

    /// Whether the room can host a session at `timeslot`.
    pub fn is_available(&self, timeslot: usize) -> bool {
        !self.unavailable.contains(&timeslot)
    }
}
