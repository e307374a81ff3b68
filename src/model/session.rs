//! Class sessions.

use std::collections::BTreeSet;

/// Identifier of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u32);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        SessionId(id)
    }
}

/// A class session: how many students attend and at which timeslots it meets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Unique identifier.
    pub id: SessionId,
    /// Number of enrolled students.
    pub enrollment: u32,
    /// Timeslots at which the session must be placed, iterated in ascending order.
    pub required_timeslots: BTreeSet<usize>,
}

impl Session {
    /// Creates a session.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_timetable::model::Session;
    ///
    /// let s = Session::new(1, 40, [2, 1]);
    /// assert_eq!(s.required_timeslots.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn new(id: u32, enrollment: u32, timeslots: impl IntoIterator<Item = usize>) -> Self {
        Self {
            id: SessionId(id),
            enrollment,
            required_timeslots: timeslots.into_iter().collect(),
        }
    }

    /// Whether the session meets at `timeslot`.
    pub fn requires(&self, timeslot: usize) -> bool {
        self.required_timeslots.contains(&timeslot)
    }
}
