//! Error type for the timetabling engine.

use crate::model::SessionId;

/// Errors reported at the library boundary.
///
/// Grid accessors panic on out-of-range indices, like slice indexing.
/// Everything that can be checked before a run starts is checked by
/// [`Instance::new`](crate::model::Instance::new), the builder, the config
/// `validate` methods and [`HybridSolver`](crate::hybrid::HybridSolver),
/// and reported through this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// A configuration value is out of its valid range.
    InvalidConfig(String),
    /// The room collection is empty.
    NoRooms,
    /// Search needs at least two rooms to swap between.
    TooFewRoomsForSwap { rooms: usize },
    /// The planning horizon has zero timeslots.
    NoTimeslots,
    /// A room's id does not match its position in the collection.
    RoomIndexMismatch { position: usize, id: usize },
    /// A session requires a timeslot outside the planning horizon.
    TimeslotOutOfRange {
        session: SessionId,
        timeslot: usize,
        num_timeslots: usize,
    },
    /// A session has no required timeslots.
    EmptyRequirement { session: SessionId },
    /// Two sessions share the same id.
    DuplicateSession { session: SessionId },
    /// A session has no enrolled students.
    ZeroEnrollment { session: SessionId },
    /// A room seats nobody.
    ZeroCapacity { room: usize },
    /// A grid does not have the dimensions of the instance it is scored against.
    GridShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl std::fmt::Display for TimetableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimetableError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            TimetableError::NoRooms => write!(f, "room collection is empty"),
            TimetableError::TooFewRoomsForSwap { rooms } => write!(
                f,
                "swap neighborhood needs at least two rooms, instance has {rooms}"
            ),
            TimetableError::NoTimeslots => write!(f, "planning horizon has no timeslots"),
            TimetableError::RoomIndexMismatch { position, id } => write!(
                f,
                "room at position {position} has id {id}; ids must match positions"
            ),
            TimetableError::TimeslotOutOfRange {
                session,
                timeslot,
                num_timeslots,
            } => write!(
                f,
                "session {session} requires timeslot {timeslot}, horizon has {num_timeslots}"
            ),
            TimetableError::EmptyRequirement { session } => {
                write!(f, "session {session} has no required timeslots")
            }
            TimetableError::DuplicateSession { session } => {
                write!(f, "session id {session} appears more than once")
            }
            TimetableError::ZeroEnrollment { session } => {
                write!(f, "session {session} has zero enrollment")
            }
            TimetableError::ZeroCapacity { room } => write!(f, "room {room} has zero capacity"),
            TimetableError::GridShapeMismatch { expected, actual } => write!(
                f,
                "grid is {}x{}, instance expects {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for TimetableError {}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_offending_values() {
        let err = TimetableError::TimeslotOutOfRange {
            session: SessionId(3),
            timeslot: 9,
            num_timeslots: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("session 3"));
        assert!(msg.contains('9'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&TimetableError::NoRooms);
    }
}
