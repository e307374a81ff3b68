//! Validated problem instance.

use std::collections::HashMap;

use super::{Grid, Room, Session, SessionId};
use crate::error::{Result, TimetableError};

/// Sessions and rooms over a planning horizon of `num_timeslots` slots.
///
/// Construction checks the preconditions the search relies on, so that
/// the builder and the evaluator never index outside the grid.
#[derive(Debug, Clone)]
pub struct Instance {
    num_timeslots: usize,
    sessions: Vec<Session>,
    rooms: Vec<Room>,
    by_id: HashMap<SessionId, usize>,
}

impl Instance {
    /// Validates and builds an instance.
    ///
    /// # Errors
    ///
    /// - [`TimetableError::NoTimeslots`] if `num_timeslots == 0`
    /// - [`TimetableError::NoRooms`] if `rooms` is empty
    /// - [`TimetableError::RoomIndexMismatch`] if a room id differs from its position
    /// - [`TimetableError::ZeroCapacity`] if a room seats nobody
    /// - [`TimetableError::ZeroEnrollment`] if a session has no students
    /// - [`TimetableError::EmptyRequirement`] if a session has no timeslots
    /// - [`TimetableError::TimeslotOutOfRange`] if a required slot is `>= num_timeslots`
    /// - [`TimetableError::DuplicateSession`] if two sessions share an id
    pub fn new(num_timeslots: usize, sessions: Vec<Session>, rooms: Vec<Room>) -> Result<Self> {
        if num_timeslots == 0 {
            return Err(TimetableError::NoTimeslots);
        }
        if rooms.is_empty() {
            return Err(TimetableError::NoRooms);
        }
        for (position, room) in rooms.iter().enumerate() {
            if room.id != position {
                return Err(TimetableError::RoomIndexMismatch {
                    position,
                    id: room.id,
                });
            }
            if room.capacity == 0 {
                return Err(TimetableError::ZeroCapacity { room: room.id });
            }
        }

        let mut by_id = HashMap::with_capacity(sessions.len());
        for (idx, session) in sessions.iter().enumerate() {
            if session.enrollment == 0 {
                return Err(TimetableError::ZeroEnrollment {
                    session: session.id,
                });
            }
            if session.required_timeslots.is_empty() {
                return Err(TimetableError::EmptyRequirement {
                    session: session.id,
                });
            }
            if let Some(&timeslot) = session
                .required_timeslots
                .iter()
                .find(|&&t| t >= num_timeslots)
            {
                return Err(TimetableError::TimeslotOutOfRange {
                    session: session.id,
                    timeslot,
                    num_timeslots,
                });
            }
            if by_id.insert(session.id, idx).is_some() {
                return Err(TimetableError::DuplicateSession {
                    session: session.id,
                });
            }
        }

        Ok(Self {
            num_timeslots,
            sessions,
            rooms,
            by_id,
        })
    }

    pub fn num_timeslots(&self) -> usize {
        self.num_timeslots
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a session by id.
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.by_id.get(&id).map(|&idx| &self.sessions[idx])
    }

    /// An all-empty grid shaped for this instance.
    pub fn empty_grid(&self) -> Grid {
        Grid::new(self.num_timeslots, self.rooms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Room> {
        vec![Room::new(0, 30, [3]), Room::new(1, 50, [])]
    }

    #[test]
    fn test_valid_instance() {
        let inst = Instance::new(5, vec![Session::new(1, 40, [1, 2])], rooms()).unwrap();
        assert_eq!(inst.num_timeslots(), 5);
        assert_eq!(inst.num_rooms(), 2);
        assert_eq!(inst.session(SessionId(1)).unwrap().enrollment, 40);
        assert!(inst.session(SessionId(9)).is_none());
        assert_eq!(inst.empty_grid().num_rooms(), 2);
    }

    #[test]
    fn test_rejects_zero_timeslots() {
        let err = Instance::new(0, vec![], rooms()).unwrap_err();
        assert_eq!(err, TimetableError::NoTimeslots);
    }

    #[test]
    fn test_rejects_no_rooms() {
        let err = Instance::new(3, vec![], vec![]).unwrap_err();
        assert_eq!(err, TimetableError::NoRooms);
    }

    #[test]
    fn test_rejects_misaligned_room_ids() {
        let err = Instance::new(3, vec![], vec![Room::new(1, 10, [])]).unwrap_err();
        assert_eq!(err, TimetableError::RoomIndexMismatch { position: 0, id: 1 });
    }

    #[test]
    fn test_rejects_out_of_range_timeslot() {
        let err = Instance::new(5, vec![Session::new(2, 10, [1, 5])], rooms()).unwrap_err();
        assert_eq!(
            err,
            TimetableError::TimeslotOutOfRange {
                session: SessionId(2),
                timeslot: 5,
                num_timeslots: 5,
            }
        );
    }

    #[test]
    fn test_rejects_empty_requirement() {
        let err = Instance::new(5, vec![Session::new(2, 10, [])], rooms()).unwrap_err();
        assert_eq!(
            err,
            TimetableError::EmptyRequirement {
                session: SessionId(2)
            }
        );
    }

    #[test]
    fn test_rejects_zero_enrollment() {
        let err = Instance::new(5, vec![Session::new(4, 0, [1])], rooms()).unwrap_err();
        assert_eq!(
            err,
            TimetableError::ZeroEnrollment {
                session: SessionId(4)
            }
        );
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let rooms = vec![Room::new(0, 30, []), Room::new(1, 0, [2])];
        let err = Instance::new(5, vec![Session::new(1, 10, [0])], rooms).unwrap_err();
        assert_eq!(err, TimetableError::ZeroCapacity { room: 1 });
        assert!(err.to_string().contains("room 1"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let sessions = vec![Session::new(1, 10, [0]), Session::new(1, 20, [1])];
        let err = Instance::new(5, sessions, rooms()).unwrap_err();
        assert_eq!(
            err,
            TimetableError::DuplicateSession {
                session: SessionId(1)
            }
        );
    }
}
