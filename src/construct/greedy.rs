//! Greedy randomized builder.

use rand::Rng;

use crate::model::{Grid, Instance};

/// Counters collected while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Placements made into an open, empty room.
    pub placed: usize,
    /// Placements made into a random room because no open, empty room was left.
    pub forced: usize,
}

/// Builds a starting grid for an [`Instance`].
pub struct GreedyBuilder;

impl GreedyBuilder {
    /// Builds a starting grid.
    ///
    /// Sessions are visited in input order and each session's timeslots in
    /// ascending order. For every pair the candidate rooms are those open
    /// at the timeslot and still empty there; one is drawn uniformly. When
    /// there is no candidate, a room is drawn uniformly among all rooms and
    /// its occupant, if any, is overwritten.
    pub fn build<R: Rng>(instance: &Instance, rng: &mut R) -> Grid {
        Self::build_with_stats(instance, rng).0
    }

    /// Same as [`build`](Self::build), also reporting how many placements
    /// had to be forced.
    #[tracing::instrument(level = "debug", name = "Greedy Build", skip_all)]
    pub fn build_with_stats<R: Rng>(instance: &Instance, rng: &mut R) -> (Grid, BuildStats) {
        let rooms = instance.rooms();
        let mut grid = instance.empty_grid();
        let mut stats = BuildStats::default();
        let mut candidates = Vec::with_capacity(rooms.len());

        for session in instance.sessions() {
            for &t in &session.required_timeslots {
                candidates.clear();
                candidates.extend(
                    rooms
                        .iter()
                        .enumerate()
                        .filter(|(r, room)| room.is_available(t) && grid.get(t, *r).is_none())
                        .map(|(r, _)| r),
                );

                let room = if candidates.is_empty() {
                    let r = rng.random_range(0..rooms.len());
                    tracing::debug!(
                        session = %session.id,
                        timeslot = t,
                        room = r,
                        "no open room left, forcing placement"
                    );
                    stats.forced += 1;
                    r
                } else {
                    stats.placed += 1;
                    candidates[rng.random_range(0..candidates.len())]
                };

                grid.set(t, room, session.id);
            }
        }

        tracing::debug!(
            placed = stats.placed,
            forced = stats.forced,
            "initial grid built"
        );
        (grid, stats)
    }
}
