//! Swap neighborhood.
//!
//! The only move used by both searches: exchange the occupants of two
//! rooms within one timeslot. Either cell may be empty. The move permutes
//! a row, so the set of sessions meeting at each timeslot never changes.

use rand::Rng;

use crate::model::Grid;

/// Returns a copy of `grid` with two distinct rooms swapped in a random
/// timeslot. `grid` itself is left untouched.
///
/// The timeslot is drawn uniformly, then an unordered pair of distinct
/// rooms is drawn uniformly without replacement.
///
/// # Panics
///
/// If the grid has fewer than two rooms or no timeslots.
pub fn swap_neighbor<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    let rooms = grid.num_rooms();
    assert!(rooms >= 2, "swap neighborhood needs at least two rooms, got {rooms}");
    assert!(grid.num_timeslots() > 0, "swap neighborhood needs a timeslot");

    let timeslot = rng.random_range(0..grid.num_timeslots());
    let first = rng.random_range(0..rooms);
    let mut second = rng.random_range(0..rooms - 1);
    if second >= first {
        second += 1;
    }

    let mut next = grid.clone();
    next.swap(timeslot, first, second);
    next
}
