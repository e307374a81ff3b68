//! Initial solution construction.
//!
//! A greedy randomized pass that places every required (session, timeslot)
//! pair, preferring open, empty rooms and falling back to any room when
//! none is left. The fallback may create hard violations; the searches
//! downstream are expected to repair them.

mod greedy;

pub use greedy::{BuildStats, GreedyBuilder};
