//! Timetabling domain model.
//!
//! - [`Session`]: a class that must be placed in one room at each of its
//!   required timeslots.
//! - [`Room`]: a capacity-limited room, possibly closed at some timeslots.
//! - [`Grid`]: the allocation table, timeslot x room → session or empty.
//! - [`Instance`]: a validated set of sessions and rooms over a fixed
//!   planning horizon.

mod grid;
mod instance;
mod room;
mod session;

pub use grid::{Grid, GridSignature};
pub use instance::Instance;
pub use room::Room;
pub use session::{Session, SessionId};
