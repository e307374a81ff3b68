//! Class-to-room timetabling by local search.
//!
//! Assigns class sessions to (timeslot, room) cells so that hard
//! constraints hold and wasted seats are kept low:
//!
//! - **Model** ([`model`]): sessions, rooms, the timeslot x room [`Grid`](model::Grid)
//!   and a validated [`Instance`](model::Instance).
//! - **Cost** ([`cost`]): `100 * g + h`, where `g` counts hard violations
//!   (double placement in a timeslot, over capacity, closed room) and `h`
//!   sums `sqrt(|capacity - enrollment|)`.
//! - **Neighborhood** ([`neighbor`]): swap two rooms within one timeslot.
//! - **Construction** ([`construct`]): greedy randomized starting grid.
//! - **Simulated Annealing** ([`sa`]) and **Tabu Search** ([`tabu`]):
//!   generic trajectory searches over any solution type.
//! - **Hybrid** ([`hybrid`]): construction, then SA, then tabu.
//!
//! A run is single-threaded and draws every random decision from one
//! seeded generator ([`random::create_rng`]), so a fixed seed reproduces
//! the result exactly.
//!
//! # Examples
//!
//! ```
//! use u_timetable::hybrid::{HybridConfig, HybridSolver};
//! use u_timetable::model::{Instance, Room, Session};
//!
//! let instance = Instance::new(
//!     5,
//!     vec![
//!         Session::new(1, 40, [1, 2]),
//!         Session::new(2, 25, [2, 3]),
//!         Session::new(3, 60, [3, 4]),
//!         Session::new(4, 35, [1, 4]),
//!     ],
//!     vec![
//!         Room::new(0, 30, [3]),
//!         Room::new(1, 50, []),
//!         Room::new(2, 70, [2]),
//!     ],
//! )?;
//!
//! let report = HybridSolver::new(HybridConfig::default().with_seed(42)).solve(&instance)?;
//! assert_eq!(report.breakdown.hard_violations(), 0);
//! println!("cost {:.3}\n{}", report.cost, report.grid);
//! # Ok::<(), u_timetable::error::TimetableError>(())
//! ```

pub mod construct;
pub mod cost;
pub mod error;
pub mod hybrid;
pub mod model;
pub mod neighbor;
pub mod random;
pub mod sa;
pub mod tabu;
