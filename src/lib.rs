//! Grid maze construction and route finding.
//!
//! [`generators`] build a maze together with a replayable log of every cell it changed,
//! [`solvers`] find a path between two cells, and [`router`] chains solver calls into a
//! greedy tour through a set of waypoints.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod router;
pub mod solvers;

pub use error::MazeError;
pub use generators::{GenerationLog, Generator, Playback, generate_maze};
pub use maze::{CellState, Coord, Grid, Path};
pub use solvers::{Solver, solve};
