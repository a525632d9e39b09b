//! Grid model and step-wise A* for the gridpath visualizer.
//!
//! - [`Grid`]: a square arena of [`Node`]s with pixel geometry and
//!   neighbour lists rebuilt on demand ([`Grid::recompute_neighbors`]).
//! - [`Node`] / [`Status`]: the per-cell state machine.
//! - [`Search`]: A* with a Manhattan heuristic and unit edge weights,
//!   advanced one checkpoint at a time so a renderer can observe every
//!   expansion. [`run`] drives a whole search through two callbacks.
//! - [`bfs`]: breadth-first distances over the same neighbour lists, used as
//!   an optimality reference.
//!
//! Neighbours are always considered in the order down, up, right, left, and
//! equal scores are popped in insertion order, so runs are deterministic.

mod astar;
pub mod bfs;
mod distance;
mod grid;
mod neighbors;
mod node;
mod open_set;

pub use astar::{Outcome, Progress, Search, run};
pub use distance::{heuristic, manhattan};
pub use grid::{Grid, pixel_to_cell};
pub use neighbors::{Direction, cardinal};
pub use node::{Node, Pos, Status};
pub use open_set::OpenSet;
