//! Perfect maze generation with randomized Kruskal's and step-driven maze search.
//!
//! [`algorithms::generate`] builds a [`gameboard::Maze`], [`game::RunningGame`] drives a
//! breadth-first or depth-first search over it, or lets a player walk it by hand.

pub mod algorithms;
pub mod dims;
pub mod frontier;
pub mod game;
pub mod gameboard;

pub use algorithms::{generate, search::SearchMode, GenError, MazeSpec, Step};
pub use dims::Dims;
pub use game::{GameError, RunningGame, RunningGameState};
pub use gameboard::{Direction, Maze, Wall};
