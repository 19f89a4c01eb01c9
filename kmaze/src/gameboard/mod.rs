pub mod cell;
pub mod maze;

pub use cell::{Direction, Wall, WallError};
pub use maze::Maze;
