use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Dims;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn to_coord(&self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn from_coord(off: Dims) -> Option<Self> {
        match off {
            Dims(0, -1) => Some(Self::North),
            Dims(0, 1) => Some(Self::South),
            Dims(1, 0) => Some(Self::East),
            Dims(-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Order in which neighbors are enumerated during generation.
    pub fn get_in_order() -> [Direction; 4] {
        [Self::North, Self::South, Self::East, Self::West]
    }

    /// Direction in which `to` lies from `from`.
    ///
    /// Looks only at the signs of the deltas: west wins over north, north over south, and
    /// anything else, including equal cells, is east.
    pub fn between(from: Dims, to: Dims) -> Self {
        if to.0 < from.0 {
            Self::West
        } else if to.1 < from.1 {
            Self::North
        } else if to.1 > from.1 {
            Self::South
        } else {
            Self::East
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WallError {
    #[error("cell {cell:?} is not an endpoint of wall {wall:?}")]
    NotAnEndpoint { wall: Wall, cell: Dims },
}

/// Weighted connection between two neighboring cells.
///
/// While the maze is generated this is a wall that may be knocked down; once it's picked
/// into the spanning tree it's an open passage. Equality and hashing ignore the weight and
/// the order of the endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    from: Dims,
    to: Dims,
    weight: u32,
}

impl Wall {
    pub fn new(from: Dims, to: Dims, weight: u32) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> Dims {
        self.from
    }

    pub fn to(&self) -> Dims {
        self.to
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn ends(&self) -> (Dims, Dims) {
        (self.from, self.to)
    }

    pub fn contains(&self, cell: Dims) -> bool {
        self.from == cell || self.to == cell
    }

    pub fn connects(&self, a: Dims, b: Dims) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn other_end(&self, cell: Dims) -> Result<Dims, WallError> {
        if self.from == cell {
            Ok(self.to)
        } else if self.to == cell {
            Ok(self.from)
        } else {
            Err(WallError::NotAnEndpoint { wall: *self, cell })
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.from, self.to)
    }

    pub fn is_adjacent(&self) -> bool {
        self.from.manhattan(self.to) == 1
    }

    fn sorted_ends(&self) -> (Dims, Dims) {
        if self.from.row_major_cmp(&self.to).is_le() {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl PartialEq for Wall {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.from, other.to)
    }
}

impl Eq for Wall {}

impl Hash for Wall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_ends().hash(state);
    }
}
