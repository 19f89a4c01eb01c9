pub mod rnd_kruskals;
pub mod search;
pub mod union_find;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Dims, gameboard::Maze};

pub use rnd_kruskals::RndKruskals;
pub use search::{Search, Step};
pub use union_find::DisjointSets;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("invalid maze size {0:?}, both dimensions must be positive")]
    InvalidSize(Dims),
    #[error("maze has no cells")]
    NoCells,
}

pub trait MazeGenerator: fmt::Debug {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Maze, GenError>;
}

/// What to generate. Same spec, same maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Size of the maze.
    pub size: Dims,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, picked at random when missing.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeSpec {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Dims(width, height),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fills in a random seed when there's none, so the result can be reproduced.
    pub fn seeded(self) -> Self {
        Self {
            seed: Some(self.seed.unwrap_or_else(|| thread_rng().gen())),
            ..self
        }
    }

    pub fn generate(&self) -> Result<Maze, GenError> {
        generate(self.size.0, self.size.1, self.seed)
    }
}

/// Generates a `width` x `height` maze with randomized Kruskal's.
pub fn generate(width: i32, height: i32, seed: Option<u64>) -> Result<Maze, GenError> {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    log::debug!("generating {}x{} maze, seed {}", width, height, seed);

    let mut rng = Random::seed_from_u64(seed);
    RndKruskals.generate(Dims(width, height), &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_deterministic() {
        let spec = MazeSpec::new(8, 5).with_seed(1234);
        let a = spec.generate().unwrap();
        let b = spec.generate().unwrap();

        assert_eq!(a.walls().len(), b.walls().len());
        for (x, y) in a.walls().iter().zip(b.walls()) {
            assert_eq!(x.ends(), y.ends());
            assert_eq!(x.weight(), y.weight());
        }
        for (x, y) in a.passages().iter().zip(b.passages()) {
            assert_eq!(x.ends(), y.ends());
        }
    }

    #[test]
    fn unseeded_generation_still_spans() {
        let maze = generate(5, 5, None).unwrap();
        assert_eq!(maze.passages().len(), 24);
    }

    #[test]
    fn seeded_keeps_an_explicit_seed() {
        assert_eq!(MazeSpec::new(2, 2).with_seed(5).seeded().seed, Some(5));
        assert!(MazeSpec::new(2, 2).seeded().seed.is_some());
    }

    #[test]
    fn invalid_size() {
        assert!(matches!(generate(0, 0, Some(1)), Err(GenError::InvalidSize(_))));
    }
}
