pub mod logging;
pub mod renderer;
pub mod settings;

use std::path::PathBuf;

use kmaze::{Direction, GameError, GenError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generation(#[from] GenError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid maze spec in {path:?}: {source}")]
    Spec {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unknown move '{0}', expected one of U D L R")]
    UnknownMove(char),
}

/// Parses a move list like `"RRdd"` into directions. Whitespace is skipped.
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>, Error> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_uppercase() {
            'U' | 'N' => Ok(Direction::North),
            'D' | 'S' => Ok(Direction::South),
            'R' | 'E' => Ok(Direction::East),
            'L' | 'W' => Ok(Direction::West),
            _ => Err(Error::UnknownMove(c)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves() {
        assert_eq!(
            parse_moves("Rd l U").unwrap(),
            vec![
                Direction::East,
                Direction::South,
                Direction::West,
                Direction::North
            ]
        );
        assert!(matches!(parse_moves("RX"), Err(Error::UnknownMove('X'))));
    }
}
