use hashbrown::HashSet;
use thiserror::Error;

use crate::{
    algorithms::{
        generate,
        search::{Search, SearchMode, Step},
        GenError, MazeSpec,
    },
    dims::Dims,
    gameboard::{Direction, Maze},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already running")]
    AlreadyRunning,
    #[error("game is not running in this mode")]
    NotRunning,
    #[error("{0:?} is not a single step in a cardinal direction")]
    InvalidOffset(Dims),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunningGameState {
    /// Maze is ready, nothing was chosen yet.
    Idle,
    /// Automatic search is running, driven by [`RunningGame::advance`].
    Searching,
    /// Player is moved by hand, see [`RunningGame::move_player`].
    Manual,
    /// End was reached, by search or by hand.
    Solved,
}

/// One session over a maze: either an automatic search or a player walking it by hand.
///
/// Everything is driven from outside, one call per tick or key press. Callers only read
/// the state in between.
#[derive(Debug)]
pub struct RunningGame {
    maze: Maze,
    state: RunningGameState,
    search: Option<Search>,
    player_pos: Dims,
    trail: Vec<Dims>,
    trail_seen: HashSet<Dims>,
    moves: Vec<(Dims, Direction)>,
}

impl RunningGame {
    pub fn new(maze: Maze) -> Self {
        Self {
            player_pos: maze.start,
            maze,
            state: RunningGameState::Idle,
            search: None,
            trail: Vec::new(),
            trail_seen: HashSet::new(),
            moves: Vec::new(),
        }
    }

    pub fn generate(spec: MazeSpec) -> Result<Self, GenError> {
        Ok(Self::new(spec.generate()?))
    }

    pub fn get_state(&self) -> RunningGameState {
        self.state
    }

    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    pub fn get_player_pos(&self) -> Dims {
        self.player_pos
    }

    pub fn get_start_pos(&self) -> Dims {
        self.maze.start
    }

    pub fn get_goal_pos(&self) -> Dims {
        self.maze.end
    }

    pub fn get_moves(&self) -> &[(Dims, Direction)] {
        &self.moves
    }

    pub fn get_move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn get_search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.state == RunningGameState::Solved
    }

    /// Cells visited so far, by the search or by the player, in visiting order.
    pub fn visited(&self) -> &[Dims] {
        match &self.search {
            Some(search) => search.visited(),
            None => &self.trail,
        }
    }

    /// Path from end back to start found by the search. Empty until solved.
    pub fn solution(&self) -> &[Dims] {
        self.search.as_ref().map(|s| s.path()).unwrap_or(&[])
    }

    pub fn begin_search(&mut self, mode: SearchMode) -> Result<(), GameError> {
        self.check_idle()?;

        log::debug!("starting {:?} search", mode);
        self.search = Some(Search::new(mode, self.maze.start));
        self.state = RunningGameState::Searching;
        Ok(())
    }

    pub fn start_manual(&mut self) -> Result<(), GameError> {
        self.check_idle()?;

        self.state = RunningGameState::Manual;
        Ok(())
    }

    /// Advances the running search by one cell.
    pub fn advance(&mut self) -> Result<Step, GameError> {
        match (self.state, self.search.as_mut()) {
            (RunningGameState::Solved, _) => Ok(Step::Solved),
            (RunningGameState::Searching, Some(search)) => {
                let step = search.step(&self.maze);
                if step == Step::Solved {
                    self.state = RunningGameState::Solved;
                }
                Ok(step)
            }
            _ => Err(GameError::NotRunning),
        }
    }

    /// Moves the player by `(dx, dy)` if there's a passage that way. Returns where the player
    /// ends up, which is the old position when the move is blocked.
    pub fn move_player(&mut self, dx: i32, dy: i32) -> Result<Dims, GameError> {
        self.check_manual()?;

        let off = Dims(dx, dy);
        let dir = Direction::from_coord(off).ok_or(GameError::InvalidOffset(off))?;

        if self.trail_seen.insert(self.player_pos) {
            self.trail.push(self.player_pos);
        }

        let next = self.maze.next_cell(self.player_pos, off);
        if next != self.player_pos {
            self.moves.push((self.player_pos, dir));
            self.player_pos = next;
        }

        if self.player_pos == self.maze.end {
            log::debug!("player reached the end in {} moves", self.moves.len());
            self.state = RunningGameState::Solved;
        }

        Ok(self.player_pos)
    }

    pub fn move_player_dir(&mut self, dir: Direction) -> Result<Dims, GameError> {
        let Dims(dx, dy) = dir.to_coord();
        self.move_player(dx, dy)
    }

    pub fn check_idle(&self) -> Result<(), GameError> {
        match self.state {
            RunningGameState::Idle => Ok(()),
            _ => Err(GameError::AlreadyRunning),
        }
    }

    pub fn check_manual(&self) -> Result<(), GameError> {
        match self.state {
            RunningGameState::Manual => Ok(()),
            _ => Err(GameError::NotRunning),
        }
    }

    /// Back to idle on the same maze.
    pub fn reset(&mut self) {
        self.state = RunningGameState::Idle;
        self.search = None;
        self.player_pos = self.maze.start;
        self.trail.clear();
        self.trail_seen.clear();
        self.moves.clear();
    }

    /// Replaces the maze with a freshly generated one of the same size.
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<(), GenError> {
        let Dims(w, h) = self.maze.size();
        self.maze = generate(w, h, seed)?;
        self.reset();
        Ok(())
    }
}
