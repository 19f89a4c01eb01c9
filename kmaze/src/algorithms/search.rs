use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::{
    dims::Dims,
    frontier::{Frontier, Queue, Stack},
    gameboard::Maze,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    BreadthFirst,
    DepthFirst,
}

impl SearchMode {
    pub fn frontier(self) -> Box<dyn Frontier<Dims>> {
        match self {
            SearchMode::BreadthFirst => Box::new(Queue::new()),
            SearchMode::DepthFirst => Box::new(Stack::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Solved,
}

/// Incremental search from the start of a maze to its end.
///
/// Each [`Search::step`] takes one cell off the frontier, so the search can be advanced one
/// tick at a time and inspected in between.
#[derive(Debug)]
pub struct Search {
    mode: SearchMode,
    frontier: Box<dyn Frontier<Dims>>,
    visited: Vec<Dims>,
    seen: HashSet<Dims>,
    came_from: HashMap<Dims, Dims>,
    path: Vec<Dims>,
    solved: bool,
}

impl Search {
    pub fn new(mode: SearchMode, start: Dims) -> Self {
        let mut frontier = mode.frontier();
        frontier.add(start);

        Self {
            mode,
            frontier,
            visited: Vec::new(),
            seen: HashSet::new(),
            came_from: HashMap::new(),
            path: Vec::new(),
            solved: false,
        }
    }

    pub fn step(&mut self, maze: &Maze) -> Step {
        if self.solved {
            return Step::Solved;
        }

        if self.frontier.is_empty() {
            log::warn!("search frontier is empty, end was never reached");
            return Step::Continue;
        }

        let cell = match self.frontier.remove() {
            Ok(cell) => cell,
            Err(_) => return Step::Continue,
        };

        if self.seen.contains(&cell) {
            return Step::Continue;
        }

        self.mark_visited(cell);

        if cell == maze.end {
            self.build_path(maze.start, maze.end);
            self.solved = true;
            log::debug!(
                "{:?} search solved after visiting {} cells, path length {}",
                self.mode,
                self.visited.len(),
                self.path.len()
            );
            return Step::Solved;
        }

        for &next in maze.neighbors(cell) {
            self.frontier.add(next);
            self.came_from.entry(next).or_insert(cell);
        }
        log::trace!("visited {:?}, frontier has {}", cell, self.frontier.len());

        Step::Continue
    }

    /// Steps until solved or out of cells. Returns the number of steps taken.
    pub fn run(&mut self, maze: &Maze) -> usize {
        let mut steps = 0;
        while !self.solved && !self.frontier.is_empty() {
            self.step(maze);
            steps += 1;
        }
        steps
    }

    fn mark_visited(&mut self, cell: Dims) {
        if self.seen.insert(cell) {
            self.visited.push(cell);
        }
    }

    // Walks the parent links from `end` back to `start`.
    fn build_path(&mut self, start: Dims, end: Dims) {
        self.path.clear();

        let mut current = end;
        while current != start {
            self.path.push(current);
            match self.came_from.get(&current) {
                Some(&parent) => current = parent,
                None => {
                    log::warn!("no parent recorded for {:?}, path is incomplete", current);
                    return;
                }
            }
        }
        self.path.push(start);
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Visited cells in the order they were processed.
    pub fn visited(&self) -> &[Dims] {
        &self.visited
    }

    pub fn is_visited(&self, cell: Dims) -> bool {
        self.seen.contains(&cell)
    }

    /// Path from end back to start, empty until solved.
    pub fn path(&self) -> &[Dims] {
        &self.path
    }

    /// The cell that first discovered `cell`.
    pub fn parent(&self, cell: Dims) -> Option<Dims> {
        self.came_from.get(&cell).copied()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
