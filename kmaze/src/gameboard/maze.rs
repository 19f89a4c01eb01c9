use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::{
    algorithms::{rnd_kruskals, GenError},
    dims::Dims,
    gameboard::cell::{Direction, Wall},
};

/// Generated maze: every cell, every candidate wall and the spanning tree of passages.
#[derive(Debug, Clone)]
pub struct Maze {
    size: Dims,
    cells: Vec<Dims>,
    walls: Vec<Wall>,
    passages: Vec<Wall>,
    links: HashMap<Dims, SmallVec<[Dims; 4]>>,
    pub start: Dims,
    pub end: Dims,
}

impl Maze {
    /// Builds a maze out of externally supplied cells and walls.
    ///
    /// The spanning tree is computed from the wall weights. Start and end are `(0, 0)` and
    /// `(w - 1, h - 1)` when present in `cells`, the first cell otherwise.
    pub fn from_parts(size: Dims, cells: Vec<Dims>, walls: Vec<Wall>) -> Result<Self, GenError> {
        let passages = rnd_kruskals::kruskal(&cells, &walls);
        Self::assemble(size, cells, walls, passages)
    }

    pub(crate) fn assemble(
        size: Dims,
        cells: Vec<Dims>,
        walls: Vec<Wall>,
        passages: Vec<Wall>,
    ) -> Result<Self, GenError> {
        let start = Self::find_start(&cells).ok_or(GenError::NoCells)?;
        let end = Self::find_end(&cells, size).ok_or(GenError::NoCells)?;

        let mut links: HashMap<Dims, SmallVec<[Dims; 4]>> = HashMap::with_capacity(cells.len());
        for passage in &passages {
            let (a, b) = passage.ends();
            links.entry(a).or_default().push(b);
            links.entry(b).or_default().push(a);
        }

        Ok(Maze {
            size,
            cells,
            walls,
            passages,
            links,
            start,
            end,
        })
    }

    fn find_start(cells: &[Dims]) -> Option<Dims> {
        let first = *cells.first()?;
        Some(cells.iter().copied().find(|&c| c == Dims::ZERO).unwrap_or(first))
    }

    fn find_end(cells: &[Dims], size: Dims) -> Option<Dims> {
        let first = *cells.first()?;
        let corner = size - Dims::ONE;
        Some(cells.iter().copied().find(|&c| c == corner).unwrap_or(first))
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        pos.is_inside(self.size)
    }

    /// All cells, sorted row-major.
    pub fn cells(&self) -> &[Dims] {
        &self.cells
    }

    /// Every candidate wall between neighboring cells, in enumeration order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Walls knocked down by the spanning tree, in the order they were picked.
    pub fn passages(&self) -> &[Wall] {
        &self.passages
    }

    /// Walls that are still standing, i.e. everything that isn't a passage.
    pub fn closed_walls(&self) -> impl Iterator<Item = &Wall> + '_ {
        let open: HashSet<&Wall> = self.passages.iter().collect();
        self.walls.iter().filter(move |w| !open.contains(w))
    }

    /// Cells reachable from `cell` through a single passage.
    pub fn neighbors(&self, cell: Dims) -> &[Dims] {
        self.links.get(&cell).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn is_passage(&self, a: Dims, b: Dims) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn is_open(&self, cell: Dims, dir: Direction) -> bool {
        self.is_passage(cell, cell + dir.to_coord())
    }

    /// Where a single step by `off` from `cell` lands.
    ///
    /// Returns the neighbor when the step stays inside the grid and crosses a passage,
    /// `cell` itself otherwise.
    pub fn next_cell(&self, cell: Dims, off: Dims) -> Dims {
        let next = cell + off;
        if !self.is_in_bounds(next) {
            return cell;
        }

        if self.is_passage(cell, next) {
            next
        } else {
            cell
        }
    }

    /// 3x3 maze whose only route from start to end is (0,0) (1,0) (1,1) (2,1) (2,2).
    #[cfg(test)]
    pub(crate) fn example_3x3() -> Maze {
        let w = |a: (i32, i32), b: (i32, i32), weight| Wall::new(a.into(), b.into(), weight);
        let walls = vec![
            w((0, 0), (1, 0), 0),
            w((1, 0), (1, 1), 0),
            w((1, 1), (2, 1), 0),
            w((2, 1), (2, 2), 0),
            w((0, 0), (0, 1), 1),
            w((0, 1), (0, 2), 1),
            w((0, 2), (1, 2), 1),
            w((1, 0), (2, 0), 1),
            // heavier ones would close cycles
            w((0, 1), (1, 1), 5),
            w((1, 1), (1, 2), 5),
            w((2, 0), (2, 1), 5),
            w((1, 2), (2, 2), 5),
        ];
        let cells = Dims::iter_fill(Dims::ZERO, Dims(3, 3)).collect();
        Maze::from_parts(Dims(3, 3), cells, walls).expect("example maze has cells")
    }
}
