use hashbrown::HashSet;
use rand::Rng as _;

use super::{union_find::DisjointSets, GenError, MazeGenerator, Random};
use crate::{
    dims::Dims,
    gameboard::{Direction, Maze, Wall},
};

/// Randomized Kruskal's: random weights on every wall, then a minimum spanning tree.
#[derive(Debug, Default)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Maze, GenError> {
        if !size.all_positive() {
            return Err(GenError::InvalidSize(size));
        }

        let walls = enumerate_walls(size, rng);

        // a 1x1 grid has no walls, so its only cell has to come from the grid itself
        let mut cells = cells_of(&walls);
        if cells.len() < size.product() as usize {
            let known: HashSet<_> = cells.iter().copied().collect();
            cells.extend(Dims::iter_fill(Dims::ZERO, size).filter(|c| !known.contains(c)));
            cells.sort_by(Dims::row_major_cmp);
        }

        let passages = kruskal(&cells, &walls);
        log::debug!(
            "generated {}x{} maze: {} cells, {} walls, {} passages",
            size.0,
            size.1,
            cells.len(),
            walls.len(),
            passages.len()
        );

        Maze::assemble(size, cells, walls, passages)
    }
}

/// One wall per pair of neighboring cells, each with a random weight in `[0, w * h)`.
///
/// Cells are visited row by row and their neighbors north, south, east, west. A weight is
/// drawn for every neighbor, including the ones whose wall was already added from the
/// other side, so the same seed always yields the same weights.
pub fn enumerate_walls(size: Dims, rng: &mut Random) -> Vec<Wall> {
    let area = size.product().max(1) as u32;
    let Dims(w, h) = size;

    let mut walls = Vec::with_capacity((h * (w - 1) + w * (h - 1)).max(0) as usize);
    let mut seen = HashSet::with_capacity(walls.capacity());

    for cell in Dims::iter_fill(Dims::ZERO, size) {
        for dir in Direction::get_in_order() {
            let neighbor = cell + dir.to_coord();
            if !neighbor.is_inside(size) {
                continue;
            }

            let wall = Wall::new(cell, neighbor, rng.gen_range(0..area));
            if seen.insert(wall) {
                walls.push(wall);
            }
        }
    }

    walls
}

/// Distinct endpoints of `walls`, sorted row-major.
pub fn cells_of(walls: &[Wall]) -> Vec<Dims> {
    let mut seen = HashSet::new();
    let mut cells: Vec<_> = walls
        .iter()
        .flat_map(|w| [w.to(), w.from()])
        .filter(|&c| seen.insert(c))
        .collect();
    cells.sort_by(Dims::row_major_cmp);
    cells
}

/// Minimum spanning tree over `cells`.
///
/// Walls are taken lightest first; equal weights keep their order in `walls`. Stops once
/// the tree has `cells.len() - 1` passages, or when the walls run out.
pub fn kruskal(cells: &[Dims], walls: &[Wall]) -> Vec<Wall> {
    let target = cells.len().saturating_sub(1);

    let mut worklist = walls.to_vec();
    worklist.sort_by_key(|w| w.weight());

    let mut sets = DisjointSets::make_sets(cells);
    let mut tree = Vec::with_capacity(target);

    for wall in worklist {
        if tree.len() >= target {
            break;
        }

        let (from, to) = wall.ends();
        if sets.connected(from, to) {
            continue;
        }

        sets.union(to, from);
        tree.push(wall);
    }

    if tree.len() < target {
        log::warn!(
            "walls don't connect all cells, spanning forest has {} of {} passages",
            tree.len(),
            target
        );
    }

    tree
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    fn rng(seed: u64) -> Random {
        Random::seed_from_u64(seed)
    }

    fn is_spanning_tree(maze: &Maze) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![maze.start];
        let mut steps = 0;
        while let Some(cell) = stack.pop() {
            if !seen.insert(cell) {
                // reached twice means a cycle
                return false;
            }
            steps += 1;
            for &next in maze.neighbors(cell) {
                if !seen.contains(&next) {
                    stack.push(next);
                }
            }
        }
        steps == maze.cells().len()
    }

    #[test]
    fn wall_count_and_adjacency() {
        let size = Dims(4, 3);
        let walls = enumerate_walls(size, &mut rng(1));
        assert_eq!(walls.len(), (3 * 3 + 4 * 2) as usize);

        let unique: HashSet<_> = walls.iter().collect();
        assert_eq!(unique.len(), walls.len());

        for wall in &walls {
            assert!(wall.is_adjacent());
            assert!(wall.from().is_inside(size));
            assert!(wall.to().is_inside(size));
            assert!(wall.weight() < 12);
        }
    }

    #[test]
    fn cells_are_row_major() {
        let walls = enumerate_walls(Dims(3, 2), &mut rng(2));
        assert_eq!(
            cells_of(&walls),
            Dims::iter_fill(Dims::ZERO, Dims(3, 2)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn tree_spans_every_size() {
        for w in 1..=6 {
            for h in 1..=6 {
                let maze = RndKruskals.generate(Dims(w, h), &mut rng(42)).unwrap();
                assert_eq!(maze.cells().len(), (w * h) as usize);
                assert_eq!(maze.passages().len(), (w * h - 1) as usize);
                assert!(is_spanning_tree(&maze), "{}x{} is not a tree", w, h);
                assert_eq!(maze.start, Dims(0, 0));
                assert_eq!(maze.end, Dims(w - 1, h - 1));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = RndKruskals.generate(Dims(10, 7), &mut rng(7)).unwrap();
        let b = RndKruskals.generate(Dims(10, 7), &mut rng(7)).unwrap();

        let ends = |m: &Maze| m.passages().iter().map(|p| p.ends()).collect::<Vec<_>>();
        assert_eq!(ends(&a), ends(&b));
    }

    #[test]
    fn invalid_size() {
        assert!(matches!(
            RndKruskals.generate(Dims(0, 3), &mut rng(0)),
            Err(GenError::InvalidSize(Dims(0, 3)))
        ));
        assert!(matches!(
            RndKruskals.generate(Dims(3, -1), &mut rng(0)),
            Err(GenError::InvalidSize(_))
        ));
    }

    #[test]
    fn kruskal_prefers_light_walls_and_keeps_tie_order() {
        let cells = vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)];
        let walls = vec![
            Wall::new(Dims(0, 0), Dims(1, 0), 5),
            Wall::new(Dims(0, 0), Dims(0, 1), 1),
            Wall::new(Dims(1, 0), Dims(1, 1), 1),
            Wall::new(Dims(0, 1), Dims(1, 1), 1),
        ];

        let tree = kruskal(&cells, &walls);
        assert_eq!(tree, walls[1..].to_vec());
    }

    #[test]
    fn kruskal_skips_cycles() {
        let cells = vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)];
        let walls = vec![
            Wall::new(Dims(0, 0), Dims(1, 0), 0),
            Wall::new(Dims(1, 0), Dims(1, 1), 1),
            Wall::new(Dims(1, 1), Dims(0, 1), 2),
            Wall::new(Dims(0, 1), Dims(0, 0), 3),
        ];

        let tree = kruskal(&cells, &walls);
        assert_eq!(tree.len(), 3);
        assert!(!tree.contains(&walls[3]));
    }

    #[test]
    fn large_grid_generates_quickly() {
        let start = std::time::Instant::now();
        let maze = RndKruskals.generate(Dims(300, 300), &mut rng(1)).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(maze.passages().len(), 300 * 300 - 1);
        assert!(is_spanning_tree(&maze));
        assert!(elapsed.as_secs() < 20, "300x300 took {:?}", elapsed);
    }

    #[test]
    fn kruskal_disconnected_walls() {
        let cells = vec![Dims(0, 0), Dims(1, 0), Dims(5, 5)];
        let walls = vec![Wall::new(Dims(0, 0), Dims(1, 0), 0)];
        assert_eq!(kruskal(&cells, &walls).len(), 1);
    }
}
