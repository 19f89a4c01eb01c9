use hashbrown::HashMap;

use crate::dims::Dims;

/// Disjoint sets of cells, each cell mapped to its parent. A cell mapped to itself is the
/// representative of its set.
///
/// Only lives for the duration of a single spanning tree computation.
#[derive(Debug, Clone, Default)]
pub struct DisjointSets {
    parents: HashMap<Dims, Dims>,
}

impl DisjointSets {
    /// Every cell starts in its own set.
    pub fn make_sets(cells: &[Dims]) -> Self {
        Self {
            parents: cells.iter().map(|&c| (c, c)).collect(),
        }
    }

    /// Representative of the set containing `cell`.
    ///
    /// Cells that were never added are treated as their own singleton set. Every cell on the
    /// walked path is pointed at its grandparent, which halves the path for the next lookup
    /// without changing any representative.
    pub fn find(&mut self, cell: Dims) -> Dims {
        let mut current = cell;
        loop {
            let parent = match self.parents.get(&current) {
                Some(&parent) if parent != current => parent,
                _ => return current,
            };
            let grandparent = self.parents.get(&parent).copied().unwrap_or(parent);
            if grandparent != parent {
                self.parents.insert(current, grandparent);
            }
            current = grandparent;
        }
    }

    /// Points the representative of `a`'s set at the representative of `b`'s set.
    pub fn union(&mut self, a: Dims, b: Dims) {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a != root_b {
            self.parents.insert(root_a, root_b);
        }
    }

    pub fn connected(&mut self, a: Dims, b: Dims) -> bool {
        self.find(a) == self.find(b)
    }
}
