use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Position on the maze grid, `Dims(x, y)`.
///
/// Also used for sizes and for single-step offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates over all positions in `[from, to)` in row-major order.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn manhattan(self, other: Dims) -> i32 {
        (self - other).abs_sum()
    }

    /// Whether `self` lies in `[0, size.0) x [0, size.1)`.
    pub fn is_inside(self, size: Dims) -> bool {
        self.all_non_negative() && self.0 < size.0 && self.1 < size.1
    }

    /// Orders by row first, then by column.
    pub fn row_major_cmp(&self, other: &Dims) -> Ordering {
        self.1.cmp(&other.1).then(self.0.cmp(&other.0))
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_order() {
        let mut cells = vec![Dims(1, 1), Dims(0, 1), Dims(2, 0), Dims(0, 0)];
        cells.sort_by(Dims::row_major_cmp);
        assert_eq!(cells, vec![Dims(0, 0), Dims(2, 0), Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(cells, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn inside() {
        let size = Dims(3, 2);
        assert!(Dims(0, 0).is_inside(size));
        assert!(Dims(2, 1).is_inside(size));
        assert!(!Dims(3, 1).is_inside(size));
        assert!(!Dims(-1, 0).is_inside(size));
        assert!(!Dims(0, 2).is_inside(size));
    }
}
