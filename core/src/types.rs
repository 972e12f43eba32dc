use ndarray::Array2;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for disc counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Row/column offset of a single step along a ray.
pub type Direction = (isize, isize);

/// Side length of the square board.
pub const BOARD_SIZE: Coord = 8;

/// Number of cells on the board.
pub const TOTAL_CELLS: CellCount = mult(BOARD_SIZE, BOARD_SIZE);

/// The eight compass directions, clockwise starting from north.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
pub(crate) fn apply_delta(coords: Coord2, delta: Direction, bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

pub trait RayIterExt {
    fn iter_ray(&self, origin: Coord2, direction: Direction) -> RayIter;
}

impl<T> RayIterExt for Array2<T> {
    fn iter_ray(&self, origin: Coord2, direction: Direction) -> RayIter {
        let dim = self.dim();
        let bounds = (
            dim.0.try_into().unwrap_or(Coord::MAX),
            dim.1.try_into().unwrap_or(Coord::MAX),
        );
        RayIter::new(origin, direction, bounds)
    }
}

/// Walks away from `origin` one step at a time, stopping at the board edge.
///
/// The origin itself is never yielded.
#[derive(Debug, Clone)]
pub struct RayIter {
    cursor: Option<Coord2>,
    direction: Direction,
    bounds: Coord2,
}

impl RayIter {
    fn new(origin: Coord2, direction: Direction, bounds: Coord2) -> Self {
        Self {
            cursor: Some(origin),
            direction,
            bounds,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let next_item = apply_delta(self.cursor?, self.direction, self.bounds);
        self.cursor = next_item;
        next_item
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const BOUNDS: Coord2 = (BOARD_SIZE, BOARD_SIZE);

    #[test]
    fn apply_delta_rejects_steps_off_every_edge() {
        assert_eq!(apply_delta((0, 3), (-1, 0), BOUNDS), None);
        assert_eq!(apply_delta((7, 3), (1, 0), BOUNDS), None);
        assert_eq!(apply_delta((3, 0), (0, -1), BOUNDS), None);
        assert_eq!(apply_delta((3, 7), (0, 1), BOUNDS), None);
        assert_eq!(apply_delta((3, 3), (1, -1), BOUNDS), Some((4, 2)));
    }

    #[test]
    fn ray_does_not_wrap_across_the_edge() {
        let grid: Array2<u8> = Array2::default([8, 8]);

        let east: Vec<_> = grid.iter_ray((2, 5), (0, 1)).collect();
        assert_eq!(east, [(2, 6), (2, 7)]);

        let north_west: Vec<_> = grid.iter_ray((2, 5), (-1, -1)).collect();
        assert_eq!(north_west, [(1, 4), (0, 3)]);
    }

    #[test]
    fn ray_from_corner_towards_edge_is_empty() {
        let grid: Array2<u8> = Array2::default([8, 8]);
        assert_eq!(grid.iter_ray((0, 0), (-1, 1)).count(), 0);
        assert_eq!(grid.iter_ray((0, 0), (1, 1)).count(), 7);
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1);
            assert!(DIRECTIONS[i + 1..].iter().all(|b| b != a));
        }
    }
}
