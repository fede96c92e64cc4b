/// Single coordinate axis used for board length and positions.
pub type Coord = u16;

/// Count type used for activated and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

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

/// Converts signed coordinates into a board position, returning a value only when it is in bounds.
pub fn checked_coords((x, y): (i32, i32), length: Coord) -> Option<Coord2> {
    let x = Coord::try_from(x).ok()?;
    let y = Coord::try_from(y).ok()?;
    (x < length && y < length).then_some((x, y))
}

/// Spread order of the flood fill: `+x`, `-x`, `+y`, `-y`.
pub const SPREAD_ORDER: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// In-bounds orthogonal neighbours of a tile, yielded in [`SPREAD_ORDER`].
pub fn orthogonal_neighbors(
    (x, y): Coord2,
    length: Coord,
) -> impl DoubleEndedIterator<Item = Coord2> {
    SPREAD_ORDER.into_iter().filter_map(move |(dx, dy)| {
        checked_coords((i32::from(x) + dx, i32::from(y) + dy), length)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_neighbors_in_spread_order() {
        let neighbors: Vec<_> = orthogonal_neighbors((0, 0), 3).collect();
        assert_eq!(neighbors, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn interior_has_four_neighbors_in_spread_order() {
        let neighbors: Vec<_> = orthogonal_neighbors((1, 1), 3).collect();
        assert_eq!(neighbors, vec![(2, 1), (0, 1), (1, 2), (1, 0)]);
    }

    #[test]
    fn reversed_neighbors_pop_in_spread_order() {
        let mut stack: Vec<_> = orthogonal_neighbors((2, 0), 3).rev().collect();
        assert_eq!(stack.pop(), Some((1, 0)));
        assert_eq!(stack.pop(), Some((2, 1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn checked_coords_rejects_negative_and_overflow() {
        assert_eq!(checked_coords((-1, 0), 5), None);
        assert_eq!(checked_coords((0, 5), 5), None);
        assert_eq!(checked_coords((4, 4), 5), Some((4, 4)));
    }
}
