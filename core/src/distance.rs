use crate::*;

/// Manhattan distance between two board positions.
pub const fn manhattan_distance((x, y): Coord2, (cx, cy): Coord2) -> u32 {
    (x.abs_diff(cx) as u32) + (y.abs_diff(cy) as u32)
}

/// Reference point of the distance field, the geometric centre of the board.
pub const fn board_center(length: Coord) -> Coord2 {
    (length / 2, length / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        assert_eq!(manhattan_distance((2, 2), (2, 2)), 0);
        assert_eq!(manhattan_distance((0, 4), (3, 1)), 6);
        assert_eq!(manhattan_distance((3, 1), (0, 4)), 6);
    }

    #[test]
    fn center_uses_integer_division() {
        assert_eq!(board_center(5), (2, 2));
        assert_eq!(board_center(4), (2, 2));
        assert_eq!(board_center(1), (0, 0));
    }
}
