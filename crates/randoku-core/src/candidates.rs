//! Per-cell legal-value computation.

use crate::{digit_set::DigitSet, grid::Grid, house::House, position::Position};

/// Returns the digits that can legally be placed at `pos`.
///
/// Starts from the full set 1-9 and removes every digit already present in
/// `pos`'s row, column, or containing 3×3 box. The result has no defined
/// selection policy of its own; iteration is in ascending digit order, and
/// callers that want a different policy impose it themselves.
///
/// The result may be [`DigitSet::EMPTY`] when no legal digit remains under
/// the current partial assignment. That is a valid outcome, not an error,
/// and callers must handle it explicitly.
///
/// Querying an occupied cell is well-defined: the cell's own digit is seen
/// by the row/column/box scans like any other occupied cell, so it is
/// excluded from its own candidate set. Callers should only query empty
/// cells for a meaningful result.
///
/// # Examples
///
/// ```
/// use randoku_core::{Digit, DigitSet, Grid, Position, candidates::candidates_at};
///
/// let grid = Grid::new();
/// assert_eq!(candidates_at(&grid, Position::new(0, 0)), DigitSet::FULL);
/// ```
#[must_use]
pub fn candidates_at(grid: &Grid, pos: Position) -> DigitSet {
    let mut seen = DigitSet::new();
    for house in House::containing(pos) {
        for peer in house.positions() {
            if let Some(digit) = grid.get(peer) {
                seen.insert(digit);
            }
        }
    }
    DigitSet::FULL.difference(seen)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::digit::Digit;

    use super::*;

    fn grid_with_first_row() -> Grid {
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_empty_grid_has_all_candidates_everywhere() {
        let grid = Grid::new();
        for pos in Position::ALL {
            assert_eq!(candidates_at(&grid, pos), DigitSet::FULL);
        }
    }

    #[test]
    fn test_column_conflict_excludes_digit() {
        // Row 0 holds 1-9; the cell below (0, 0) loses 1 to the column and
        // 2, 3 to the box, keeping 4-9.
        let grid = grid_with_first_row();
        let set = candidates_at(&grid, Position::new(0, 1));
        assert!(!set.contains(Digit::D1));
        assert!(!set.contains(Digit::D2));
        assert!(!set.contains(Digit::D3));
        assert!(set.contains(Digit::D4));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_occupied_cell_in_full_row_has_empty_set() {
        // (1, 0) holds 2, but the row scan alone already removes all nine
        // digits, so the set is empty. Occupied-cell queries are
        // well-defined even though callers never need them.
        let grid = grid_with_first_row();
        assert_eq!(candidates_at(&grid, Position::new(1, 0)), DigitSet::EMPTY);
    }

    #[test]
    fn test_empty_set_is_a_value_not_an_error() {
        // Fill row 0 with 1-8 and put 9 below the last cell; (8, 0) then
        // has no legal candidate.
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        rows[1][8] = 9;
        let grid = Grid::from_rows(&rows).unwrap();
        let set = candidates_at(&grid, Position::new(8, 0));
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    proptest! {
        #[test]
        fn prop_candidates_disjoint_from_peers(
            placements in proptest::collection::vec(
                (0u8..9, 0u8..9, 1u8..=9),
                0..40,
            ),
        ) {
            let mut grid = Grid::new();
            for (x, y, value) in placements {
                grid.set(Position::new(x, y), Digit::try_from_value(value));
            }

            for pos in Position::ALL {
                let set = candidates_at(&grid, pos);
                for house in House::containing(pos) {
                    for peer in house.positions() {
                        if let Some(digit) = grid.get(peer) {
                            prop_assert!(
                                !set.contains(digit),
                                "candidate {digit} at {pos:?} conflicts with {peer:?}",
                            );
                        }
                    }
                }
            }
        }
    }
}
