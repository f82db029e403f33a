//! Validity checks for completed rows, columns, and boxes.
//!
//! These checks report validity only for a *completely filled* house: a
//! house containing any empty cell always reports invalid, since it cannot
//! hold exactly the digits 1-9. They are a detection tool for completed
//! puzzles, not a pruning mechanism; the fill engine never consults them.

use crate::{digit_set::DigitSet, grid::Grid, house::House, position::Position};

/// Returns `true` iff the nine cells of `house` hold exactly the digits 1-9.
///
/// All nine cells are collected before comparison. An empty cell or a
/// duplicate digit both leave the collected set short of
/// [`DigitSet::FULL`], so either makes the house invalid.
#[must_use]
pub fn house_is_valid(grid: &Grid, house: House) -> bool {
    let mut seen = DigitSet::new();
    for pos in house.positions() {
        match grid.get(pos) {
            Some(digit) => seen.insert(digit),
            None => return false,
        }
    }
    seen == DigitSet::FULL
}

/// Returns `true` iff row `y` holds exactly the digits 1-9.
#[must_use]
pub fn row_is_valid(grid: &Grid, y: u8) -> bool {
    house_is_valid(grid, House::Row { y })
}

/// Returns `true` iff column `x` holds exactly the digits 1-9.
#[must_use]
pub fn col_is_valid(grid: &Grid, x: u8) -> bool {
    house_is_valid(grid, House::Column { x })
}

/// Returns `true` iff the 3×3 box containing `pos` holds exactly the digits
/// 1-9.
#[must_use]
pub fn box_is_valid(grid: &Grid, pos: Position) -> bool {
    house_is_valid(
        grid,
        House::Box {
            index: pos.box_index(),
        },
    )
}

/// Returns `true` iff every row, column, and box of `grid` is valid.
#[must_use]
pub fn grid_is_valid(grid: &Grid) -> bool {
    House::ALL.iter().all(|&house| house_is_valid(grid, house))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A valid solved grid (shifted Latin square respecting boxes).
    fn solved_grid() -> Grid {
        let mut rows = [[0u8; 9]; 9];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                // Row y is 1-9 rotated by 3*y + y/3 places.
                let shift = (y % 3) * 3 + y / 3;
                #[expect(clippy::cast_possible_truncation)]
                {
                    *cell = ((x + shift) % 9 + 1) as u8;
                }
            }
        }
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_solved_grid_is_fully_valid() {
        let grid = solved_grid();
        for i in 0..9 {
            assert!(row_is_valid(&grid, i), "row {i}");
            assert!(col_is_valid(&grid, i), "column {i}");
        }
        for pos in Position::ALL {
            assert!(box_is_valid(&grid, pos));
        }
        assert!(grid_is_valid(&grid));
    }

    #[test]
    fn test_duplicate_in_row_invalidates_row() {
        let mut grid = solved_grid();
        let existing = grid.get(Position::new(0, 4));
        grid.set(Position::new(8, 4), existing);
        assert!(!row_is_valid(&grid, 4));
        assert!(!grid_is_valid(&grid));
    }

    #[test]
    fn test_partial_house_is_invalid() {
        let mut grid = solved_grid();
        grid.set(Position::new(3, 3), None);
        assert!(!row_is_valid(&grid, 3));
        assert!(!col_is_valid(&grid, 3));
        assert!(!box_is_valid(&grid, Position::new(3, 3)));
    }

    #[test]
    fn test_box_check_collects_all_nine_cells() {
        // A box whose first cell is fine but whose last cell duplicates a
        // digit must be rejected; the check cannot stop at a representative
        // cell.
        let mut grid = solved_grid();
        let first = grid.get(Position::new(0, 0));
        grid.set(Position::new(2, 2), first);
        assert!(!box_is_valid(&grid, Position::new(1, 1)));

        // And a box with a duplicate hidden mid-iteration.
        let mut grid = solved_grid();
        let center = grid.get(Position::new(4, 4));
        grid.set(Position::new(5, 5), center);
        assert!(!box_is_valid(&grid, Position::new(3, 3)));
    }

    #[test]
    fn test_empty_grid_is_invalid_everywhere() {
        let grid = Grid::new();
        for i in 0..9 {
            assert!(!row_is_valid(&grid, i));
            assert!(!col_is_valid(&grid, i));
        }
        assert!(!grid_is_valid(&grid));
    }
}
