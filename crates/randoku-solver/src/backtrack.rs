use randoku_core::{Grid, Position, candidates::candidates_at};

use crate::SolverError;

/// Solves the grid by depth-first search with retraction.
///
/// Cells are filled in the same column-major order the random-fill pass
/// uses, digits tried in ascending order, so the result is deterministic.
/// On failure every trial assignment has been retracted and the grid is
/// unchanged.
pub(crate) fn solve(grid: &mut Grid) -> Result<(), SolverError> {
    if fill_from(grid, 0) {
        Ok(())
    } else {
        Err(SolverError::NoSolution)
    }
}

fn fill_from(grid: &mut Grid, start: u8) -> bool {
    let Some((pos, next)) = next_empty(grid, start) else {
        return true;
    };
    for digit in candidates_at(grid, pos) {
        grid.set(pos, Some(digit));
        if fill_from(grid, next) {
            return true;
        }
    }
    grid.set(pos, None);
    false
}

/// Returns the first empty cell at or after the column-major scan index
/// `start`, along with the index to resume from.
fn next_empty(grid: &Grid, start: u8) -> Option<(Position, u8)> {
    for i in start..81 {
        let pos = Position::new(i / 9, i % 9);
        if grid.get(pos).is_none() {
            return Some((pos, i + 1));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use randoku_core::validate::grid_is_valid;

    use super::*;

    #[test]
    fn test_next_empty_scans_column_major() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Some(randoku_core::Digit::D1));
        // (0, 1) is the next cell in column-major order, not (1, 0).
        let (pos, next) = next_empty(&grid, 0).unwrap();
        assert_eq!(pos, Position::new(0, 1));
        assert_eq!(next, 2);
    }

    #[test]
    fn test_solve_is_deterministic() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        solve(&mut a).unwrap();
        solve(&mut b).unwrap();
        assert_eq!(a, b);
        assert!(grid_is_valid(&a));
    }

    #[test]
    fn test_failure_leaves_grid_unchanged() {
        let mut rows = [[0u8; 9]; 9];
        rows[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        rows[1][8] = 9;
        let mut grid = Grid::from_rows(&rows).unwrap();
        let before = grid.clone();

        assert_eq!(solve(&mut grid), Err(SolverError::NoSolution));
        assert_eq!(grid, before);
    }
}
