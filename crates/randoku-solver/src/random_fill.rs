use rand::{Rng, RngExt as _};

use randoku_core::{Grid, Position, candidates::candidates_at};

/// Runs one scan-and-assign pass over the grid.
///
/// Cells are visited column-major (outer loop over columns 0-8, inner loop
/// over rows 0-8), the traversal order of the original engine. Each empty
/// cell's candidates are computed against the current, partially mutated
/// grid: assignments made earlier in the same pass constrain later cells.
/// This within-pass dependency is deliberate, which is why the order is
/// fixed and documented.
///
/// A cell whose candidate set is empty (a stall) is skipped and left empty;
/// the caller detects the stall through the incompleteness of the grid and
/// applies its restart policy.
pub(crate) fn fill_pass<R>(grid: &mut Grid, rng: &mut R)
where
    R: Rng,
{
    for x in 0..9 {
        for y in 0..9 {
            let pos = Position::new(x, y);
            if grid.get(pos).is_some() {
                continue;
            }
            let candidates = candidates_at(grid, pos);
            if candidates.is_empty() {
                continue;
            }
            let index = rng.random_range(0..candidates.len());
            grid.set(pos, candidates.nth(index));
        }
    }
}
