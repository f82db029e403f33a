use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use randoku_core::Grid;

use crate::{SolverError, backtrack, random_fill};

/// Grid-filling strategy.
///
/// The tag exists so callers can choose between the historical unsound
/// behavior and a sound replacement without changing any interface: both
/// strategies consume the same candidate filter and mutate the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Scan-and-assign with uniform-random candidate selection and no
    /// retraction. Faithful to the original engine; may fail on solvable
    /// puzzles (see [`FillSolver::max_generations`]).
    #[default]
    RandomFill,
    /// Depth-first search with retraction. Finds a solution whenever one
    /// exists; deterministic.
    Backtracking,
}

/// The grid-filling engine.
///
/// Owns the strategy, the random number generator, and the generation
/// budget. The grid itself is passed in by exclusive reference and mutated
/// in place; the solver holds no grid state between calls.
///
/// A *generation* is one full scan-and-assign pass over all 81 cells. The
/// random-fill strategy counts generations as a diagnostic (and as its
/// termination budget); backtracking leaves the counter at zero.
///
/// # Examples
///
/// ```
/// use randoku_core::Grid;
/// use randoku_solver::{FillSolver, Strategy};
///
/// let mut grid = Grid::new();
/// let mut solver = FillSolver::with_seed(Strategy::RandomFill, 7);
/// if solver.solve(&mut grid).is_ok() {
///     assert!(grid.is_complete());
///     println!("solved in {} generations", solver.generations_elapsed());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FillSolver {
    strategy: Strategy,
    rng: Pcg64Mcg,
    max_generations: u64,
    generations: u64,
}

/// Default generation budget for the random-fill strategy.
pub const DEFAULT_MAX_GENERATIONS: u64 = 10_000;

impl FillSolver {
    /// Creates a solver seeded from the operating system.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self::with_seed(strategy, rand::random())
    }

    /// Creates a solver with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: Pcg64Mcg::seed_from_u64(seed),
            max_generations: DEFAULT_MAX_GENERATIONS,
            generations: 0,
        }
    }

    /// Sets the generation budget for the random-fill strategy.
    ///
    /// Random fill restarts from the givens every time a pass stalls; the
    /// budget bounds the number of passes so a stalled or unsolvable puzzle
    /// fails with [`SolverError::GenerationBudgetExceeded`] instead of
    /// looping forever.
    #[must_use]
    pub fn max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Returns the number of generations the last [`solve`] call ran.
    ///
    /// [`solve`]: Self::solve
    #[must_use]
    pub fn generations_elapsed(&self) -> u64 {
        self.generations
    }

    /// Fills every empty cell of `grid` in place.
    ///
    /// An already-complete grid returns immediately with zero generations.
    /// On error the grid is left at the original givens (random fill) or
    /// unchanged (backtracking).
    ///
    /// # Errors
    ///
    /// - [`SolverError::GenerationBudgetExceeded`] if the random-fill
    ///   strategy runs out of generations.
    /// - [`SolverError::NoSolution`] if the backtracking strategy proves
    ///   the puzzle unsolvable.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<(), SolverError> {
        self.generations = 0;
        if grid.is_complete() {
            return Ok(());
        }
        match self.strategy {
            Strategy::RandomFill => self.solve_random_fill(grid),
            Strategy::Backtracking => backtrack::solve(grid),
        }
    }

    fn solve_random_fill(&mut self, grid: &mut Grid) -> Result<(), SolverError> {
        let givens = grid.clone();
        while self.generations < self.max_generations {
            self.generations += 1;
            random_fill::fill_pass(grid, &mut self.rng);
            if grid.is_complete() {
                log::debug!("random fill completed after {} generations", self.generations);
                return Ok(());
            }
            // Some cell stalled (empty candidate set). Assignments are
            // never retracted, so the pass cannot recover; restart the
            // whole grid from the givens.
            log::debug!("generation {} stalled, restarting from givens", self.generations);
            grid.clone_from(&givens);
        }
        Err(SolverError::GenerationBudgetExceeded {
            generations: self.generations,
        })
    }
}
