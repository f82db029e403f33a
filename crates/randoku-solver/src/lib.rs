//! Grid-filling engine for randoku puzzles.
//!
//! The engine repeatedly scans the grid, asks the core candidate filter for
//! each empty cell's legal digits, and assigns one. Two strategies are
//! available behind the [`Strategy`] tag:
//!
//! - [`Strategy::RandomFill`] reproduces the historical assign-without-
//!   backtrack behavior: uniform-random selection, never retracted, with an
//!   explicit restart-and-budget policy around the stalls that design can
//!   run into.
//! - [`Strategy::Backtracking`] is the sound alternative: depth-first
//!   search over the same candidate sets, guaranteed to find a solution
//!   when one exists.
//!
//! # Examples
//!
//! ```
//! use randoku_core::Grid;
//! use randoku_solver::{FillSolver, Strategy};
//!
//! let mut grid = Grid::new();
//! let mut solver = FillSolver::with_seed(Strategy::Backtracking, 42);
//! solver.solve(&mut grid)?;
//! assert!(grid.is_complete());
//! # Ok::<(), randoku_solver::SolverError>(())
//! ```

pub use self::{
    error::SolverError,
    fill::{DEFAULT_MAX_GENERATIONS, FillSolver, Strategy},
};

mod backtrack;
mod error;
mod fill;
mod random_fill;
