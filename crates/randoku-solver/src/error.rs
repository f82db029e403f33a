use derive_more::{Display, Error};

/// Errors reported by [`FillSolver::solve`].
///
/// [`FillSolver::solve`]: crate::FillSolver::solve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// The random-fill strategy exhausted its generation budget without
    /// producing a complete grid.
    ///
    /// Random fill never retracts an assignment, so an early bad choice can
    /// leave a later cell with no legal candidate. The generation budget
    /// turns that non-termination risk into a reportable failure.
    #[display("no complete grid after {generations} generations")]
    GenerationBudgetExceeded {
        /// Generations elapsed before giving up.
        generations: u64,
    },
    /// The backtracking strategy exhausted the search space: the puzzle has
    /// no solution.
    #[display("the puzzle has no solution")]
    NoSolution,
}
