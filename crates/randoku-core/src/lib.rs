//! Core data structures for the randoku puzzle solver.
//!
//! This crate provides the grid data model and the two pieces of constraint
//! logic every other component builds on:
//!
//! - [`grid`]: the 9×9 [`Grid`] of `Option<Digit>` cells, including the
//!   whitespace-delimited text format used by puzzle files
//! - [`digit`] / [`digit_set`]: type-safe digits 1-9 and [`DigitSet`], a
//!   bitset over them
//! - [`position`] / [`house`]: board coordinates and the row/column/box
//!   vocabulary shared by the candidate filter and the validator
//! - [`candidates`]: per-cell legal-value computation
//! - [`validate`]: completed row/column/box checks
//!
//! # Examples
//!
//! ```
//! use randoku_core::{Digit, Grid, Position, candidates::candidates_at};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the
//! // center box.
//! let set = candidates_at(&grid, Position::new(4, 5));
//! assert!(!set.contains(Digit::D5));
//! assert_eq!(set.len(), 8);
//! ```

pub mod candidates;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod validate;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError, ParseGridError},
    house::House,
    position::{OutOfBoundsError, Position},
};
