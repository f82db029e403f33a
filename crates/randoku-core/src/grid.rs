//! The 9×9 puzzle grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{
    digit::Digit,
    position::{OutOfBoundsError, Position},
};

/// A 9×9 grid of cells, each empty (`None`) or holding a digit 1-9.
///
/// The grid is a single owned value: the loader constructs it, the solver
/// mutates it in place through an exclusive reference, and presentation
/// reads it afterwards. Construction accepts any combination of digits;
/// duplicate digits in a row, column, or box are a validity concern (see
/// [`validate`]), not a construction error.
///
/// # Text format
///
/// [`Grid::from_str`] parses the puzzle file format: a whitespace-delimited
/// stream of exactly 81 integers in 0-9, where 0 marks an empty cell.
/// Tokens are consumed **column by column** (outer loop over columns 0-8,
/// inner loop over rows 0-8), matching the historical file layout.
/// [`Display`] renders row-major: nine space-separated values per line, one
/// line per row, `0` for empty.
///
/// [`validate`]: crate::validate
///
/// # Examples
///
/// ```
/// use randoku_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert!(!grid.is_complete());
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    // Row-major: cells[y][x].
    cells: [[Option<Digit>; 9]; 9],
}

/// Error returned when constructing a [`Grid`] from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum GridError {
    /// The source did not contain exactly 81 values.
    #[display("expected 81 cell values, got {len}")]
    InvalidLength {
        /// Number of values provided.
        len: usize,
    },
    /// A value fell outside the range 0-9.
    #[display("cell value {value} at index {index} is outside the range 0-9")]
    InvalidValue {
        /// Index of the offending value in the source.
        index: usize,
        /// The offending value.
        value: u8,
    },
}

/// Error returned when parsing a [`Grid`] from text.
///
/// Any of these conditions fails the load before a grid is produced; the
/// core never sees a partially initialized grid.
#[derive(Debug, Clone, PartialEq, Eq, DisplayDerive, Error)]
pub enum ParseGridError {
    /// A token was not an integer.
    #[display("token {index} ({token:?}) is not an integer")]
    BadToken {
        /// Index of the offending token.
        index: usize,
        /// The offending token text.
        token: String,
    },
    /// A token was an integer outside the range 0-9.
    #[display("token {index} ({value}) is outside the range 0-9")]
    ValueOutOfRange {
        /// Index of the offending token.
        index: usize,
        /// The offending value.
        value: i64,
    },
    /// The source did not contain exactly 81 tokens.
    #[display("expected 81 cell values, got {count}")]
    WrongCount {
        /// Number of tokens found.
        count: usize,
    },
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Creates a grid from 81 raw values in row-major order.
    ///
    /// `0` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLength`] if `cells` does not contain
    /// exactly 81 values, or [`GridError::InvalidValue`] if any value falls
    /// outside 0-9.
    pub fn from_cells(cells: &[u8]) -> Result<Self, GridError> {
        if cells.len() != 81 {
            return Err(GridError::InvalidLength { len: cells.len() });
        }
        let mut grid = Self::new();
        for (index, (&value, pos)) in cells.iter().zip(Position::ALL).enumerate() {
            grid.set(pos, decode_cell(index, value)?);
        }
        Ok(grid)
    }

    /// Creates a grid from nine rows of nine raw values.
    ///
    /// `0` marks an empty cell. The fixed dimensions make length errors
    /// unrepresentable; only [`GridError::InvalidValue`] can occur.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidValue`] if any value falls outside 0-9.
    pub fn from_rows(rows: &[[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (y, row) in (0u8..).zip(rows) {
            for (x, &value) in (0u8..).zip(row) {
                let index = usize::from(y) * 9 + usize::from(x);
                grid.set(Position::new(x, y), decode_cell(index, value)?);
            }
        }
        Ok(grid)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Sets the cell at `pos`.
    #[inline]
    pub const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.y() as usize][pos.x() as usize] = cell;
    }

    /// Returns the cell at untrusted coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `(x, y)` is outside [0,8]×[0,8].
    pub const fn try_get(&self, x: u8, y: u8) -> Result<Option<Digit>, OutOfBoundsError> {
        match Position::try_new(x, y) {
            Ok(pos) => Ok(self.get(pos)),
            Err(err) => Err(err),
        }
    }

    /// Sets the cell at untrusted coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `(x, y)` is outside [0,8]×[0,8].
    pub const fn try_set(
        &mut self,
        x: u8,
        y: u8,
        cell: Option<Digit>,
    ) -> Result<(), OutOfBoundsError> {
        match Position::try_new(x, y) {
            Ok(pos) => {
                self.set(pos, cell);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL.iter().all(|&pos| self.get(pos).is_some())
    }

    /// Returns all empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
    }

    /// Returns a row-major snapshot of the cells, for presentation.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<Digit>; 9]; 9] {
        &self.cells
    }
}

fn decode_cell(index: usize, value: u8) -> Result<Option<Digit>, GridError> {
    if value == 0 {
        return Ok(None);
    }
    Digit::try_from_value(value)
        .map(Some)
        .ok_or(GridError::InvalidValue { index, value })
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0usize;
        for (index, token) in s.split_whitespace().enumerate() {
            let value: i64 = token.parse().map_err(|_| ParseGridError::BadToken {
                index,
                token: token.to_owned(),
            })?;
            if !(0..=9).contains(&value) {
                return Err(ParseGridError::ValueOutOfRange { index, value });
            }
            if index >= 81 {
                // Keep counting so the error reports the full token count.
                count = index + 1;
                continue;
            }
            // Column-major consumption: tokens 0-8 fill column 0, rows 0-8.
            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::new((index / 9) as u8, (index % 9) as u8);
            #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            grid.set(pos, Digit::try_from_value(value as u8));
            count = index + 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "0")?,
                }
            }
        }
        Ok(())
    }
}
