//! Board position (x, y) coordinates.

use derive_more::{Display, Error};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). A `Position` is always in bounds; [`Position::try_new`] is the
/// checked entry point for untrusted coordinates.
///
/// # Examples
///
/// ```
/// use randoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
///
/// assert!(Position::try_new(9, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

/// Error returned when a coordinate falls outside the 9×9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({x}, {y}) is outside the 9x9 board")]
pub struct OutOfBoundsError {
    /// The offending column.
    pub x: u8,
    /// The offending row.
    pub y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from untrusted coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] if `x` or `y` is not in the range 0-8.
    pub const fn try_new(x: u8, y: u8) -> Result<Self, OutOfBoundsError> {
        if x < 9 && y < 9 {
            Ok(Self { x, y })
        } else {
            Err(OutOfBoundsError { x, y })
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8, left to right, top to bottom) of the 3×3 box
    /// containing this position.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left corner of the 3×3 box containing this position.
    ///
    /// The corner is `(x - x % 3, y - y % 3)`; box membership is always
    /// recomputed from the coordinates, never stored.
    #[must_use]
    #[inline]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x - self.x % 3,
            y: self.y - self.y % 3,
        }
    }

    /// Converts a (box index, cell index) pair into an absolute position.
    ///
    /// Cells within a box are numbered 0-8, left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell_index` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_box(box_index: u8, cell_index: u8) -> Self {
        assert!(box_index < 9 && cell_index < 9);
        Self {
            x: (box_index % 3) * 3 + cell_index % 3,
            y: (box_index / 3) * 3 + cell_index / 3,
        }
    }
}
