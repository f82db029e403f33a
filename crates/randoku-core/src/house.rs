//! The row/column/box vocabulary shared by constraint code.

use crate::position::Position;

/// A house (row, column, or 3×3 box) on the board.
///
/// The candidate filter and the validator both reason about the same three
/// overlapping neighborhoods of a cell; `House` names them once so the two
/// never disagree about membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut y = 0;
        while y < 9 {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut x = 0;
        while x < 9 {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            boxes[index as usize] = Self::Box { index };
            index += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing a position: its row, its column,
    /// and its box.
    #[must_use]
    #[inline]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in (0u8..).zip(&mut positions) {
            *slot = self.position_from_cell_index(i);
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_positions() {
        let positions = House::Row { y: 3 }.positions();
        for (x, pos) in (0u8..).zip(positions) {
            assert_eq!(pos, Position::new(x, 3));
        }
    }

    #[test]
    fn test_column_positions() {
        let positions = House::Column { x: 7 }.positions();
        for (y, pos) in (0u8..).zip(positions) {
            assert_eq!(pos, Position::new(7, y));
        }
    }

    #[test]
    fn test_box_positions() {
        let positions = House::Box { index: 4 }.positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[4], Position::new(4, 4));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn test_containing() {
        let pos = Position::new(5, 7);
        let [row, column, boxed] = House::containing(pos);
        assert_eq!(row, House::Row { y: 7 });
        assert_eq!(column, House::Column { x: 5 });
        assert_eq!(boxed, House::Box { index: 7 });
    }

    #[test]
    fn test_all_houses_cover_every_cell_three_times() {
        let mut counts = [[0u8; 9]; 9];
        for house in House::ALL {
            for pos in house.positions() {
                counts[pos.y() as usize][pos.x() as usize] += 1;
            }
        }
        for row in counts {
            for count in row {
                assert_eq!(count, 3);
            }
        }
    }
}
