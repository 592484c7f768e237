#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The mutable search state: a 9x9 digit grid plus two read-only dot grids.

use crate::kropki::marker::Marker;
use itertools::Itertools;
use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 9;

/// Side length of one of the nine non-overlapping sub-grids.
pub const BOX_SIZE: usize = 3;

/// The digit value denoting an unassigned cell.
pub const EMPTY: u8 = 0;

/// A `(row, col)` pair in `[0, 9) x [0, 9)` identifying one cell.
///
/// The derived `Ord` is row-major, which is what the selection tie-breaks
/// rely on for determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    /// Row index, `0..9`.
    pub row: usize,
    /// Column index, `0..9`.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the top-left coordinate of the 3x3 box containing this cell.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: (self.row / BOX_SIZE) * BOX_SIZE,
            col: (self.col / BOX_SIZE) * BOX_SIZE,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The board: digit cells plus the vertical and horizontal dot grids.
///
/// The board is a plain data holder; all constraint logic lives in
/// [`crate::kropki::checker`]. Only `cells` mutates during search, the dot
/// grids are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
    /// `vertical[i][j]` constrains `cells[i][j]` and `cells[i][j + 1]`.
    vertical: [[Marker; SIZE - 1]; SIZE],
    /// `horizontal[i][j]` constrains `cells[i][j]` and `cells[i + 1][j]`.
    horizontal: [[Marker; SIZE]; SIZE - 1],
}

impl Board {
    /// Creates a board from a digit grid and both dot grids.
    ///
    /// # Panics
    ///
    /// Panics if any cell holds a value outside `0..=9`.
    #[must_use]
    pub fn new(
        cells: [[u8; SIZE]; SIZE],
        vertical: [[Marker; SIZE - 1]; SIZE],
        horizontal: [[Marker; SIZE]; SIZE - 1],
    ) -> Self {
        for row in &cells {
            for &digit in row {
                assert!(digit <= 9, "cell value {digit} out of range 0..=9");
            }
        }
        Self {
            cells,
            vertical,
            horizontal,
        }
    }

    /// Creates a board with no dots, i.e. a plain Sudoku.
    #[must_use]
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self::new(
            cells,
            [[Marker::None; SIZE - 1]; SIZE],
            [[Marker::None; SIZE]; SIZE - 1],
        )
    }

    /// Returns the digit at `coord`, `0` meaning unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    #[must_use]
    pub const fn get(&self, coord: Coord) -> u8 {
        self.cells[coord.row][coord.col]
    }

    /// Sets the digit at `coord`; `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds or `digit > 9`.
    pub const fn set(&mut self, coord: Coord, digit: u8) {
        assert!(digit <= 9, "cell value out of range 0..=9");
        self.cells[coord.row][coord.col] = digit;
    }

    /// Returns the marker between `(row, col)` and `(row, col + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 9` or `col >= 8`.
    #[must_use]
    pub const fn vertical_marker(&self, row: usize, col: usize) -> Marker {
        self.vertical[row][col]
    }

    /// Returns the marker between `(row, col)` and `(row + 1, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 8` or `col >= 9`.
    #[must_use]
    pub const fn horizontal_marker(&self, row: usize, col: usize) -> Marker {
        self.horizontal[row][col]
    }

    /// Returns a reference to the raw digit grid.
    #[must_use]
    pub const fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns `true` once every cell holds a nonzero digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&digit| digit != EMPTY))
    }

    /// Iterates over the coordinates of all unassigned cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .map(|(row, col)| Coord::new(row, col))
            .filter(|&coord| self.get(coord) == EMPTY)
    }
}

impl fmt::Display for Board {
    /// Renders the digit grid as nine rows of space-separated digits, the
    /// same shape the puzzle file format uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut board = Board::from_cells([[EMPTY; SIZE]; SIZE]);
        let coord = Coord::new(4, 7);
        assert_eq!(board.get(coord), EMPTY);
        board.set(coord, 9);
        assert_eq!(board.get(coord), 9);
        board.set(coord, EMPTY);
        assert_eq!(board.get(coord), EMPTY);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_rejects_digit_above_nine() {
        let mut board = Board::from_cells([[EMPTY; SIZE]; SIZE]);
        board.set(Coord::new(0, 0), 10);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_vertical_marker_out_of_range() {
        let board = Board::from_cells([[EMPTY; SIZE]; SIZE]);
        let _ = board.vertical_marker(0, 8);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_horizontal_marker_out_of_range() {
        let board = Board::from_cells([[EMPTY; SIZE]; SIZE]);
        let _ = board.horizontal_marker(8, 0);
    }

    #[test]
    fn test_marker_lookup() {
        let mut vertical = [[Marker::None; SIZE - 1]; SIZE];
        let mut horizontal = [[Marker::None; SIZE]; SIZE - 1];
        vertical[2][5] = Marker::White;
        horizontal[7][1] = Marker::Black;
        let board = Board::new([[EMPTY; SIZE]; SIZE], vertical, horizontal);

        assert_eq!(board.vertical_marker(2, 5), Marker::White);
        assert_eq!(board.vertical_marker(2, 4), Marker::None);
        assert_eq!(board.horizontal_marker(7, 1), Marker::Black);
        assert_eq!(board.horizontal_marker(0, 1), Marker::None);
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Coord::new(0, 0).box_origin(), Coord::new(0, 0));
        assert_eq!(Coord::new(4, 7).box_origin(), Coord::new(3, 6));
        assert_eq!(Coord::new(8, 2).box_origin(), Coord::new(6, 0));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut cells = [[1u8; SIZE]; SIZE];
        cells[0][3] = EMPTY;
        cells[5][0] = EMPTY;
        let board = Board::from_cells(cells);
        let empties: Vec<Coord> = board.empty_cells().collect();
        assert_eq!(empties, vec![Coord::new(0, 3), Coord::new(5, 0)]);
    }

    #[test]
    fn test_is_complete() {
        let mut cells = [[1u8; SIZE]; SIZE];
        assert!(Board::from_cells(cells).is_complete());
        cells[8][8] = EMPTY;
        assert!(!Board::from_cells(cells).is_complete());
    }

    #[test]
    fn test_display_format() {
        let mut cells = [[EMPTY; SIZE]; SIZE];
        cells[0] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let board = Board::from_cells(cells);
        let rendered = board.to_string();
        let first = rendered.lines().next().unwrap();
        assert_eq!(first, "1 2 3 4 5 6 7 8 9");
        assert_eq!(rendered.lines().count(), SIZE);
    }
}
