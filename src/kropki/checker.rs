#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Constraint validation: row/column/box uniqueness and dot predicates.
//!
//! [`cell_is_valid`] is the single source of truth for "is this tentative
//! assignment locally consistent". It is invoked after every trial assignment
//! during domain computation, so everything here stays allocation-free.

use crate::kropki::board::{BOX_SIZE, Board, Coord, EMPTY, SIZE};

/// Checks that no nonzero digit occurs twice in the given 9-cell group.
fn all_different(digits: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; 10];
    for digit in digits {
        if digit != EMPTY && seen[digit as usize] {
            return false;
        }
        seen[digit as usize] = true;
    }
    true
}

/// Checks the uniqueness constraint for row `row`.
///
/// # Panics
///
/// Panics if `row >= 9`.
#[must_use]
pub fn row_all_different(board: &Board, row: usize) -> bool {
    all_different((0..SIZE).map(|col| board.get(Coord::new(row, col))))
}

/// Checks the uniqueness constraint for column `col`.
///
/// # Panics
///
/// Panics if `col >= 9`.
#[must_use]
pub fn column_all_different(board: &Board, col: usize) -> bool {
    all_different((0..SIZE).map(|row| board.get(Coord::new(row, col))))
}

/// Checks the uniqueness constraint for the 3x3 box containing `coord`.
///
/// # Panics
///
/// Panics if `coord` is out of bounds.
#[must_use]
pub fn box_all_different(board: &Board, coord: Coord) -> bool {
    let origin = coord.box_origin();
    all_different(
        (origin.row..origin.row + BOX_SIZE).flat_map(|row| {
            (origin.col..origin.col + BOX_SIZE).map(move |col| Coord::new(row, col))
        })
        .map(|c| board.get(c)),
    )
}

/// Checks the up-to-four dot relationships touching `coord`.
///
/// Neighbors that are out of bounds or still unassigned are skipped: with no
/// value to compare against, the constraint is trivially satisfied. For each
/// assigned neighbor, the marker's predicate is applied to the pair of values.
#[must_use]
pub fn dot_constraints_satisfied(board: &Board, coord: Coord) -> bool {
    let Coord { row, col } = coord;
    let value = board.get(coord);

    // Left neighbor, constrained by vertical[row][col - 1].
    if col > 0 {
        let neighbor = board.get(Coord::new(row, col - 1));
        if neighbor != EMPTY && !board.vertical_marker(row, col - 1).satisfied(value, neighbor) {
            return false;
        }
    }

    // Right neighbor, constrained by vertical[row][col].
    if col + 1 < SIZE {
        let neighbor = board.get(Coord::new(row, col + 1));
        if neighbor != EMPTY && !board.vertical_marker(row, col).satisfied(value, neighbor) {
            return false;
        }
    }

    // Upper neighbor, constrained by horizontal[row - 1][col].
    if row > 0 {
        let neighbor = board.get(Coord::new(row - 1, col));
        if neighbor != EMPTY && !board.horizontal_marker(row - 1, col).satisfied(value, neighbor) {
            return false;
        }
    }

    // Lower neighbor, constrained by horizontal[row][col].
    if row + 1 < SIZE {
        let neighbor = board.get(Coord::new(row + 1, col));
        if neighbor != EMPTY && !board.horizontal_marker(row, col).satisfied(value, neighbor) {
            return false;
        }
    }

    true
}

/// Checks that the assignment at `coord` is locally consistent: its dot
/// constraints and its row, column and box uniqueness constraints all hold.
#[must_use]
pub fn cell_is_valid(board: &Board, coord: Coord) -> bool {
    dot_constraints_satisfied(board, coord)
        && row_all_different(board, coord.row)
        && column_all_different(board, coord.col)
        && box_all_different(board, coord)
}

/// Checks every assigned cell of the board with [`cell_is_valid`].
///
/// Used once before search starts: a puzzle whose givens already conflict has
/// no solution, so the engine can report that without entering backtracking.
#[must_use]
pub fn board_is_consistent(board: &Board) -> bool {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Coord::new(row, col)))
        .filter(|&coord| board.get(coord) != EMPTY)
        .all(|coord| cell_is_valid(board, coord))
}
