#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Variable selection: which empty cell the search assigns next.

use crate::kropki::board::{Board, Coord, EMPTY, SIZE};
use crate::kropki::domain::valid_domain;

/// Strategy for picking the next cell to assign.
///
/// `pick` takes the board mutably because domain sizes are computed by trial
/// assignment; the board is always restored before `pick` returns. A result
/// of `None` means every cell is already assigned.
pub trait CellSelection {
    /// Picks the next unassigned cell, or `None` if the board is complete.
    fn pick(&self, board: &mut Board) -> Option<Coord>;
}

/// Minimum-remaining-values selection with a degree tie-break.
///
/// MRV first: the cells whose domains are smallest are the ones most likely
/// to fail soon, so branching on them prunes earliest. Ties are broken by the
/// degree heuristic: prefer the cell whose assignment constrains the most
/// other undetermined cells through dots. Residual ties resolve to the lowest
/// `(row, col)`, which keeps selection deterministic for a fixed board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MrvDegree;

/// Baseline selection: the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstEmpty;

/// Returns the number of unassigned cells that `coord` constrains through a
/// dot: neighbors joined to it by a non-`None` marker and still empty.
///
/// # Panics
///
/// Panics if the cell at `coord` is already assigned; degrees are only
/// defined for cells still open for selection.
#[must_use]
pub fn degree(board: &Board, coord: Coord) -> usize {
    assert!(
        board.get(coord) == EMPTY,
        "degree requested for assigned cell {coord}"
    );

    let Coord { row, col } = coord;
    let mut degree = 0;

    if col > 0
        && board.vertical_marker(row, col - 1).is_dot()
        && board.get(Coord::new(row, col - 1)) == EMPTY
    {
        degree += 1;
    }
    if col + 1 < SIZE
        && board.vertical_marker(row, col).is_dot()
        && board.get(Coord::new(row, col + 1)) == EMPTY
    {
        degree += 1;
    }
    if row > 0
        && board.horizontal_marker(row - 1, col).is_dot()
        && board.get(Coord::new(row - 1, col)) == EMPTY
    {
        degree += 1;
    }
    if row + 1 < SIZE
        && board.horizontal_marker(row, col).is_dot()
        && board.get(Coord::new(row + 1, col)) == EMPTY
    {
        degree += 1;
    }

    degree
}

impl CellSelection for MrvDegree {
    fn pick(&self, board: &mut Board) -> Option<Coord> {
        let empties: Vec<Coord> = board.empty_cells().collect();

        // MRV phase: collect every cell tied at the minimum domain size
        // rather than breaking ties as they appear.
        let mut ties: Vec<Coord> = Vec::new();
        let mut min_size = usize::MAX;
        for &coord in &empties {
            let size = valid_domain(board, coord).len();
            if size < min_size {
                min_size = size;
                ties.clear();
                ties.push(coord);
            } else if size == min_size {
                ties.push(coord);
            }
        }

        // Degree phase: the strict comparison keeps the first maximal cell,
        // which is the lowest (row, col) since empties are row-major.
        let mut best: Option<Coord> = None;
        let mut best_degree = 0;
        for &coord in &ties {
            let coord_degree = degree(board, coord);
            if best.is_none() || coord_degree > best_degree {
                best = Some(coord);
                best_degree = coord_degree;
            }
        }
        best
    }
}

impl CellSelection for FirstEmpty {
    fn pick(&self, board: &mut Board) -> Option<Coord> {
        board.empty_cells().next()
    }
}
