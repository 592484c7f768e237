#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Domain computation for a single unassigned cell.

use crate::kropki::board::{Board, Coord, EMPTY};
use crate::kropki::checker;
use smallvec::SmallVec;

/// The set of digits that may legally occupy one empty cell, in ascending
/// order. At most nine entries, so it never leaves the stack.
pub type Domain = SmallVec<[u8; 9]>;

/// Computes the legal digits for the empty cell at `coord` by trial
/// assignment: each candidate is written into the cell, validated with
/// [`checker::cell_is_valid`], and the cell is restored to empty afterwards.
///
/// This is the dominant cost of the search (nine constraint checks per call),
/// and the result is never cached: any mutation elsewhere on the board could
/// invalidate it.
///
/// # Panics
///
/// Panics if the cell at `coord` is already assigned. Domains are undefined
/// for assigned cells; asking for one is a caller bug, not an unsatisfiable
/// puzzle.
#[must_use]
pub fn valid_domain(board: &mut Board, coord: Coord) -> Domain {
    assert!(
        board.get(coord) == EMPTY,
        "domain requested for assigned cell {coord}"
    );

    let mut domain = Domain::new();
    for digit in 1..=9 {
        board.set(coord, digit);
        if checker::cell_is_valid(board, coord) {
            domain.push(digit);
        }
    }
    board.set(coord, EMPTY);
    domain
}
