#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Forward checking: detect a doomed branch one ply early.

use crate::kropki::board::{BOX_SIZE, Board, Coord, EMPTY, SIZE};
use crate::kropki::domain::valid_domain;

/// Checks whether the assignment just made at `coord` has driven any
/// still-empty peer to an empty domain.
///
/// Peers are scanned in the cell's box, then its column excluding the box,
/// then its row excluding the box, short-circuiting on the first empty
/// domain. Returns `false` when such a peer exists (the branch cannot
/// succeed), `true` otherwise.
///
/// This is pure pruning: a branch rejected here would be rejected by the next
/// recursive call anyway, one ply later. It never changes the solution set.
#[must_use]
pub fn forward_check(board: &mut Board, coord: Coord) -> bool {
    let origin = coord.box_origin();

    for row in origin.row..origin.row + BOX_SIZE {
        for col in origin.col..origin.col + BOX_SIZE {
            if domain_wiped(board, Coord::new(row, col)) {
                return false;
            }
        }
    }

    for row in (0..origin.row).chain(origin.row + BOX_SIZE..SIZE) {
        if domain_wiped(board, Coord::new(row, coord.col)) {
            return false;
        }
    }

    for col in (0..origin.col).chain(origin.col + BOX_SIZE..SIZE) {
        if domain_wiped(board, Coord::new(coord.row, col)) {
            return false;
        }
    }

    true
}

fn domain_wiped(board: &mut Board, peer: Coord) -> bool {
    board.get(peer) == EMPTY && valid_domain(board, peer).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_cells() -> [[u8; SIZE]; SIZE] {
        [[EMPTY; SIZE]; SIZE]
    }

    #[test]
    fn test_passes_on_an_open_board() {
        let mut cells = empty_cells();
        cells[0][0] = 1;
        let mut board = Board::from_cells(cells);
        assert!(forward_check(&mut board, Coord::new(0, 0)));
    }

    #[test]
    fn test_detects_wiped_domain_in_row_peer() {
        let mut cells = empty_cells();
        // (0, 8) can only be 9, which the assignment at (4, 8) removes.
        cells[0] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
        cells[4][8] = 9;
        let mut board = Board::from_cells(cells);
        assert!(!forward_check(&mut board, Coord::new(4, 8)));
    }

    #[test]
    fn test_detects_wiped_domain_in_box_peer() {
        let mut cells = empty_cells();
        // (0, 0) sees 1..=6 in its row and 7, 8 in its column; placing 9 in
        // its box leaves it with nothing.
        cells[0] = [0, 0, 0, 1, 2, 3, 4, 5, 6];
        cells[1][0] = 7;
        cells[3][0] = 8;
        cells[0][1] = 9;
        let mut board = Board::from_cells(cells);
        assert!(!forward_check(&mut board, Coord::new(0, 1)));
    }

    #[test]
    fn test_board_restored_after_check() {
        let mut cells = empty_cells();
        cells[2][3] = 5;
        let mut board = Board::from_cells(cells);
        let before = board.clone();
        let _ = forward_check(&mut board, Coord::new(2, 3));
        assert_eq!(board, before);
    }
}
