#![warn(missing_docs)]
//! This crate provides a constraint-satisfaction solver for Kropki Sudoku puzzles.
//!
//! A Kropki Sudoku is a standard 9x9 Sudoku with extra pairwise constraints
//! ("dots") between orthogonally adjacent cells: a white dot requires the two
//! values to be consecutive, a black dot requires one to be double the other.
//!
//! ## Example
//!
//! ```
//! use kropki_solver::kropki::board::Board;
//! use kropki_solver::kropki::solver::solve;
//!
//! let cells = [
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9],
//! ];
//!
//! // No dots: this is a plain Sudoku, which is a Kropki board whose dot
//! // grids are all `Marker::None`.
//! let solved = solve(Board::from_cells(cells)).expect("puzzle is solvable");
//! assert!(solved.is_complete());
//! ```

/// The `kropki` module implements the Kropki Sudoku solver: board representation,
/// constraint checking, domain computation, variable selection and backtracking search.
pub mod kropki;
