#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search engine.
//!
//! The engine owns the board for the duration of solving. Branch isolation is
//! kept with an undo discipline rather than per-branch deep copies: each
//! recursive step mutates exactly one cell and clears it again before trying
//! the next candidate, so sibling branches never observe each other's
//! tentative assignments.

use crate::kropki::board::{Board, EMPTY};
use crate::kropki::checker;
use crate::kropki::domain::valid_domain;
use crate::kropki::forward::forward_check;
use crate::kropki::selection::{CellSelection, MrvDegree};

/// The search exhausted every branch without reaching a full assignment.
///
/// This is the normal outcome for contradictory or malformed puzzles, distinct
/// from any board value: failure is never represented as an all-zero grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no assignment satisfies the puzzle constraints")]
pub struct NoSolution;

/// Tuning knobs for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Run the forward-checking inference step after each assignment.
    ///
    /// Pruning only: it affects how early failure is detected, never which
    /// solutions exist. Enabled by default.
    pub forward_check: bool,
    /// Abort the search after this many recursive steps, reporting
    /// [`NoSolution`] without corrupting the board. `None` means unbounded.
    pub max_steps: Option<u64>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            forward_check: true,
            max_steps: None,
        }
    }
}

/// Recursive depth-first backtracking over a [`Board`], generic over the
/// cell-selection strategy.
#[derive(Debug, Clone)]
pub struct Backtracking<S: CellSelection = MrvDegree> {
    board: Board,
    selector: S,
    options: SolverOptions,
    steps: u64,
}

impl Backtracking<MrvDegree> {
    /// Creates a solver with MRV/degree selection and default options.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_options(board, SolverOptions::default())
    }

    /// Creates a solver with MRV/degree selection and the given options.
    #[must_use]
    pub fn with_options(board: Board, options: SolverOptions) -> Self {
        Self::with_selector(board, MrvDegree, options)
    }
}

impl<S: CellSelection> Backtracking<S> {
    /// Creates a solver with an explicit selection strategy.
    #[must_use]
    pub fn with_selector(board: Board, selector: S, options: SolverOptions) -> Self {
        Self {
            board,
            selector,
            options,
            steps: 0,
        }
    }

    /// Runs the search to completion.
    ///
    /// Givens are validated up front: a board whose fixed cells already
    /// conflict is reported as [`NoSolution`] without entering backtracking.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`] when no branch reaches a full assignment, or
    /// when the configured step budget expires first.
    pub fn solve(&mut self) -> Result<Board, NoSolution> {
        if !checker::board_is_consistent(&self.board) {
            return Err(NoSolution);
        }
        if self.search() {
            Ok(self.board.clone())
        } else {
            Err(NoSolution)
        }
    }

    /// Returns the number of recursive steps taken so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// One node of the search tree. Returns `true` with the board fully
    /// assigned, or `false` with the board exactly as it was on entry.
    fn search(&mut self) -> bool {
        self.steps += 1;
        if self
            .options
            .max_steps
            .is_some_and(|limit| self.steps > limit)
        {
            return false;
        }

        // No unassigned cell left means every placement passed validation.
        let Some(coord) = self.selector.pick(&mut self.board) else {
            return true;
        };

        for digit in valid_domain(&mut self.board, coord) {
            self.board.set(coord, digit);
            if (!self.options.forward_check || forward_check(&mut self.board, coord))
                && self.search()
            {
                return true;
            }
            self.board.set(coord, EMPTY);
        }

        false
    }
}

/// Solves a board with MRV/degree selection and default options.
///
/// # Errors
///
/// Returns [`NoSolution`] when the puzzle has no satisfying assignment.
pub fn solve(board: Board) -> Result<Board, NoSolution> {
    Backtracking::new(board).solve()
}
