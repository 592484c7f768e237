#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking constraint-satisfaction search for Kropki Sudoku.
//!
//! The modules mirror the layers of the search: [`marker`] defines the dot
//! predicates, [`board`] holds the mutable grid state, [`checker`] validates
//! assignments, [`domain`] computes legal digits, [`selection`] picks the next
//! cell, [`forward`] prunes doomed branches, and [`solver`] ties it all
//! together. [`parser`] reads and writes the puzzle file format.

pub mod board;
pub mod checker;
pub mod domain;
pub mod forward;
pub mod marker;
pub mod parser;
pub mod selection;
pub mod solver;
