#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reader and writer for the Kropki puzzle file format.
//!
//! A puzzle file holds three whitespace-separated integer sections, in order:
//!
//! - 9 lines of 9 digits `0..=9` (`0` = blank cell),
//! - 9 lines of 8 vertical dot markers `{0, 1, 2}`,
//! - 8 lines of 9 horizontal dot markers `{0, 1, 2}`,
//!
//! where `0`/`1`/`2` encode no dot, a white dot and a black dot. Blank lines
//! may separate the sections (or appear anywhere) and are ignored.

use crate::kropki::board::{Board, SIZE};
use crate::kropki::marker::Marker;
use itertools::Itertools;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Total non-blank lines in a well-formed puzzle file: 9 + 9 + 8.
const LINE_COUNT: usize = SIZE + SIZE + (SIZE - 1);

/// Errors raised while reading a puzzle file.
///
/// Malformed input is the I/O layer's problem, not the solver's: it is
/// reported through this type and never reaches the search engine as a board.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("failed to read puzzle input")]
    Io(#[from] io::Error),
    /// The file does not contain exactly 26 non-blank lines.
    #[error("expected {LINE_COUNT} non-blank lines, found {0}")]
    WrongLineCount(usize),
    /// A line holds the wrong number of values for its section.
    #[error("line {line}: expected {expected} values, found {found}")]
    WrongValueCount {
        /// 1-based line number in the input.
        line: usize,
        /// Values the section requires per line.
        expected: usize,
        /// Values actually present.
        found: usize,
    },
    /// A token is not a non-negative integer.
    #[error("line {line}: invalid token {token:?}")]
    InvalidToken {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A cell value lies outside `0..=9`.
    #[error("line {line}: digit {value} out of range 0..=9")]
    DigitOutOfRange {
        /// 1-based line number in the input.
        line: usize,
        /// The offending value.
        value: u8,
    },
    /// A dot marker lies outside `0..=2`.
    #[error("line {line}: marker {value} out of range 0..=2")]
    MarkerOutOfRange {
        /// 1-based line number in the input.
        line: usize,
        /// The offending value.
        value: u8,
    },
}

fn parse_row(line: usize, text: &str, expected: usize) -> Result<Vec<u8>, ParseError> {
    let values: Vec<u8> = text
        .split_whitespace()
        .map(|token| {
            token.parse::<u8>().map_err(|_| ParseError::InvalidToken {
                line,
                token: token.to_string(),
            })
        })
        .try_collect()?;

    if values.len() == expected {
        Ok(values)
    } else {
        Err(ParseError::WrongValueCount {
            line,
            expected,
            found: values.len(),
        })
    }
}

fn parse_marker_row(
    line: usize,
    text: &str,
    expected: usize,
) -> Result<Vec<Marker>, ParseError> {
    parse_row(line, text, expected)?
        .into_iter()
        .map(|value| {
            Marker::try_from(value).map_err(|value| ParseError::MarkerOutOfRange { line, value })
        })
        .try_collect()
}

/// Parses a puzzle from a buffered reader into a [`Board`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found: an I/O
/// failure, a malformed token, a wrong line or value count, or a digit or
/// marker out of range.
pub fn parse_board<R: BufRead>(reader: R) -> Result<Board, ParseError> {
    let mut rows: Vec<(usize, String)> = Vec::with_capacity(LINE_COUNT);
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            rows.push((idx + 1, line));
        }
    }
    if rows.len() != LINE_COUNT {
        return Err(ParseError::WrongLineCount(rows.len()));
    }

    let mut cells = [[0u8; SIZE]; SIZE];
    for (i, (line, text)) in rows[..SIZE].iter().enumerate() {
        let values = parse_row(*line, text, SIZE)?;
        for (j, &value) in values.iter().enumerate() {
            if value > 9 {
                return Err(ParseError::DigitOutOfRange { line: *line, value });
            }
            cells[i][j] = value;
        }
    }

    let mut vertical = [[Marker::None; SIZE - 1]; SIZE];
    for (i, (line, text)) in rows[SIZE..2 * SIZE].iter().enumerate() {
        let markers = parse_marker_row(*line, text, SIZE - 1)?;
        vertical[i].copy_from_slice(&markers);
    }

    let mut horizontal = [[Marker::None; SIZE]; SIZE - 1];
    for (i, (line, text)) in rows[2 * SIZE..].iter().enumerate() {
        let markers = parse_marker_row(*line, text, SIZE)?;
        horizontal[i].copy_from_slice(&markers);
    }

    Ok(Board::new(cells, vertical, horizontal))
}

/// Parses a puzzle file from disk.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file cannot be opened or its content is
/// malformed; see [`parse_board`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Board, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_board(io::BufReader::new(file))
}

/// Writes a solved grid as nine lines of space-separated digits.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_solution<W: Write>(writer: &mut W, board: &Board) -> io::Result<()> {
    writeln!(writer, "{board}")
}
