//! Command-line front end for the Kropki Sudoku solver.
//!
//! Reads one puzzle file, or every file under a directory, and prints the
//! solved grid (or a no-solution report) for each. The puzzle file format is
//! documented in [`kropki_solver::kropki::parser`].
//!
//! ```sh
//! # Solve a single puzzle and print the grid
//! kropki-solver puzzle.txt
//!
//! # Solve a puzzle and write the grid to a file, like the classic tooling
//! kropki-solver puzzle.txt --output solved.txt
//!
//! # Solve every puzzle file under a directory
//! kropki-solver puzzles/
//!
//! # Disable forward checking and cap the search
//! kropki-solver puzzle.txt --no-forward-check --max-steps 1000000
//! ```

use clap::Parser;
use kropki_solver::kropki::parser::{parse_file, write_solution};
use kropki_solver::kropki::solver::{Backtracking, SolverOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use walkdir::WalkDir;

/// Defines the command-line interface for the solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "kropki-solver", version, about = "A Kropki Sudoku solver")]
struct Cli {
    /// Path to a puzzle file, or a directory whose files are all solved.
    path: PathBuf,

    /// Disable the forward-checking inference step after each assignment.
    #[arg(long, default_value_t = false)]
    no_forward_check: bool,

    /// Abort the search after this many recursive steps.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Write the solved grid to this file instead of stdout.
    /// Only valid when solving a single puzzle file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report only success or failure, without printing the grid.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

/// Collects the puzzle files named by `path`: the file itself, or every
/// regular file below it when it is a directory.
fn collect_puzzles(path: &Path) -> Vec<PathBuf> {
    if path.is_dir() {
        WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect()
    } else {
        vec![path.to_path_buf()]
    }
}

/// Solves one puzzle file. Returns `true` if a solution was found and
/// reported without error.
fn solve_one(path: &Path, cli: &Cli) -> bool {
    let board = match parse_file(path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}: {err}", path.display());
            return false;
        }
    };

    let options = SolverOptions {
        forward_check: !cli.no_forward_check,
        max_steps: cli.max_steps,
    };
    let mut solver = Backtracking::with_options(board, options);

    let start = Instant::now();
    let result = solver.solve();
    let elapsed = start.elapsed();

    match result {
        Ok(solved) => {
            if let Some(output) = &cli.output {
                match std::fs::File::create(output) {
                    Ok(mut file) => {
                        if let Err(err) = write_solution(&mut file, &solved) {
                            eprintln!("{}: {err}", output.display());
                            return false;
                        }
                    }
                    Err(err) => {
                        eprintln!("{}: {err}", output.display());
                        return false;
                    }
                }
            } else if !cli.quiet {
                println!("{solved}");
            }
            println!(
                "{}: solved in {} steps ({elapsed:.2?})",
                path.display(),
                solver.steps(),
            );
            true
        }
        Err(err) => {
            println!(
                "{}: {err} (searched {} steps in {elapsed:.2?})",
                path.display(),
                solver.steps(),
            );
            false
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let puzzles = collect_puzzles(&cli.path);
    if puzzles.is_empty() {
        eprintln!("{}: no puzzle files found", cli.path.display());
        return ExitCode::FAILURE;
    }
    if cli.output.is_some() && puzzles.len() > 1 {
        eprintln!("--output requires a single puzzle file");
        return ExitCode::FAILURE;
    }

    let solved = puzzles.iter().filter(|path| solve_one(path, &cli)).count();
    if solved == puzzles.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
