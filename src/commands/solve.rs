//! Board solving command
//!
//! Validates a board string, solves it and reports the timing.

use crate::core::Board;
use crate::solver::{Solution, Solver};
use std::time::{Duration, Instant};

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    pub rows: usize,
    pub cols: usize,
}

impl SolveConfig {
    /// Configuration for a standard 4x4 board
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            rows: 4,
            cols: 4,
        }
    }

    #[must_use]
    pub const fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub solution: Solution,
    pub duration: Duration,
}

/// Solve the board described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The letters do not fill exactly `rows * cols` cells
/// - The letters contain anything other than A-Z
/// - A found word is too long to score
pub fn solve_board(config: SolveConfig, solver: &Solver) -> Result<SolveResult, String> {
    let mut board = Board::new(config.rows, config.cols, config.letters.trim())
        .map_err(|e| format!("Invalid board: {e}"))?;

    let start = Instant::now();
    let solution = solver.solve(&mut board).map_err(|e| e.to_string())?;
    let duration = start.elapsed();

    log::info!(
        "Found {} words worth {} points in {:.2}ms",
        solution.len(),
        solution.score(),
        duration.as_secs_f64() * 1000.0
    );

    Ok(SolveResult {
        board,
        solution,
        duration,
    })
}
