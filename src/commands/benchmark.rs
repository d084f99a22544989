//! Benchmark command
//!
//! Solves a batch of random boards and measures throughput.

use crate::core::Board;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
    pub seed: u64,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            rows: 4,
            cols: 4,
            seed: 210,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_words: usize,
    pub total_score: u64,
    pub average_words: f64,
    pub average_score: f64,
    pub max_words: usize,
    pub empty_boards: usize,
    pub best_board: Option<(String, u32)>,
    pub length_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Run the benchmark on `config.count` random boards
///
/// Boards are generated from `config.seed`, so runs are reproducible.
///
/// # Errors
///
/// Returns an error if a board produces a word too long to score.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(solver: &Solver, config: &BenchmarkConfig) -> Result<BenchmarkResult, String> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_words = 0;
    let mut total_score = 0u64;
    let mut max_words = 0;
    let mut empty_boards = 0;
    let mut best_board: Option<(String, u32)> = None;
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for idx in 0..config.count {
        let mut board =
            Board::random(config.rows, config.cols, &mut rng).map_err(|e| e.to_string())?;
        let solution = solver.solve(&mut board).map_err(|e| e.to_string())?;

        total_words += solution.len();
        total_score += u64::from(solution.score());
        max_words = max_words.max(solution.len());
        if solution.is_empty() {
            empty_boards += 1;
        }
        if best_board
            .as_ref()
            .is_none_or(|(_, best)| solution.score() > *best)
        {
            best_board = Some((board.letters(), solution.score()));
        }
        for (len, count) in solution.length_distribution() {
            *length_distribution.entry(len).or_insert(0) += count;
        }

        if idx % 10 == 0 {
            let avg = total_score as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg score: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_boards = config.count;
    let divisor = total_boards.max(1) as f64;

    Ok(BenchmarkResult {
        total_boards,
        total_words,
        total_score,
        average_words: total_words as f64 / divisor,
        average_score: total_score as f64 / divisor,
        max_words,
        empty_boards,
        best_board,
        length_distribution,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
