//! Boggler - CLI
//!
//! Boggle solver with TUI and CLI modes using sorted-lexicon prefix pruning.

use anyhow::{Context, Result};
use boggler::{
    commands::{
        BenchmarkConfig, SolveConfig, check_word, run_benchmark, run_simple, solve_board,
    },
    core::{Lexicon, MIN_WORD_LEN},
    output::{print_benchmark_result, print_check_result, print_solve_result},
    solver::Solver,
    wordlists::{
        DICTIONARY,
        loader::{lexicon_from_file, lexicon_from_slice},
    },
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "boggler",
    about = "Boggle solver: every dictionary word on the board, sorted and scored",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'builtin' (default, embedded word list) or path to a file
    #[arg(short = 'd', long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Minimum word length kept in the lexicon
    #[arg(short = 'm', long, global = true, default_value_t = MIN_WORD_LEN)]
    min_len: usize,

    /// Board rows
    #[arg(long, global = true, default_value_t = 4)]
    rows: usize,

    /// Board columns
    #[arg(long, global = true, default_value_t = 4)]
    cols: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - replays the search on the board)
    Play {
        /// Board letters to start with, row by row
        letters: Option<String>,
    },

    /// Simple CLI mode (prompt for boards without TUI)
    Simple,

    /// Solve a specific board
    Solve {
        /// Board letters, row by row
        letters: String,

        /// Show word length breakdown and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether a word is in the lexicon, a prefix, or neither
    Check {
        /// Word to check
        word: String,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for board generation
        #[arg(short, long, default_value = "210")]
        seed: u64,
    },
}

/// Build the lexicon selected by the -d flag
fn load_lexicon(dictionary: &str, min_len: usize) -> Result<Lexicon> {
    match dictionary {
        "builtin" => Ok(lexicon_from_slice(DICTIONARY, min_len)),
        path => lexicon_from_file(path, min_len)
            .with_context(|| format!("Failed to read dictionary '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { letters: None });

    // Keep the TUI's alternate screen free of log output
    if !matches!(command, Commands::Play { .. }) {
        boggler::log::init_logger(std::env::var("BOGGLER_DEBUG").is_ok());
    }

    let lexicon = load_lexicon(&cli.dictionary, cli.min_len)?;
    log::info!(
        "Lexicon ready: {} words (min length {})",
        lexicon.len(),
        lexicon.min_len()
    );

    let solver = Solver::new(&lexicon);

    match command {
        Commands::Play { letters } => run_play_command(&lexicon, cli.rows, cli.cols, letters),
        Commands::Simple => run_simple(&solver, cli.rows, cli.cols).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { letters, verbose } => {
            run_solve_command(&solver, letters, cli.rows, cli.cols, verbose)
        }
        Commands::Check { word } => run_check_command(&word, &lexicon),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, count, seed, cli.rows, cli.cols)
        }
    }
}

fn run_solve_command(
    solver: &Solver,
    letters: String,
    rows: usize,
    cols: usize,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig::new(letters).with_dimensions(rows, cols);
    let result = solve_board(config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_check_command(word: &str, lexicon: &Lexicon) -> Result<()> {
    let result = check_word(word, lexicon).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver,
    count: usize,
    seed: u64,
    rows: usize,
    cols: usize,
) -> Result<()> {
    println!("Running benchmark on {count} random {rows}x{cols} boards (seed {seed})...");

    let config = BenchmarkConfig {
        count,
        rows,
        cols,
        seed,
    };
    let result = run_benchmark(solver, &config).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(
    lexicon: &Lexicon,
    rows: usize,
    cols: usize,
    letters: Option<String>,
) -> Result<()> {
    use boggler::interactive::{App, run_tui};

    let mut app = App::new(lexicon, rows, cols);
    if let Some(letters) = letters {
        app.load_board(&letters);
    }
    run_tui(app)
}
