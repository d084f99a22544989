//! Simple interactive CLI mode
//!
//! Text-based prompt loop without TUI: enter board letters, get the solution.

use super::SolveResult;
use crate::core::Board;
use crate::output::print_solve_result;
use crate::solver::Solver;
use std::io::{self, Write};
use std::time::Instant;

/// A parsed line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum BoardInput {
    /// Leave the prompt loop
    Quit,
    /// Generate a random board
    Random,
    /// A valid board
    Board(Board),
    /// Input that could not be used, with an explanation
    Invalid(String),
}

/// Interpret one line typed at the board prompt
#[must_use]
pub fn parse_board_input(input: &str, rows: usize, cols: usize) -> BoardInput {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" | "quit" | "q" | "exit" => BoardInput::Quit,
        "random" | "r" => BoardInput::Random,
        _ => match Board::new(rows, cols, input) {
            Ok(board) => BoardInput::Board(board),
            Err(e) => BoardInput::Invalid(format!(
                "\"{input}\" is not a valid Boggle board: {e}\nPlease enter exactly {} letters (or empty to quit)",
                rows.saturating_mul(cols)
            )),
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a board
/// produces a word too long to score.
pub fn run_simple(solver: &Solver, rows: usize, cols: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Boggler - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Enter the {} letters of a {rows}x{cols} board, row by row.",
        rows.saturating_mul(cols)
    );
    println!("Commands: 'random' for a random board, empty line or 'quit' to exit\n");

    loop {
        let input = get_user_input("Boggle board letters (or 'return' to exit)")?;

        let mut board = match parse_board_input(&input, rows, cols) {
            BoardInput::Quit => {
                println!("\nOK, sorry it didn't work out 👋\n");
                return Ok(());
            }
            BoardInput::Random => match Board::random(rows, cols, &mut rand::rng()) {
                Ok(board) => board,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
            BoardInput::Board(board) => board,
            BoardInput::Invalid(message) => {
                println!("❌ {message}\n");
                continue;
            }
        };

        let start = Instant::now();
        let solution = solver.solve(&mut board).map_err(|e| e.to_string())?;
        let result = SolveResult {
            board,
            solution,
            duration: start.elapsed(),
        };

        print_solve_result(&result, true);
        println!();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
