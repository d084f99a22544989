//! Boggler
//!
//! A Boggle solver: finds every dictionary word traceable through adjacent
//! cells of a letter grid, using a sorted lexicon to prune a backtracking search.
//!
//! # Quick Start
//!
//! ```rust
//! use boggler::core::{Board, Lexicon};
//! use boggler::solver::solve;
//!
//! let lexicon = Lexicon::new(["plea", "sample", "same"]);
//! let mut board = Board::new(4, 4, "plxxmexxxaxxsxxx").unwrap();
//!
//! let solution = solve(&mut board, &lexicon).unwrap();
//! assert_eq!(solution.words(), ["PLEA", "SAME", "SAMPLE"]);
//! println!("{} points", solution.score());
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod log;
