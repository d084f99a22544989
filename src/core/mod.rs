//! Core domain types for Boggle
//!
//! The board, the lexicon and the scoring table. Nothing here performs I/O.

mod board;
mod lexicon;
mod score;

pub use board::{Board, BoardError, IN_USE};
pub use lexicon::{Lexicon, MIN_WORD_LEN, SearchResult, is_allowed};
pub use score::{MAX_SCORED_LEN, ScoreError, score, word_score};
