//! Boggle search engine
//!
//! Backtracking traversal of the board, pruned by lexicon prefix lookups.

mod engine;
pub mod observer;

pub use engine::{Solution, Solver, solve};
pub use observer::{CellObserver, NoopObserver, TraceEvent, TraceRecorder};
