//! Interactive TUI interface
//!
//! Replays the board search cell by cell.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
