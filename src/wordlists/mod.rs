//! Word lists for Boggle solving
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
