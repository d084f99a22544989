//! Dictionary loading utilities
//!
//! Provides functions to read raw word lists from files or the embedded constant.
//! Filtering and normalization are left to [`Lexicon`].

use crate::core::Lexicon;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw dictionary entries from a file
///
/// Returns one entry per non-blank line, trimmed. Entries are not validated.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggler::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/dict.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::info!("Read {} entries from {}", entries.len(), path.display());

    Ok(entries)
}

/// Build a lexicon from a dictionary file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn lexicon_from_file<P: AsRef<Path>>(path: P, min_len: usize) -> io::Result<Lexicon> {
    load_from_file(path).map(|entries| Lexicon::with_min_len(entries, min_len))
}

/// Build a lexicon from an embedded string slice
///
/// # Examples
/// ```
/// use boggler::core::MIN_WORD_LEN;
/// use boggler::wordlists::loader::lexicon_from_slice;
/// use boggler::wordlists::DICTIONARY;
///
/// let lexicon = lexicon_from_slice(DICTIONARY, MIN_WORD_LEN);
/// assert!(lexicon.contains("SAMPLE"));
/// ```
#[must_use]
pub fn lexicon_from_slice(slice: &[&str], min_len: usize) -> Lexicon {
    Lexicon::with_min_len(slice, min_len)
}
