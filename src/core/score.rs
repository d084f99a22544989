//! Boggle point values
//!
//! A word's value depends only on its length.

use thiserror::Error;

/// Longest word length with a defined point value
pub const MAX_SCORED_LEN: usize = 16;

/// Point value indexed by word length
const POINTS: [u32; MAX_SCORED_LEN + 1] = [
    0, 0, 0, 1, 1, 2, 3, 5, 11, 11, 11, 11, 11, 11, 11, 11, 11,
];

/// Error raised when a word has no defined point value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("word '{word}' has {len} letters; the longest scorable word has {MAX_SCORED_LEN}")]
    WordTooLong { word: String, len: usize },
}

/// Point value of a single word
///
/// # Errors
/// Returns [`ScoreError::WordTooLong`] for words longer than [`MAX_SCORED_LEN`].
///
/// # Examples
/// ```
/// use boggler::core::word_score;
///
/// assert_eq!(word_score("BETA").unwrap(), 1);
/// assert_eq!(word_score("ALPHA").unwrap(), 2);
/// ```
pub fn word_score(word: &str) -> Result<u32, ScoreError> {
    let len = word.chars().count();
    POINTS
        .get(len)
        .copied()
        .ok_or_else(|| ScoreError::WordTooLong {
            word: word.to_string(),
            len,
        })
}

/// Sum of point values for every word
///
/// # Errors
/// Fails on the first word longer than [`MAX_SCORED_LEN`].
///
/// # Examples
/// ```
/// use boggler::core::score;
///
/// assert_eq!(score(&["ALPHA", "BETA", "ABSENTMINDED"]).unwrap(), 14);
/// ```
pub fn score<S: AsRef<str>>(words: &[S]) -> Result<u32, ScoreError> {
    words
        .iter()
        .map(|word| word_score(word.as_ref()))
        .sum()
}
