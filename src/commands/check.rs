//! Word check command
//!
//! Classifies a single candidate against the lexicon and reports its point value.

use crate::core::{Lexicon, SearchResult, is_allowed, word_score};

/// Most completions reported for a prefix
const MAX_COMPLETIONS: usize = 10;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub status: SearchResult,
    pub legal: bool,
    pub points: Option<u32>,
    /// What a legal-length non-word would score if it were in the lexicon
    pub hypothetical_points: Option<u32>,
    pub completion_count: usize,
    pub completions: Vec<String>,
}

/// Classify `word` against the lexicon
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything other than A-Z.
pub fn check_word(word: &str, lexicon: &Lexicon) -> Result<CheckResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }
    if let Some(ch) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(format!("Invalid word: '{ch}' is not a letter"));
    }

    let word = word.to_ascii_uppercase();
    let status = lexicon.classify(&word);
    let legal = is_allowed(&word, lexicon.min_len());
    let score = word_score(&word).ok();
    let (points, hypothetical_points) = match status {
        SearchResult::ExactMatch => (score, None),
        _ if legal => (None, score),
        _ => (None, None),
    };

    let all_completions = lexicon.completions(&word);
    let completions = all_completions
        .iter()
        .take(MAX_COMPLETIONS)
        .cloned()
        .collect();

    Ok(CheckResult {
        word,
        status,
        legal,
        points,
        hypothetical_points,
        completion_count: all_completions.len(),
        completions,
    })
}
