//! Sorted dictionary with three-way prefix classification
//!
//! The lexicon stores normalized words in ascending order so that a single
//! binary search answers both "is this a word?" and "can this still become a word?".

use std::fmt;

/// Default minimum word length (words must be longer than three letters)
pub const MIN_WORD_LEN: usize = 4;

/// Classification of a candidate string against a [`Lexicon`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// Neither a word nor the prefix of any word
    NoMatch,
    /// Exactly equal to a word in the lexicon
    ExactMatch,
    /// Not a word itself, but some word starts with it
    Prefix,
}

impl SearchResult {
    /// Whether traversal should keep extending this candidate
    #[inline]
    #[must_use]
    pub const fn is_viable(self) -> bool {
        matches!(self, Self::ExactMatch | Self::Prefix)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no match"),
            Self::ExactMatch => write!(f, "match"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

/// Sorted, deduplicated set of legal words
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
    min_len: usize,
}

impl Lexicon {
    /// Build a lexicon using the default minimum word length
    ///
    /// Entries shorter than [`MIN_WORD_LEN`] or containing anything other than
    /// ASCII letters are dropped. Kept entries are uppercased and sorted.
    ///
    /// # Examples
    /// ```
    /// use boggler::core::Lexicon;
    ///
    /// let lexicon = Lexicon::new(["gamma", "alpha", "am", "de novo"]);
    /// assert_eq!(lexicon.words(), ["ALPHA", "GAMMA"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_min_len(words, MIN_WORD_LEN)
    }

    /// Build a lexicon keeping words of at least `min_len` letters
    pub fn with_min_len<I, S>(words: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw_count = 0usize;
        let mut words: Vec<String> = words
            .into_iter()
            .inspect(|_| raw_count += 1)
            .filter_map(|word| {
                let word = word.as_ref();
                is_allowed(word, min_len).then(|| word.to_ascii_uppercase())
            })
            .collect();

        words.sort_unstable();
        words.dedup();

        log::debug!(
            "Built lexicon: kept {} of {raw_count} entries (min length {min_len})",
            words.len()
        );

        Self { words, min_len }
    }

    /// Classify a candidate as a word, a viable prefix, or a dead end
    ///
    /// `candidate` is expected to be uppercase; the traversal never passes an
    /// empty string.
    ///
    /// # Examples
    /// ```
    /// use boggler::core::{Lexicon, SearchResult};
    ///
    /// let lexicon = Lexicon::new(["ALPHA", "BETA", "GAMMA"]);
    /// assert_eq!(lexicon.classify("ALPHA"), SearchResult::ExactMatch);
    /// assert_eq!(lexicon.classify("BE"), SearchResult::Prefix);
    /// assert_eq!(lexicon.classify("FOX"), SearchResult::NoMatch);
    /// ```
    #[must_use]
    pub fn classify(&self, candidate: &str) -> SearchResult {
        match self
            .words
            .binary_search_by(|word| word.as_str().cmp(candidate))
        {
            Ok(_) => SearchResult::ExactMatch,
            Err(low) => match self.words.get(low) {
                Some(word) if word.starts_with(candidate) => SearchResult::Prefix,
                _ => SearchResult::NoMatch,
            },
        }
    }

    /// All words starting with `prefix`, in order
    ///
    /// Includes `prefix` itself when it is a word.
    #[must_use]
    pub fn completions(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|word| word.as_str() < prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|word| word.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }

    /// Whether `word` is in the lexicon
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.classify(word) == SearchResult::ExactMatch
    }

    /// The sorted words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Minimum word length used when this lexicon was built
    #[inline]
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }
}

/// Is `word` a legal entry: long enough and made only of ASCII letters
#[must_use]
pub fn is_allowed(word: &str, min_len: usize) -> bool {
    word.len() >= min_len && !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greek() -> Lexicon {
        Lexicon::new(["ALPHA", "BETA", "GAMMA"])
    }

    #[test]
    fn build_filters_and_sorts() {
        let lexicon = Lexicon::new([
            "ALPHA",
            "BETA",
            "DELTA",
            "GAMMA",
            "OMEGA",
            "am",
            "de novo",
            "about-face",
        ]);
        assert_eq!(
            lexicon.words(),
            ["ALPHA", "BETA", "DELTA", "GAMMA", "OMEGA"]
        );
    }

    #[test]
    fn build_normalizes_to_uppercase() {
        let lexicon = Lexicon::new(["filter", "Omega", "beta"]);
        assert_eq!(lexicon.words(), ["BETA", "FILTER", "OMEGA"]);
    }

    #[test]
    fn build_removes_duplicates() {
        let lexicon = Lexicon::new(["beta", "BETA", "Beta", "alpha"]);
        assert_eq!(lexicon.words(), ["ALPHA", "BETA"]);
    }

    #[test]
    fn build_rejects_non_ascii_letters() {
        let lexicon = Lexicon::new(["café", "naïve", "plain", "x-ray", "abc1"]);
        assert_eq!(lexicon.words(), ["PLAIN"]);
    }

    #[test]
    fn build_rejects_surrounding_whitespace() {
        let lexicon = Lexicon::new([" beta", "gamma\t", "delta\n"]);
        assert!(lexicon.is_empty());
    }

    #[test]
    fn build_with_custom_min_len() {
        let lexicon = Lexicon::with_min_len(["am", "amp", "ample"], 3);
        assert_eq!(lexicon.words(), ["AMP", "AMPLE"]);
        assert_eq!(lexicon.min_len(), 3);
    }

    #[test]
    fn allowed_rules() {
        assert!(!is_allowed("am", MIN_WORD_LEN)); // Too short
        assert!(!is_allowed("axe", MIN_WORD_LEN)); // Still too short
        assert!(!is_allowed("de novo", MIN_WORD_LEN)); // Non-alphabetic
        assert!(!is_allowed("about-face", MIN_WORD_LEN)); // Non-alphabetic
        assert!(!is_allowed("", 0));
        assert!(is_allowed("axle", MIN_WORD_LEN));
    }

    #[test]
    fn classify_exact_match() {
        assert_eq!(greek().classify("ALPHA"), SearchResult::ExactMatch);
        assert_eq!(greek().classify("GAMMA"), SearchResult::ExactMatch);
    }

    #[test]
    fn classify_prefix() {
        assert_eq!(greek().classify("BE"), SearchResult::Prefix);
        assert_eq!(greek().classify("A"), SearchResult::Prefix);
        assert_eq!(greek().classify("GAMM"), SearchResult::Prefix);
    }

    #[test]
    fn classify_no_match() {
        assert_eq!(greek().classify("FOX"), SearchResult::NoMatch);
        assert_eq!(greek().classify("ZZZZ"), SearchResult::NoMatch);
        assert_eq!(greek().classify("ALPHAS"), SearchResult::NoMatch);
        assert_eq!(greek().classify("AA"), SearchResult::NoMatch);
    }

    #[test]
    fn classify_word_that_is_also_prefix() {
        let lexicon = Lexicon::new(["PLEA", "PLEAD", "PLEAS"]);
        assert_eq!(lexicon.classify("PLEA"), SearchResult::ExactMatch);
        assert_eq!(lexicon.classify("PLE"), SearchResult::Prefix);
    }

    #[test]
    fn empty_lexicon_matches_nothing() {
        let lexicon = Lexicon::new(Vec::<String>::new());
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.classify("A"), SearchResult::NoMatch);
        assert_eq!(lexicon.classify("ALPHA"), SearchResult::NoMatch);
    }

    #[test]
    fn exact_match_iff_present() {
        let lexicon = Lexicon::new(["ALPHA", "ALPHABET", "BETA", "DELTA"]);
        for candidate in ["ALPHA", "ALPHAB", "ALPHABET", "BET", "BETA", "DELTAS", "Q"] {
            let present = lexicon.words().iter().any(|w| w == candidate);
            assert_eq!(
                lexicon.classify(candidate) == SearchResult::ExactMatch,
                present,
                "candidate {candidate}"
            );
        }
    }

    #[test]
    fn no_match_is_closed_under_extension() {
        let lexicon = Lexicon::new(["ALPHA", "BETA", "GAMMA", "OMEGA"]);
        for dead in ["AB", "BEX", "Z", "OMEGAS"] {
            assert_eq!(lexicon.classify(dead), SearchResult::NoMatch);
            for suffix in ["A", "E", "TA", "ZZ"] {
                let extended = format!("{dead}{suffix}");
                assert_eq!(
                    lexicon.classify(&extended),
                    SearchResult::NoMatch,
                    "{extended} should stay dead"
                );
            }
        }
    }

    #[test]
    fn completions_of_prefix() {
        let lexicon = Lexicon::new(["PLEA", "PLEAD", "PLEAS", "PLEAT", "SAMPLE"]);
        assert_eq!(lexicon.completions("PLEA"), ["PLEA", "PLEAD", "PLEAS", "PLEAT"]);
        assert_eq!(lexicon.completions("SAM"), ["SAMPLE"]);
        assert!(lexicon.completions("ZEBRA").is_empty());
    }

    #[test]
    fn viability() {
        assert!(SearchResult::ExactMatch.is_viable());
        assert!(SearchResult::Prefix.is_viable());
        assert!(!SearchResult::NoMatch.is_viable());
    }
}
