//! Backtracking board search

use super::observer::{CellObserver, NoopObserver};
use crate::core::{Board, Lexicon, ScoreError, SearchResult, score};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// The eight king-move offsets around a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Words found on a board together with their total score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
    score: u32,
}

impl Solution {
    /// Build a solution from sorted, distinct words
    ///
    /// # Errors
    /// Returns `ScoreError` if any word is too long to score.
    pub fn from_words(words: Vec<String>) -> Result<Self, ScoreError> {
        let score = score(&words)?;
        Ok(Self { words, score })
    }

    /// Found words in ascending order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
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

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of found words for each word length
    #[must_use]
    pub fn length_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for word in &self.words {
            *distribution.entry(word.len()).or_insert(0) += 1;
        }
        distribution
    }
}

impl<'s> IntoIterator for &'s Solution {
    type Item = &'s String;
    type IntoIter = std::slice::Iter<'s, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Main Boggle solver
///
/// Holds the lexicon used to prune the search; boards are supplied per call.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Find and score every word on the board
    ///
    /// The board is marked during the search and fully restored before returning.
    ///
    /// # Errors
    /// Returns `ScoreError` if a found word is longer than the scoring table allows.
    ///
    /// # Examples
    /// ```
    /// use boggler::core::{Board, Lexicon};
    /// use boggler::solver::Solver;
    ///
    /// let lexicon = Lexicon::new(["plea", "sample", "maple"]);
    /// let mut board = Board::new(4, 4, "PLXXMEXXXAXXSXXX").unwrap();
    ///
    /// let solution = Solver::new(&lexicon).solve(&mut board).unwrap();
    /// assert_eq!(solution.words(), ["PLEA", "SAMPLE"]);
    /// assert_eq!(solution.score(), 4);
    /// ```
    pub fn solve(&self, board: &mut Board) -> Result<Solution, ScoreError> {
        self.solve_with_observer(board, &mut NoopObserver)
    }

    /// Like [`Solver::solve`], reporting path changes to `observer`
    ///
    /// # Errors
    /// Returns `ScoreError` if a found word is longer than the scoring table allows.
    pub fn solve_with_observer<O: CellObserver + ?Sized>(
        &self,
        board: &mut Board,
        observer: &mut O,
    ) -> Result<Solution, ScoreError> {
        let words = self.find_words(board, observer);
        let solution = Solution::from_words(words)?;

        log::debug!(
            "Solved {}x{} board: {} words, {} points",
            board.rows(),
            board.cols(),
            solution.len(),
            solution.score()
        );

        Ok(solution)
    }

    /// Every distinct word traceable on the board, sorted ascending
    pub fn find_words<O: CellObserver + ?Sized>(
        &self,
        board: &mut Board,
        observer: &mut O,
    ) -> Vec<String> {
        let (rows, cols) = (board.rows(), board.cols());
        let capacity = board.size();
        let mut traversal = Traversal {
            board,
            lexicon: self.lexicon,
            observer,
            prefix: String::with_capacity(capacity),
            found: FxHashSet::default(),
        };

        for row in 0..rows {
            for col in 0..cols {
                traversal.visit(row as isize, col as isize);
                log::trace!(
                    "Start ({row}, {col}) done, {} words so far",
                    traversal.found.len()
                );
            }
        }

        let mut words: Vec<String> = traversal.found.into_iter().collect();
        words.sort_unstable();
        words
    }
}

/// Find and score every word on `board` using `lexicon`
///
/// # Errors
/// Returns `ScoreError` if a found word is longer than the scoring table allows.
pub fn solve(board: &mut Board, lexicon: &Lexicon) -> Result<Solution, ScoreError> {
    Solver::new(lexicon).solve(board)
}

/// State threaded through one search
///
/// `prefix` always spells the letters of the cells currently marked in-use,
/// in path order.
struct Traversal<'b, 'a, O: ?Sized> {
    board: &'b mut Board,
    lexicon: &'a Lexicon,
    observer: &'b mut O,
    prefix: String,
    found: FxHashSet<String>,
}

impl<O: CellObserver + ?Sized> Traversal<'_, '_, O> {
    fn visit(&mut self, row: isize, col: isize) {
        let Some(idx) = self.board.available(row, col) else {
            return;
        };

        let letter = self.board.cell(idx);
        self.prefix.push(char::from(letter));

        let status = self.lexicon.classify(&self.prefix);

        if status == SearchResult::ExactMatch && !self.found.contains(&self.prefix) {
            self.found.insert(self.prefix.clone());
            self.observer.found(&self.prefix);
        }

        if status.is_viable() {
            let (r, c) = (row as usize, col as usize);

            self.board.mark(idx);
            self.observer.occupied(r, c);

            for (d_row, d_col) in NEIGHBOR_OFFSETS {
                self.visit(row + d_row, col + d_col);
            }

            self.board.restore(idx, letter);
            self.observer.released(r, c);
        }

        self.prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::observer::{TraceEvent, TraceRecorder};

    const SAMPLE_WORDS: [&str; 13] = [
        "AMP", "AMPLE", "AXE", "AXLE", "ELM", "EXAM", "LEA", "MAX", "PEA", "PLEA", "SAME",
        "SAMPLE", "SAX",
    ];

    /// PLXX / MEXX / XAXX / XSXX
    fn sample_board() -> Board {
        Board::from_rows(&["PLXX", "MEXX", "XAXX", "XSXX"]).unwrap()
    }

    /// Sample words plus words that cannot be traced on the sample board
    fn sample_lexicon(min_len: usize) -> Lexicon {
        let distractors = ["MAPLE", "APPLE", "SEAM", "LAMP", "PALM", "AXES", "EXAMS", "MESA"];
        Lexicon::with_min_len(SAMPLE_WORDS.iter().chain(distractors.iter()), min_len)
    }

    #[test]
    fn finds_sample_words() {
        let lexicon = sample_lexicon(3);
        let mut board = sample_board();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(solution.words(), SAMPLE_WORDS);
    }

    #[test]
    fn moving_s_along_the_bottom_row_keeps_the_words() {
        let lexicon = sample_lexicon(3);
        let mut board = Board::new(4, 4, "PLXXMEXXXAXXSXXX").unwrap();
        assert_ne!(board, sample_board());

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(solution.words(), SAMPLE_WORDS);
    }

    #[test]
    fn default_lexicon_drops_short_words() {
        let lexicon = sample_lexicon(4);
        let mut board = sample_board();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(
            solution.words(),
            ["AMPLE", "AXLE", "EXAM", "PLEA", "SAME", "SAMPLE"]
        );
        assert_eq!(solution.score(), 9);
    }

    #[test]
    fn board_is_restored_after_solve() {
        let lexicon = sample_lexicon(3);
        let mut board = sample_board();
        let original = board.clone();

        solve(&mut board, &lexicon).unwrap();

        assert!(board.is_pristine());
        assert_eq!(board, original);
    }

    #[test]
    fn match_keeps_exploring() {
        let lexicon = Lexicon::with_min_len(["AMP", "AMPLE"], 3);
        let mut board = sample_board();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(solution.words(), ["AMP", "AMPLE"]);
    }

    #[test]
    fn cells_are_not_reused_within_a_path() {
        let lexicon = Lexicon::with_min_len(["ABA", "ABAB"], 3);
        let mut board = Board::new(1, 2, "AB").unwrap();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert!(solution.is_empty());
    }

    #[test]
    fn repeated_letters_yield_one_word() {
        let lexicon = Lexicon::new(["AAAA"]);
        let mut board = Board::new(2, 2, "AAAA").unwrap();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(solution.words(), ["AAAA"]);
        assert_eq!(solution.score(), 1);
    }

    #[test]
    fn words_are_sorted_and_distinct() {
        let lexicon = sample_lexicon(3);
        let mut board = Board::new(4, 4, "PLEAMEAXXAXLSAME").unwrap();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert!(solution.words().windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!solution.is_empty());
    }

    #[test]
    fn empty_inputs_produce_empty_solution() {
        let empty_lexicon = Lexicon::new(Vec::<String>::new());
        let mut board = sample_board();
        let solution = solve(&mut board, &empty_lexicon).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.score(), 0);

        let lexicon = sample_lexicon(3);
        let mut empty_board = Board::new(0, 0, "").unwrap();
        let solution = solve(&mut empty_board, &lexicon).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.score(), 0);
    }

    #[test]
    fn unscorable_word_is_an_error() {
        let word = "ABCDEFGHIJKLMNOPQ";
        let lexicon = Lexicon::new([word]);
        let mut board = Board::new(1, 17, word).unwrap();

        let result = solve(&mut board, &lexicon);

        assert!(matches!(result, Err(ScoreError::WordTooLong { len: 17, .. })));
        assert!(board.is_pristine());
    }

    #[test]
    fn observer_events_are_balanced() {
        let lexicon = sample_lexicon(3);
        let mut board = sample_board();
        let mut recorder = TraceRecorder::new();

        Solver::new(&lexicon)
            .solve_with_observer(&mut board, &mut recorder)
            .unwrap();

        let mut path: Vec<(usize, usize)> = Vec::new();
        for event in recorder.events() {
            match event {
                TraceEvent::Occupied { row, col } => {
                    assert!(!path.contains(&(*row, *col)), "cell reused in one path");
                    path.push((*row, *col));
                }
                TraceEvent::Released { row, col } => {
                    assert_eq!(path.pop(), Some((*row, *col)), "release out of order");
                }
                TraceEvent::Found(_) => {}
            }
        }
        assert!(path.is_empty());
    }

    #[test]
    fn observer_does_not_change_outcome() {
        let lexicon = sample_lexicon(3);
        let mut board = sample_board();
        let mut recorder = TraceRecorder::new();

        let plain = Solver::new(&lexicon).solve(&mut board).unwrap();
        let observed = Solver::new(&lexicon)
            .solve_with_observer(&mut board, &mut recorder)
            .unwrap();

        assert_eq!(plain, observed);

        let mut found: Vec<String> = recorder
            .events()
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Found(word) => Some(word.clone()),
                _ => None,
            })
            .collect();
        found.sort();
        assert_eq!(found, plain.words());
    }

    #[test]
    fn length_distribution_counts_words() {
        let lexicon = sample_lexicon(3);
        let mut board = sample_board();

        let solution = solve(&mut board, &lexicon).unwrap();
        let distribution = solution.length_distribution();

        assert_eq!(distribution.get(&3), Some(&7));
        assert_eq!(distribution.get(&4), Some(&4));
        assert_eq!(distribution.get(&5), Some(&1));
        assert_eq!(distribution.get(&6), Some(&1));
    }
}
