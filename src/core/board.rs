//! Boggle board representation
//!
//! A rectangular grid of uppercase ASCII letters stored row-major. While a
//! search is running, cells on the current path hold the [`IN_USE`] marker
//! instead of their letter.

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Marker stored in a cell while it is part of the current path
pub const IN_USE: u8 = b'@';

/// Relative English letter frequencies (per 10,000), A through Z
const LETTER_WEIGHTS: [u32; 26] = [
    817, 149, 278, 425, 1270, 223, 202, 609, 697, 15, 77, 403, 241, 675, 751, 193, 10, 599, 633,
    906, 276, 98, 236, 15, 197, 7,
];

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("a {rows}x{cols} board needs exactly {expected} letters, got {actual}")]
    WrongLetterCount {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    #[error("board letters must be A-Z, found '{ch}'")]
    NonAlphabetic { ch: char },
    #[error("a {rows}x{cols} board has too many cells")]
    TooLarge { rows: usize, cols: usize },
    #[error("row {row} has {actual} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// An R x C grid of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Number of cells on a `rows` x `cols` board
    ///
    /// # Errors
    /// Returns [`BoardError::TooLarge`] if the cell count overflows `usize`.
    pub const fn cell_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
        match rows.checked_mul(cols) {
            Some(count) => Ok(count),
            None => Err(BoardError::TooLarge { rows, cols }),
        }
    }

    /// Unpack a flat string of letters into a `rows` x `cols` board
    ///
    /// Letters fill the board row by row and are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - `rows * cols` overflows
    /// - The number of letters is not exactly `rows * cols`
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use boggler::core::Board;
    ///
    /// let board = Board::new(4, 4, "abcdefghijklmnop").unwrap();
    /// assert_eq!(board.letter(1, 2), Some('G'));
    ///
    /// assert!(Board::new(4, 4, "abc").is_err());
    /// assert!(Board::new(2, 2, "ab1d").is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, letters: &str) -> Result<Self, BoardError> {
        let expected = Self::cell_count(rows, cols)?;
        let actual = letters.chars().count();
        if actual != expected {
            return Err(BoardError::WrongLetterCount {
                rows,
                cols,
                expected,
                actual,
            });
        }

        let cells = letters
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    Ok(ch.to_ascii_uppercase() as u8)
                } else {
                    Err(BoardError::NonAlphabetic { ch })
                }
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { rows, cols, cells })
    }

    /// Build a board from one string per row
    ///
    /// # Errors
    /// Returns [`BoardError::RaggedRow`] if rows differ in length, or
    /// [`BoardError::NonAlphabetic`] for any non-letter.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());

        for (row, letters) in rows.iter().enumerate() {
            let actual = letters.as_ref().chars().count();
            if actual != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    actual,
                });
            }
        }

        let letters: String = rows.iter().map(AsRef::as_ref).collect();
        Self::new(rows.len(), cols, &letters)
    }

    /// Generate a board with letters drawn by English letter frequency
    ///
    /// # Errors
    /// Returns [`BoardError::TooLarge`] if `rows * cols` overflows.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, BoardError> {
        let count = Self::cell_count(rows, cols)?;
        let cumulative: Vec<u32> = LETTER_WEIGHTS
            .iter()
            .scan(0, |total, &weight| {
                *total += weight;
                Some(*total)
            })
            .collect();
        let total = cumulative.last().copied().unwrap_or(1);

        let cells = (0..count)
            .map(|_| {
                let roll = rng.random_range(0..total);
                let index = cumulative.partition_point(|&bound| bound <= roll);
                b'A' + index as u8
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter at a position, or `None` if out of bounds or in use
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .filter(|&cell| cell != IN_USE)
            .map(char::from)
    }

    /// Whether the cell is currently on the search path
    #[must_use]
    pub fn is_in_use(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .is_some_and(|idx| self.cells[idx] == IN_USE)
    }

    /// Whether no cell carries the in-use marker
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        !self.cells.contains(&IN_USE)
    }

    /// All cells as a row-major string
    #[must_use]
    pub fn letters(&self) -> String {
        self.cells.iter().copied().map(char::from).collect()
    }

    /// Iterate rows as byte slices
    pub fn row_slices(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Index of an available cell given signed coordinates
    ///
    /// Returns `None` when the position is off the board or already in use.
    #[inline]
    pub(crate) fn available(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.index(row, col).filter(|&idx| self.cells[idx] != IN_USE)
    }

    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> u8 {
        self.cells[idx]
    }

    /// Place the in-use marker, returning the letter it replaced
    #[inline]
    pub(crate) fn mark(&mut self, idx: usize) -> u8 {
        std::mem::replace(&mut self.cells[idx], IN_USE)
    }

    #[inline]
    pub(crate) fn restore(&mut self, idx: usize, letter: u8) {
        self.cells[idx] = letter;
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|&c| char::from(c).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
