//! Integration tests for the Boggle solver.
//!
//! These tests drive the public API end to end: building a lexicon from the
//! embedded dictionary, solving generated boards and checking the results
//! against an independent word-by-word path search.

use boggler::core::{Board, Lexicon, SearchResult, score};
use boggler::solver::{Solver, TraceEvent, TraceRecorder, solve};
use boggler::wordlists::DICTIONARY;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Whether `word` can be spelled by a self-avoiding path of adjacent cells
fn is_traceable(grid: &[Vec<char>], word: &[char]) -> bool {
    fn extend(
        grid: &[Vec<char>],
        used: &mut Vec<Vec<bool>>,
        row: usize,
        col: usize,
        rest: &[char],
    ) -> bool {
        let Some((&next, tail)) = rest.split_first() else {
            return true;
        };
        for d_row in -1isize..=1 {
            for d_col in -1isize..=1 {
                let (Some(r), Some(c)) = (
                    row.checked_add_signed(d_row),
                    col.checked_add_signed(d_col),
                ) else {
                    continue;
                };
                if r >= grid.len() || c >= grid[r].len() || used[r][c] || grid[r][c] != next {
                    continue;
                }
                used[r][c] = true;
                let found = extend(grid, used, r, c, tail);
                used[r][c] = false;
                if found {
                    return true;
                }
            }
        }
        false
    }

    let Some((&first, rest)) = word.split_first() else {
        return false;
    };
    let mut used = vec![vec![false; grid.first().map_or(0, Vec::len)]; grid.len()];
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            if grid[row][col] == first {
                used[row][col] = true;
                let found = extend(grid, &mut used, row, col, rest);
                used[row][col] = false;
                if found {
                    return true;
                }
            }
        }
    }
    false
}

fn grid_of(board: &Board) -> Vec<Vec<char>> {
    board
        .row_slices()
        .map(|row| row.iter().map(|&b| char::from(b)).collect())
        .collect()
}

#[cfg(test)]
mod worked_examples {
    use super::*;

    #[test]
    fn sample_board_three_letter_words() {
        let words = [
            "amp", "ample", "axe", "axle", "elm", "exam", "lea", "max", "pea", "plea", "same",
            "sample", "sax",
        ];
        let lexicon = Lexicon::with_min_len(words, 3);
        let mut board = Board::new(4, 4, "PLXXMEXXXAXXSXXX").unwrap();

        let solution = solve(&mut board, &lexicon).unwrap();

        assert_eq!(
            solution.words(),
            [
                "AMP", "AMPLE", "AXE", "AXLE", "ELM", "EXAM", "LEA", "MAX", "PEA", "PLEA", "SAME",
                "SAMPLE", "SAX"
            ]
        );
        assert_eq!(solution.score(), score(solution.words()).unwrap());
    }

    #[test]
    fn greek_lexicon() {
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
        assert_eq!(lexicon.classify("ALPHA"), SearchResult::ExactMatch);
        assert_eq!(lexicon.classify("BE"), SearchResult::Prefix);
        assert_eq!(lexicon.classify("FOX"), SearchResult::NoMatch);
        assert_eq!(lexicon.classify("ZZZZ"), SearchResult::NoMatch);
    }

    #[test]
    fn score_example() {
        assert_eq!(score(&["ALPHA", "BETA", "ABSENTMINDED"]).unwrap(), 14);
    }
}

#[cfg(test)]
mod random_boards {
    use super::*;

    #[test]
    fn solution_equals_traceable_lexicon_words() {
        let lexicon = Lexicon::new(DICTIONARY);
        let solver = Solver::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..25 {
            let mut board = Board::random(4, 4, &mut rng).unwrap();
            let grid = grid_of(&board);

            let solution = solver.solve(&mut board).unwrap();

            let expected: Vec<&String> = lexicon
                .words()
                .iter()
                .filter(|word| is_traceable(&grid, &word.chars().collect::<Vec<_>>()))
                .collect();
            let actual: Vec<&String> = solution.iter().collect();
            assert_eq!(actual, expected, "board {}", board.letters());
        }
    }

    #[test]
    fn boards_are_restored_and_output_sorted() {
        let lexicon = Lexicon::with_min_len(DICTIONARY, 3);
        let solver = Solver::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(7);

        for (rows, cols) in [(4, 4), (3, 5), (5, 5), (1, 6), (2, 2)] {
            let mut board = Board::random(rows, cols, &mut rng).unwrap();
            let original = board.clone();

            let solution = solver.solve(&mut board).unwrap();

            assert_eq!(board, original);
            assert!(board.is_pristine());
            assert!(solution.words().windows(2).all(|pair| pair[0] < pair[1]));
            assert!(solution.iter().all(|word| lexicon.contains(word)));
            assert_eq!(solution.score(), score(solution.words()).unwrap());
        }
    }

    #[test]
    fn trace_paths_never_exceed_board() {
        let lexicon = Lexicon::new(DICTIONARY);
        let solver = Solver::new(&lexicon);
        let mut board = Board::random(4, 4, &mut StdRng::seed_from_u64(3)).unwrap();
        let mut recorder = TraceRecorder::new();

        solver
            .solve_with_observer(&mut board, &mut recorder)
            .unwrap();

        let mut depth = 0usize;
        let mut max_depth = 0usize;
        for event in recorder.events() {
            match event {
                TraceEvent::Occupied { row, col } => {
                    assert!(*row < 4 && *col < 4);
                    depth += 1;
                    max_depth = max_depth.max(depth);
                }
                TraceEvent::Released { .. } => depth -= 1,
                TraceEvent::Found(_) => {}
            }
        }
        assert_eq!(depth, 0);
        assert!(max_depth <= 16);
    }
}
