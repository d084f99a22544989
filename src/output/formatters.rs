//! Formatting utilities for terminal output

use crate::core::Board;

/// Render a board as a boxed grid of letters
///
/// ```text
/// ┌───┬───┐
/// │ A │ B │
/// ├───┼───┤
/// │ C │ D │
/// └───┴───┘
/// ```
#[must_use]
pub fn board_grid(board: &Board) -> String {
    if board.is_empty() {
        return "(empty board)".to_string();
    }

    let cols = board.cols();
    let border = |left: &str, mid: &str, right: &str| {
        format!("{left}{}{right}", vec!["───"; cols].join(mid))
    };

    let mut lines = vec![border("┌", "┬", "┐")];
    for (i, row) in board.row_slices().enumerate() {
        if i > 0 {
            lines.push(border("├", "┼", "┤"));
        }
        let cells: Vec<String> = row
            .iter()
            .map(|&letter| format!(" {} ", char::from(letter)))
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }
    lines.push(border("└", "┴", "┘"));

    lines.join("\n")
}

/// Lay words out in fixed-width columns
#[must_use]
pub fn word_columns(words: &[String], per_line: usize) -> Vec<String> {
    let width = words.iter().map(String::len).max().unwrap_or(0);
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
