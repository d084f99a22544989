//! Display functions for command results

use super::formatters::{board_grid, create_progress_bar, word_columns};
use crate::commands::{BenchmarkResult, CheckResult, SolveResult};
use crate::core::SearchResult;
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let solution = &result.solution;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}x{}",
        result.board.rows().to_string().bright_yellow().bold(),
        result.board.cols().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("{}", board_grid(&result.board));

    if solution.is_empty() {
        println!("\n{}", "No words found on this board.".yellow());
        return;
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for line in word_columns(solution.words(), 6) {
        println!("   {line}");
    }

    if verbose {
        println!("\n📈 {}", "By length:".bright_cyan().bold());
        print_length_distribution(&solution.length_distribution());
        println!(
            "\n   Search time:  {:.2}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ {} words, {} points",
            solution.len(),
            solution.score()
        )
        .green()
        .bold()
    );
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD CHECK:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let status = match result.status {
        SearchResult::ExactMatch => "word".green().bold(),
        SearchResult::Prefix => "prefix of a word".yellow().bold(),
        SearchResult::NoMatch => "no match".red().bold(),
    };
    println!("\n   Status:       {status}");

    match (result.points, result.hypothetical_points) {
        (Some(points), _) => println!("   Points:       {}", points.to_string().bright_yellow()),
        (None, Some(points)) => {
            println!("   Points:       - (would score {points} if it were a word)");
        }
        (None, None) => println!("   Points:       -"),
    }

    if result.completion_count > 0 {
        println!(
            "\n🔤 {} ({} total)",
            "Completions:".bright_cyan().bold(),
            result.completion_count
        );
        for line in word_columns(&result.completions, 5) {
            println!("   {line}");
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.total_boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    println!(
        "   Empty boards:     {}",
        format!("{}", result.empty_boards).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((letters, score)) = &result.best_board {
        println!(
            "   Best board:       {} ({score} points)",
            letters.bright_green()
        );
    }

    if !result.length_distribution.is_empty() {
        println!("\n📈 {}", "Words by length:".bright_cyan().bold());
        print_length_distribution(&result.length_distribution);
    }
}

fn print_length_distribution(distribution: &BTreeMap<usize, usize>) {
    let total: usize = distribution.values().sum();
    for (len, &count) in distribution {
        let pct = count as f64 / total.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
