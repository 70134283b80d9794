//! Display functions for command results

use super::formatters::{create_progress_bar, format_cell, format_count};
use crate::commands::{CandidateReport, ScoreReport};
use crate::core::Schema;
use crate::solver::{Board, SearchReport};
use colored::Colorize;

const CELL_WIDTH: usize = 5;
const CANDIDATES_PER_LINE: usize = 8;

/// Print a board with each cell's multiplier; multiplied cells are highlighted
/// and the wildcard cell is dimmed
pub fn print_board<const N: usize>(board: &Board<N>, schema: &Schema<N>) {
    for (row, candidate) in board.rows().iter().enumerate() {
        let mut line = String::from("   ");
        for (col, &letter) in candidate.word().letters().iter().enumerate() {
            let multiplier = schema.multiplier(row, col);
            let cell = format!(
                "{:<width$}",
                format_cell(char::from(letter), multiplier),
                width = CELL_WIDTH
            );
            let styled = if candidate.wildcard_column() == Some(col) {
                cell.to_lowercase().bright_black()
            } else if multiplier > 1 {
                cell.bright_yellow().bold()
            } else {
                cell.normal()
            };
            line.push_str(&styled.to_string());
        }
        println!("{}", line.trim_end());
    }
}

/// Print the outcome of a search
pub fn print_search_report<const N: usize>(report: &SearchReport<N>, schema: &Schema<N>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SEARCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    match &report.best {
        Some(best) => {
            println!("\n🏆 {}", "Best board:".bright_cyan().bold());
            print_board(&best.board, schema);
            println!(
                "\n   Score:            {}",
                best.score.to_string().bright_yellow().bold()
            );
        }
        None => println!("\n{}", "No valid board found.".red().bold()),
    }

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Candidate rows:   {}", report.pool_size);
    println!(
        "   Boards evaluated: {}",
        format_count(report.boards_evaluated)
    );
    // Precision loss is irrelevant for a ratio bar
    let bar = create_progress_bar(
        report.valid_boards as f64,
        report.boards_evaluated as f64,
        30,
    );
    println!(
        "   Valid boards:     [{}] {}",
        bar.green(),
        format_count(report.valid_boards)
    );
    println!(
        "   Chunks:           {} on {} threads",
        report.chunks, report.threads
    );
    println!("   Time taken:       {:.2}s", report.elapsed.as_secs_f64());
}

/// Print the candidate pool
pub fn print_candidates<const N: usize>(report: &CandidateReport<N>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CANDIDATE ROWS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Dictionary words: {}", report.dictionary_size);
    println!(
        "   Candidates:       {} ({} using the wildcard)",
        report.candidates.len().to_string().bright_yellow().bold(),
        report.wildcard_rows()
    );
    match report.search_space {
        Some(boards) => println!("   Boards to search: {}", format_count(boards)),
        None => println!("   Boards to search: {}", "too many to enumerate".red()),
    }

    if report.candidates.is_empty() {
        return;
    }

    println!();
    for line in report.candidates.chunks(CANDIDATES_PER_LINE) {
        let words: Vec<String> = line.iter().map(ToString::to_string).collect();
        println!("   {}", words.join("  "));
    }
}

/// Print the outcome of scoring a single board
pub fn print_score_report<const N: usize>(report: &ScoreReport<N>, schema: &Schema<N>) {
    println!();
    print_board(&report.board, schema);
    println!();

    for &row in &report.unknown_rows {
        println!(
            "{}",
            format!("⚠ Row {} is not a dictionary word", row + 1).yellow()
        );
    }

    match &report.outcome {
        Ok(score) => println!(
            "{} {}",
            "✅ Valid board, score:".green().bold(),
            score.to_string().bright_yellow().bold()
        ),
        Err(rejection) => println!("{} {rejection}", "❌ Invalid board:".red().bold()),
    }
}
