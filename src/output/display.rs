//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_markers};
use crate::commands::{AnalysisResult, FilterResult, ScoreResult, SelectResult};
use colored::Colorize;

/// Print the feedback of one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}: {} {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.secret.text().to_uppercase().bright_white().bold(),
        result.feedback.to_string().bright_yellow().bold(),
        feedback_markers(result.feedback)
    );

    if result.feedback.is_win() {
        println!("{}", "✅ Guess matches the secret".green().bold());
    }
}

/// Print the surviving candidates of a filter
pub fn print_filter_result(result: &FilterResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Filter: {} {} {}",
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.feedback,
        feedback_markers(result.feedback)
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  Candidates: {} → {}",
        result.candidates_before,
        result.remaining.len()
    );

    if result.remaining.is_empty() {
        println!(
            "\n{}",
            "❌ No candidates remain! The feedback may be incorrect."
                .red()
                .bold()
        );
        return;
    }

    println!();
    for candidate in &result.remaining {
        println!("  • {}", candidate.text().to_uppercase());
    }
}

/// Print a suggested guess
pub fn print_select_result(result: &SelectResult) {
    println!(
        "\n📊 Suggested guess: {}",
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("   Candidates:   {}", result.total_candidates);

    match result.worst_case {
        Some(worst) => {
            println!("   Sampled:      {} guesses", result.sampled);
            println!("   Worst case:   {worst} candidates");
        }
        None => println!("   {}", "(first candidate, search skipped)".bright_black()),
    }
}

/// Print the feedback partition of a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    if !result.in_pool {
        println!("   {}", "(guess cannot be the secret)".bright_black());
    }
    println!(
        "   Worst case:  {}",
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.2} candidates remain",
        result.expected_remaining
    );

    println!("\n📈 {}", "Partition:".bright_cyan().bold());
    for &(feedback, count) in &result.buckets {
        let bar = create_progress_bar(count as f64, result.total_candidates as f64, 30);
        println!(
            "   {} {}  {} {count:4}",
            feedback,
            feedback_markers(feedback),
            bar.green()
        );
    }
}
