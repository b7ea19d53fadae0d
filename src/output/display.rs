//! Display functions for command results

use super::formatters::{dice_noun, expected_value_bar};
use crate::commands::{AnalysisResult, HoldsResult, ScoreResult, SolveResult};
use colored::Colorize;

/// The one-line summary for a solved hand
#[must_use]
pub fn strategy_line(result: &SolveResult) -> String {
    format!(
        "Best strategy for hand {} is to hold {} with expected score {}",
        result.hand, result.best.hold, result.best.expected_value
    )
}

/// Print the result of solving a hand
///
/// Plain mode prints only the summary line.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("{}", strategy_line(result));

    if verbose {
        let rerolled = result.hand.len() - result.best.hold.len();
        println!(
            "  Reroll:     {rerolled} {}",
            dice_noun(rerolled)
        );
        println!("  Candidates: {} distinct holds", result.candidates);
        println!(
            "  Time:       {:.2}ms",
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the ranked holds of a hand
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HOLD ANALYSIS:".bright_cyan().bold(),
        result.hand.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} distinct holds, current score {}",
        result.total_holds,
        result.current_score.to_string().bright_yellow()
    );
    println!();

    for (i, evaluation) in result.ranking.iter().enumerate() {
        let bar = expected_value_bar(
            evaluation.expected_value,
            result.hand.len(),
            result.hand.num_die_sides(),
            30,
        );
        let line = format!(
            "{:>3}. {:<20} [{}] {:>8.4}  (reroll {})",
            i + 1,
            evaluation.hold.to_string(),
            bar,
            evaluation.expected_value,
            evaluation.num_free_dice
        );
        if i == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
}

/// Print every distinct hold of a hand
pub fn print_holds_result(result: &HoldsResult) {
    println!(
        "Holds for hand {}: {} distinct ({} raw subsets)",
        result.hand,
        result.holds.len(),
        result.raw_subsets
    );
    for hold in &result.holds {
        println!("  {hold}");
    }
}

/// Print the upper-section score of a hand
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "Hand {} scores {}",
        result.hand,
        result.score.to_string().bright_yellow().bold()
    );
    for &(face, total) in &result.breakdown {
        let line = format!("  {face}s: {total}");
        if total == result.score {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}
