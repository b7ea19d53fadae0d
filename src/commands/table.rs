//! Strategy table - best hold for every possible hand
//!
//! Runs the planner against every distinct hand of a given size and
//! summarizes the results.

use super::SolveConfig;
use crate::core::{HandError, Hold};
use crate::solver::{StrategyResult, gen_all_sequences, strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Best hold for one hand
#[derive(Debug, Clone)]
pub struct TableEntry {
    pub hand: Hold,
    pub best: StrategyResult,
}

/// Statistics from solving every hand
#[derive(Debug)]
pub struct TableStatistics {
    pub num_dice: usize,
    pub num_die_sides: u8,
    pub total_hands: usize,
    pub mean_expected_value: f64,
    /// Hands where the best move is to keep every die
    pub keep_all: usize,
    /// Hands where the best move is to reroll every die
    pub reroll_all: usize,
    /// Entries sorted by expected value, best first
    pub entries: Vec<TableEntry>,
    pub total_time: Duration,
}

/// Every distinct hand of `num_dice` dice, in ascending order
///
/// Hands are unordered, so each is stored in canonical sorted form.
#[must_use]
pub fn distinct_hands(num_dice: usize, num_die_sides: u8) -> BTreeSet<Hold> {
    let outcomes: Vec<u8> = (1..=num_die_sides).collect();
    gen_all_sequences(&outcomes, num_dice)
        .into_iter()
        .map(Hold::from_dice)
        .collect()
}

/// Solve every distinct hand of `num_dice` dice
///
/// `show_progress` draws a progress bar on stderr.
///
/// # Errors
///
/// Returns an error if `num_dice` or the side count exceed the limits in
/// `limits`, or the die has no sides.
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a static string).
pub fn run_table(
    num_dice: usize,
    limits: &SolveConfig,
    show_progress: bool,
) -> Result<TableStatistics, HandError> {
    limits.check_limits(num_dice)?;

    let num_die_sides = limits.num_die_sides;
    let hands = distinct_hands(num_dice, num_die_sides);
    debug!(num_dice, num_die_sides, hands = hands.len(), "building strategy table");

    let pb = if show_progress {
        ProgressBar::new(hands.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut entries = Vec::with_capacity(hands.len());
    let mut total_value = 0.0;

    for (idx, hand) in hands.into_iter().enumerate() {
        let best = strategy(hand.dice(), num_die_sides);
        total_value += best.expected_value;
        entries.push(TableEntry { hand, best });

        if idx % 10 == 0 {
            let avg = total_value / entries.len() as f64;
            pb.set_message(format!("Avg EV: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let total_hands = entries.len();
    let keep_all = entries
        .iter()
        .filter(|e| e.best.hold.len() == e.hand.len())
        .count();
    let reroll_all = entries
        .iter()
        .filter(|e| e.best.hold.is_empty() && !e.hand.is_empty())
        .count();
    let mean_expected_value = if total_hands > 0 {
        total_value / total_hands as f64
    } else {
        0.0
    };

    entries.sort_by(|a, b| {
        b.best
            .expected_value
            .total_cmp(&a.best.expected_value)
            .then_with(|| a.hand.cmp(&b.hand))
    });

    Ok(TableStatistics {
        num_dice,
        num_die_sides,
        total_hands,
        mean_expected_value,
        keep_all,
        reroll_all,
        entries,
        total_time,
    })
}

/// Print strategy table statistics
pub fn print_table_statistics(stats: &TableStatistics, top: usize) {
    println!("\n{}", "═".repeat(70));
    println!(
        " Strategy Table: {} dice, {} sides ",
        stats.num_dice, stats.num_die_sides
    );
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Distinct hands:      {}", stats.total_hands);
    println!(
        "  Mean best EV:        {}",
        format!("{:.3}", stats.mean_expected_value)
            .bright_yellow()
            .bold()
    );
    println!("  Keep everything:     {}", stats.keep_all);
    println!("  Reroll everything:   {}", stats.reroll_all);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.entries.is_empty() {
        println!("\n✨ {}", "Strongest Hands".green().bold());
        for entry in stats.entries.iter().take(top) {
            println!(
                "  {:<20} hold {:<20} EV {:.3}",
                entry.hand.to_string(),
                entry.best.hold.to_string(),
                entry.best.expected_value
            );
        }

        println!("\n😰 {}", "Weakest Hands".yellow().bold());
        for entry in stats.entries.iter().rev().take(top) {
            println!(
                "  {:<20} hold {:<20} EV {:.3}",
                entry.hand.to_string(),
                entry.best.hold.to_string(),
                entry.best.expected_value
            );
        }
    }
}
