//! Expected score of a hold
//!
//! Averages the upper-section score over every equally likely reroll of the
//! free dice.

use super::sequences::gen_all_sequences;
use crate::core::score;

/// Compute the expected score of keeping `held_dice` and rolling the rest
///
/// # Parameters
/// - `held_dice`: dice kept back
/// - `num_die_sides`: sides on each die (faces `1..=num_die_sides`), at least 1
/// - `num_free_dice`: dice rerolled
///
/// With no free dice this is just the score of `held_dice`.
///
/// # Examples
/// ```
/// use yahtzee_planner::solver::expected_value;
///
/// assert_eq!(expected_value(&[6, 6, 6], 6, 0), 18.0);
/// // One fresh d6 with nothing held: mean face is 3.5
/// assert_eq!(expected_value(&[], 6, 1), 3.5);
/// ```
#[must_use]
pub fn expected_value(held_dice: &[u8], num_die_sides: u8, num_free_dice: usize) -> f64 {
    debug_assert!(num_die_sides >= 1, "Dice must have at least one side");

    let outcomes: Vec<u8> = (1..=num_die_sides).collect();
    let sequences = gen_all_sequences(&outcomes, num_free_dice);

    let mut hand = Vec::with_capacity(held_dice.len() + num_free_dice);
    let total: u64 = sequences
        .iter()
        .map(|rolled| {
            hand.clear();
            hand.extend_from_slice(held_dice);
            hand.extend_from_slice(rolled);
            u64::from(score(&hand))
        })
        .sum();

    total as f64 / sequences.len() as f64
}
