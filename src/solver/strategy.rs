//! Best-hold search
//!
//! Scores every candidate hold of a hand by expected value and picks the best.

use super::expected::expected_value;
use super::holds::gen_all_holds;
use crate::core::Hold;
use rayon::prelude::*;
use std::cmp::Ordering;

/// The best action for a hand: which dice to keep and what it is worth
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyResult {
    /// Expected upper-section score after rerolling the other dice
    pub expected_value: f64,
    /// Dice to keep
    pub hold: Hold,
}

impl Default for StrategyResult {
    fn default() -> Self {
        Self {
            expected_value: 0.0,
            hold: Hold::EMPTY,
        }
    }
}

/// Expected value of one candidate hold
#[derive(Debug, Clone, PartialEq)]
pub struct HoldEvaluation {
    pub hold: Hold,
    pub expected_value: f64,
    pub num_free_dice: usize,
}

impl HoldEvaluation {
    /// Ranking order: higher expected value first, then ascending hold
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .expected_value
            .total_cmp(&self.expected_value)
            .then_with(|| self.hold.cmp(&other.hold))
    }
}

/// Evaluate every distinct hold of `hand`, best first
///
/// Holds with equal expected value are ordered by ascending hold, so the
/// ranking is identical across runs and thread counts.
///
/// # Examples
/// ```
/// use yahtzee_planner::solver::rank_holds;
///
/// let ranking = rank_holds(&[1, 1], 6);
/// assert_eq!(ranking.len(), 3);
/// assert!(ranking[0].expected_value >= ranking[1].expected_value);
/// ```
#[must_use]
pub fn rank_holds(hand: &[u8], num_die_sides: u8) -> Vec<HoldEvaluation> {
    let holds: Vec<Hold> = gen_all_holds(hand).into_iter().collect();

    let mut ranking: Vec<HoldEvaluation> = holds
        .into_par_iter()
        .map(|hold| {
            let num_free_dice = hand.len() - hold.len();
            let expected_value = expected_value(hold.dice(), num_die_sides, num_free_dice);
            HoldEvaluation {
                hold,
                expected_value,
                num_free_dice,
            }
        })
        .collect();

    ranking.sort_by(HoldEvaluation::rank_cmp);
    ranking
}

/// Compute the hold that maximizes expected score when the rest is rerolled
///
/// Starts from `(0.0, ())` and only a strictly greater expected value
/// replaces the current best. Ties go to the smallest hold in ascending
/// order.
///
/// # Examples
/// ```
/// use yahtzee_planner::solver::strategy;
///
/// let best = strategy(&[1, 1, 1, 6, 6], 6);
/// assert!(best.expected_value >= 12.0);
/// ```
#[must_use]
pub fn strategy(hand: &[u8], num_die_sides: u8) -> StrategyResult {
    rank_holds(hand, num_die_sides)
        .into_iter()
        .next()
        .filter(|best| best.expected_value > 0.0)
        .map_or_else(StrategyResult::default, |best| StrategyResult {
            expected_value: best.expected_value,
            hold: best.hold,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn example_hand_beats_standing_pat() {
        let hand = [1, 1, 1, 6, 6];
        let best = strategy(&hand, 6);

        assert!(best.expected_value >= f64::from(score(&hand)));
        assert!(best.hold.is_within(&hand));
    }

    #[test]
    fn example_hand_keeps_the_sixes() {
        let best = strategy(&[1, 1, 1, 6, 6], 6);
        assert_eq!(best.hold, Hold::from_dice([6, 6]));
    }

    #[test]
    fn empty_hand_returns_initial_best() {
        let best = strategy(&[], 6);
        assert_eq!(best, StrategyResult::default());
    }

    #[test]
    fn single_die_keeps_high_face() {
        // A 6 beats the 3.5 average of a reroll
        let best = strategy(&[6], 6);
        assert_eq!(best.hold, Hold::from_dice([6]));
        assert!((best.expected_value - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_die_rerolls_low_face() {
        let best = strategy(&[1], 6);
        assert_eq!(best.hold, Hold::EMPTY);
        assert!((best.expected_value - 3.5).abs() < 1e-12);
    }

    #[test]
    fn one_sided_die_tie_prefers_smallest_hold() {
        // Every hold of a d1 hand is worth the same, the empty hold sorts first
        let best = strategy(&[1, 1, 1], 1);
        assert_eq!(best.hold, Hold::EMPTY);
        assert!((best.expected_value - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn optimum_matches_ranking_head() {
        let hand = [2, 3, 3, 5, 6];
        let ranking = rank_holds(&hand, 6);
        let best = strategy(&hand, 6);

        assert_eq!(best.hold, ranking[0].hold);
        assert_eq!(best.expected_value.to_bits(), ranking[0].expected_value.to_bits());
    }

    #[test]
    fn ranking_is_sorted_and_complete() {
        let hand = [1, 1, 1, 6, 6];
        let ranking = rank_holds(&hand, 6);

        assert_eq!(ranking.len(), gen_all_holds(&hand).len());
        for pair in ranking.windows(2) {
            assert!(pair[0].rank_cmp(&pair[1]) != Ordering::Greater);
        }
        for evaluation in &ranking {
            assert_eq!(evaluation.num_free_dice, hand.len() - evaluation.hold.len());
        }
    }

    #[test]
    fn full_hold_is_scored_exactly() {
        let hand = [1, 1, 1, 6, 6];
        let ranking = rank_holds(&hand, 6);
        let full = ranking
            .iter()
            .find(|e| e.hold == Hold::from_dice(hand))
            .unwrap();

        assert_eq!(full.num_free_dice, 0);
        assert!((full.expected_value - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deterministic_results() {
        let a = strategy(&[2, 4, 4, 5, 1], 6);
        let b = strategy(&[2, 4, 4, 5, 1], 6);
        assert_eq!(a.hold, b.hold);
        assert_eq!(a.expected_value.to_bits(), b.expected_value.to_bits());
    }
}
