//! Upper-section scoring
//!
//! A hand scores the best single upper-section box it could fill:
//! the maximum over faces of face × count.

use rustc_hash::FxHashMap;

/// Compute the maximal upper-section score for a hand
///
/// Returns 0 for an empty hand.
///
/// # Examples
/// ```
/// use yahtzee_planner::core::score;
///
/// // Three 1s are worth 3, two 6s are worth 12
/// assert_eq!(score(&[1, 1, 1, 6, 6]), 12);
/// assert_eq!(score(&[]), 0);
/// ```
#[must_use]
pub fn score(hand: &[u8]) -> u32 {
    face_totals(hand).into_values().max().unwrap_or(0)
}

/// Per-face upper-section subtotals, sorted by face
///
/// Every distinct face in the hand appears once with face × count.
#[must_use]
pub fn score_breakdown(hand: &[u8]) -> Vec<(u8, u32)> {
    let mut totals: Vec<(u8, u32)> = face_totals(hand).into_iter().collect();
    totals.sort_unstable_by_key(|&(face, _)| face);
    totals
}

fn face_totals(hand: &[u8]) -> FxHashMap<u8, u32> {
    let mut totals = FxHashMap::default();
    for &die in hand {
        *totals.entry(die).or_insert(0) += u32::from(die);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
    }

    #[test]
    fn mixed_hand_takes_best_face() {
        assert_eq!(score(&[1, 1, 1, 6, 6]), 12);
    }

    #[test]
    fn all_same_face() {
        assert_eq!(score(&[2, 2, 2, 2, 2]), 10);
        assert_eq!(score(&[6, 6, 6]), 18);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(score(&[6, 1, 6, 1, 1]), score(&[1, 1, 1, 6, 6]));
    }

    #[test]
    fn many_small_can_beat_one_large() {
        // Four 2s (8) beat a single 6
        assert_eq!(score(&[2, 2, 2, 2, 6]), 8);
    }

    #[test]
    fn score_at_least_max_face() {
        let hands: [&[u8]; 5] = [&[1], &[3, 5], &[1, 1, 1, 6, 6], &[4, 4, 2], &[1, 2, 3, 4, 5, 6]];
        for hand in hands {
            let max_face = u32::from(*hand.iter().max().unwrap());
            assert!(score(hand) >= max_face, "hand {hand:?}");
        }
    }

    #[test]
    fn breakdown_lists_every_face() {
        let breakdown = score_breakdown(&[6, 1, 1, 6, 1]);
        assert_eq!(breakdown, vec![(1, 3), (6, 12)]);
    }

    #[test]
    fn breakdown_empty() {
        assert!(score_breakdown(&[]).is_empty());
    }

    #[test]
    fn breakdown_max_matches_score() {
        let hand = [3, 3, 4, 5, 5];
        let best = score_breakdown(&hand)
            .into_iter()
            .map(|(_, total)| total)
            .max()
            .unwrap();
        assert_eq!(best, score(&hand));
    }
}
