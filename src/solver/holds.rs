//! Candidate hold enumeration
//!
//! Builds every subset of a hand with a binary include/exclude recursion,
//! then canonicalizes each subset into a sorted `Hold` so that picking
//! different but equal-valued dice yields the same hold.

use crate::core::Hold;
use std::collections::BTreeSet;

/// Generate all distinct holds for a hand
///
/// Always contains the empty hold and the full hand. A hand of `n` distinct
/// faces has exactly `2^n` holds; repeated faces collapse.
///
/// # Examples
/// ```
/// use yahtzee_planner::core::Hold;
/// use yahtzee_planner::solver::gen_all_holds;
///
/// let holds = gen_all_holds(&[1, 1]);
/// assert_eq!(holds.len(), 3);
/// assert!(holds.contains(&Hold::EMPTY));
/// assert!(holds.contains(&Hold::from_dice([1])));
/// assert!(holds.contains(&Hold::from_dice([1, 1])));
/// ```
#[must_use]
pub fn gen_all_holds(hand: &[u8]) -> BTreeSet<Hold> {
    all_subsets(hand).into_iter().map(Hold::from_dice).collect()
}

/// Generate all `2^n` subsets of `items`, keeping duplicates
///
/// Subsets are in recursion order and are not sorted. Use
/// [`gen_all_holds`] for the deduplicated canonical form.
#[must_use]
pub fn all_subsets(items: &[u8]) -> Vec<Vec<u8>> {
    let mut accumulator = Vec::new();
    all_subsets_recur(items, &mut Vec::with_capacity(items.len()), &mut accumulator);
    accumulator
}

fn all_subsets_recur(left: &[u8], current: &mut Vec<u8>, accumulator: &mut Vec<Vec<u8>>) {
    let Some((&first, rest)) = left.split_first() else {
        accumulator.push(current.clone());
        return;
    };

    // Branch with `first` kept
    current.push(first);
    all_subsets_recur(rest, current, accumulator);
    current.pop();

    // Branch with `first` left out
    all_subsets_recur(rest, current, accumulator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_subset_count_is_power_of_two() {
        for n in 0..=6 {
            let hand: Vec<u8> = vec![1; n];
            assert_eq!(all_subsets(&hand).len(), 1 << n);
        }
    }

    #[test]
    fn large_hand_of_one_face_collapses() {
        let holds = gen_all_holds(&[2; 12]);
        assert_eq!(holds.len(), 13);
    }

    #[test]
    fn empty_hand_has_only_empty_hold() {
        let holds = gen_all_holds(&[]);
        assert_eq!(holds.len(), 1);
        assert!(holds.contains(&Hold::EMPTY));
    }

    #[test]
    fn contains_empty_and_full_hand() {
        let hand = [6, 1, 6, 1, 1];
        let holds = gen_all_holds(&hand);
        assert!(holds.contains(&Hold::EMPTY));
        assert!(holds.contains(&Hold::from_dice(hand)));
    }

    #[test]
    fn distinct_faces_give_full_power_set() {
        assert_eq!(gen_all_holds(&[1, 2, 3, 4, 5]).len(), 32);
        assert_eq!(gen_all_holds(&[1, 2, 3, 4, 5, 6]).len(), 64);
    }

    #[test]
    fn pair_collapses_to_three() {
        let holds = gen_all_holds(&[1, 1]);
        let expected: BTreeSet<Hold> = [
            Hold::EMPTY,
            Hold::from_dice([1]),
            Hold::from_dice([1, 1]),
        ]
        .into_iter()
        .collect();
        assert_eq!(holds, expected);
    }

    #[test]
    fn multiset_count() {
        // (1,1,1,6,6): 4 choices of 1s times 3 choices of 6s
        assert_eq!(gen_all_holds(&[1, 1, 1, 6, 6]).len(), 12);
        // Five of a kind: keep 0..=5 of them
        assert_eq!(gen_all_holds(&[4, 4, 4, 4, 4]).len(), 6);
    }

    #[test]
    fn holds_are_sorted_sub_multisets() {
        let hand = [5, 2, 5, 3];
        for hold in gen_all_holds(&hand) {
            assert!(hold.dice().windows(2).all(|w| w[0] <= w[1]));
            assert!(hold.is_within(&hand));
        }
    }

    #[test]
    fn input_order_is_irrelevant() {
        assert_eq!(gen_all_holds(&[3, 1, 2]), gen_all_holds(&[1, 2, 3]));
    }

    #[test]
    fn first_raw_subset_is_full_and_last_is_empty() {
        let subsets = all_subsets(&[1, 2, 3]);
        assert_eq!(subsets.first(), Some(&vec![1, 2, 3]));
        assert_eq!(subsets.last(), Some(&vec![]));
    }
}
