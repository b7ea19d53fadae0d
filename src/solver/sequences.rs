//! Reroll outcome enumeration
//!
//! Every ordered sequence of a fixed length over an outcome alphabet. Each
//! sequence is one equally likely result of rolling the free dice.

use rustc_hash::FxHashSet;

/// Enumerate the set of all sequences of `outcomes` of the given length
///
/// Grows the set one position at a time, appending each outcome to every
/// sequence built so far. With no duplicate outcomes the result holds
/// `outcomes.len().pow(length)` sequences. Length 0 yields only the empty
/// sequence.
///
/// # Examples
/// ```
/// use yahtzee_planner::solver::gen_all_sequences;
///
/// let sequences = gen_all_sequences(&[1, 2, 3], 2);
/// assert_eq!(sequences.len(), 9);
/// assert!(sequences.contains(&vec![3, 1]));
///
/// let empty = gen_all_sequences(&[1, 2, 3], 0);
/// assert_eq!(empty.len(), 1);
/// assert!(empty.contains(&vec![]));
/// ```
#[must_use]
pub fn gen_all_sequences(outcomes: &[u8], length: usize) -> FxHashSet<Vec<u8>> {
    let mut answer: FxHashSet<Vec<u8>> = FxHashSet::default();
    answer.insert(Vec::new());

    for _ in 0..length {
        let mut next = FxHashSet::default();
        for partial in &answer {
            for &item in outcomes {
                let mut sequence = Vec::with_capacity(partial.len() + 1);
                sequence.extend_from_slice(partial);
                sequence.push(item);
                next.insert(sequence);
            }
        }
        answer = next;
    }

    answer
}
