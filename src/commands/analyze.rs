//! Hand analysis command
//!
//! Ranks every candidate hold of a hand by expected value.

use super::SolveConfig;
use crate::core::{Hand, HandError, score};
use crate::solver::{HoldEvaluation, rank_holds};
use tracing::debug;

/// Result of analyzing a hand
pub struct AnalysisResult {
    pub hand: Hand,
    /// Score if every die is kept
    pub current_score: u32,
    /// Best holds first, truncated to the requested count
    pub ranking: Vec<HoldEvaluation>,
    pub total_holds: usize,
}

/// Rank the holds of the configured hand, keeping the `top` best
///
/// # Errors
///
/// Returns an error if the configuration does not describe a valid hand.
pub fn analyze_hand(config: &SolveConfig, top: usize) -> Result<AnalysisResult, HandError> {
    let hand = config.validate()?;

    let mut ranking = rank_holds(hand.dice(), hand.num_die_sides());
    let total_holds = ranking.len();
    ranking.truncate(top);
    debug!(hand = %hand, total_holds, shown = ranking.len(), "ranked holds");

    Ok(AnalysisResult {
        current_score: score(hand.dice()),
        hand,
        ranking,
        total_holds,
    })
}
