//! Hand scoring command

use super::SolveConfig;
use crate::core::{Hand, HandError, score, score_breakdown};

/// Upper-section score of a hand with per-face subtotals
pub struct ScoreResult {
    pub hand: Hand,
    pub score: u32,
    pub breakdown: Vec<(u8, u32)>,
}

/// Score the configured hand
///
/// # Errors
///
/// Returns an error if the configuration does not describe a valid hand.
pub fn score_hand(config: &SolveConfig) -> Result<ScoreResult, HandError> {
    let hand = config.validate()?;

    Ok(ScoreResult {
        score: score(hand.dice()),
        breakdown: score_breakdown(hand.dice()),
        hand,
    })
}
