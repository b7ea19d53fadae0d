//! Hold listing command
//!
//! Lists every distinct hold of a hand, for checking the subset enumeration
//! against an outside reference.

use super::SolveConfig;
use crate::core::{Hand, HandError, Hold};
use crate::solver::gen_all_holds;

/// Result of listing holds
pub struct HoldsResult {
    pub hand: Hand,
    /// Distinct holds in ascending order
    pub holds: Vec<Hold>,
    /// Subsets generated before duplicates collapse (`2^n`, saturating)
    pub raw_subsets: usize,
}

/// List the distinct holds of the configured hand
///
/// # Errors
///
/// Returns an error if the configuration does not describe a valid hand.
pub fn list_holds(config: &SolveConfig) -> Result<HoldsResult, HandError> {
    let hand = config.validate()?;
    let holds = gen_all_holds(hand.dice()).into_iter().collect();

    Ok(HoldsResult {
        raw_subsets: u32::try_from(hand.len())
            .ok()
            .and_then(|n| 1_usize.checked_shl(n))
            .unwrap_or(usize::MAX),
        hand,
        holds,
    })
}
