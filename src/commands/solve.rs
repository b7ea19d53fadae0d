//! Hand solving command
//!
//! Finds the best hold for a single hand, and runs the fixed example.

use crate::core::{Hand, HandError};
use crate::solver::{StrategyResult, gen_all_holds, strategy};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for solving a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub hand: Vec<u8>,
    pub num_die_sides: u8,
    pub max_dice: usize,
    pub max_sides: u8,
}

impl SolveConfig {
    /// Standard six-sided dice
    pub const DEFAULT_SIDES: u8 = 6;
    /// Largest hand searched unless overridden
    pub const DEFAULT_MAX_DICE: usize = 8;
    /// Hard ceiling on `max_dice`; hold enumeration is `2^n`
    pub const MAX_SUPPORTED_DICE: usize = 16;
    /// Largest die searched unless overridden; rerolls cost `sides^free_dice`
    pub const DEFAULT_MAX_SIDES: u8 = 20;

    #[must_use]
    pub const fn new(hand: Vec<u8>) -> Self {
        Self {
            hand,
            num_die_sides: Self::DEFAULT_SIDES,
            max_dice: Self::DEFAULT_MAX_DICE,
            max_sides: Self::DEFAULT_MAX_SIDES,
        }
    }

    /// The built-in example: hand (1, 1, 1, 6, 6) with six-sided dice
    #[must_use]
    pub fn example() -> Self {
        Self::new(vec![1, 1, 1, 6, 6])
    }

    /// Check that `num_dice` dice with this side count fit the search limits
    ///
    /// The dice limit is `max_dice`, capped at [`Self::MAX_SUPPORTED_DICE`].
    ///
    /// # Errors
    ///
    /// Returns an error if there are too many dice, too many sides, or none.
    pub fn check_limits(&self, num_dice: usize) -> Result<(), HandError> {
        let max_dice = self.max_dice.min(Self::MAX_SUPPORTED_DICE);
        if num_dice > max_dice {
            return Err(HandError::TooManyDice {
                len: num_dice,
                max: max_dice,
            });
        }
        if self.num_die_sides == 0 {
            return Err(HandError::NoSides);
        }
        if self.num_die_sides > self.max_sides {
            return Err(HandError::TooManySides {
                sides: self.num_die_sides,
                max: self.max_sides,
            });
        }
        Ok(())
    }

    /// Validate the configuration into a `Hand`
    ///
    /// # Errors
    ///
    /// Returns an error if the hand or die exceed the search limits, the die
    /// has no sides, or a face is out of range.
    pub fn validate(&self) -> Result<Hand, HandError> {
        self.check_limits(self.hand.len())?;
        Hand::new(self.hand.clone(), self.num_die_sides)
    }
}

/// Result of solving a hand
pub struct SolveResult {
    pub hand: Hand,
    pub best: StrategyResult,
    pub candidates: usize,
    pub duration: Duration,
}

/// Find the best hold for the configured hand
///
/// # Errors
///
/// Returns an error if the configuration does not describe a valid hand.
pub fn solve_hand(config: &SolveConfig) -> Result<SolveResult, HandError> {
    let hand = config.validate()?;
    debug!(hand = %hand, sides = hand.num_die_sides(), "solving hand");

    let start = Instant::now();
    let candidates = gen_all_holds(hand.dice()).len();
    let best = strategy(hand.dice(), hand.num_die_sides());
    let duration = start.elapsed();

    info!(
        hold = %best.hold,
        expected_value = best.expected_value,
        candidates,
        elapsed_ms = duration.as_secs_f64() * 1000.0,
        "best hold found"
    );

    Ok(SolveResult {
        hand,
        best,
        candidates,
        duration,
    })
}

/// Compute the dice to hold and expected score for the example hand
///
/// # Errors
///
/// Never fails in practice; the example configuration is always valid.
pub fn run_example() -> Result<SolveResult, HandError> {
    solve_hand(&SolveConfig::example())
}
