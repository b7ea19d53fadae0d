//! Hold planning algorithms
//!
//! Reroll enumeration, expected value, hold enumeration and the best-hold
//! search built on top of them.

mod expected;
mod holds;
mod sequences;
mod strategy;

pub use expected::expected_value;
pub use holds::{all_subsets, gen_all_holds};
pub use sequences::gen_all_sequences;
pub use strategy::{HoldEvaluation, StrategyResult, rank_holds, strategy};
