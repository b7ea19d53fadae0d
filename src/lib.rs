//! Yahtzee Hold Planner
//!
//! Finds the dice to hold that maximize expected upper-section score, by
//! exhaustive search over every hold and every reroll outcome.
//!
//! # Quick Start
//!
//! ```rust
//! use yahtzee_planner::core::Hold;
//! use yahtzee_planner::solver::strategy;
//!
//! let best = strategy(&[1, 1, 1, 6, 6], 6);
//! assert_eq!(best.hold, Hold::from_dice([6, 6]));
//! println!("Hold {} for {:.3}", best.hold, best.expected_value);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
