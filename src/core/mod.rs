//! Core domain types for the planner
//!
//! Hands, holds and upper-section scoring. Everything here is pure and
//! independent of the search.

mod dice;
mod score;

pub use dice::{Hand, HandError, Hold};
pub use score::{score, score_breakdown};
