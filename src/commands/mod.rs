//! Command implementations

pub mod analyze;
pub mod holds;
pub mod score;
pub mod solve;
pub mod table;

pub use analyze::{AnalysisResult, analyze_hand};
pub use holds::{HoldsResult, list_holds};
pub use score::{ScoreResult, score_hand};
pub use solve::{SolveConfig, SolveResult, run_example, solve_hand};
pub use table::{TableStatistics, print_table_statistics, run_table};
