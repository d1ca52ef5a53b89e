//! Event handlers subscribed by the match engine.

mod commentary;
mod match_stats;
mod recalculation;

pub use commentary::{CommentaryError, CommentaryHandler, CommentaryProvider};
pub use match_stats::MatchStatsRecorder;
pub use recalculation::{AbilityCalculator, FatigueCalculator, ProbabilityCalculator, StatsUpdater};
