// Library crate for the MeepleStats match outcome and score-sheet engine
// This file exposes the public API for the binary and integration tests

pub mod match_outcome;
pub mod score_sheet;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use match_outcome::{resolve, MatchMode, MatchRecord, MatchResult, MatchSubmission, Participant};
pub use score_sheet::{compute_totals, ScoreSheetDefinition, ScoreSheetSession};
pub use shared::{AppError, ValidationError, ValidationReason};
pub use stats::{InMemoryStatsRepository, StatsRepository, StatsService};
