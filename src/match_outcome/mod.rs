// Public API
pub use models::{MatchMode, MatchResult, MatchSubmission, Participant, ScoreValue};
pub use record::{MatchRecord, PlayerEntry, Winner};
pub use resolver::resolve;

// Internal modules
mod models;
mod record;
mod resolver;
