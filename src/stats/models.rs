use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::match_outcome::MatchRecord;

/// A resolved match as it enters the ledger.
#[derive(Debug, Clone, Serialize)]
pub struct MatchLog {
    pub match_id: String,
    pub game_id: String,
    pub record: MatchRecord,
    pub recorded_at: DateTime<Utc>,
}

impl MatchLog {
    pub fn new(game_id: impl Into<String>, record: MatchRecord) -> Self {
        Self {
            match_id: Uuid::new_v4().to_string(),
            game_id: game_id.into(),
            record,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub name: String,
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Wins outside cooperative games.
    pub competitive_wins: u32,
    pub total_score: f64,
    pub current_win_streak: u32,
    pub best_win_streak: u32,
}

impl PlayerStats {
    /// Percentage of matches won; 0 before the first match.
    pub fn win_rate(&self) -> f64 {
        if self.total_matches == 0 {
            return 0.0;
        }
        self.wins as f64 / self.total_matches as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordScore {
    pub player_id: String,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStats {
    pub game_id: String,
    pub matches_played: u32,
    pub cooperative_matches: u32,
    pub cooperative_wins: u32,
    pub record_score: Option<RecordScore>,
    /// Matches that produced a `total_score`.
    pub scored_matches: u32,
    pub total_score_sum: f64,
}

impl GameStats {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            ..Self::default()
        }
    }

    /// Mean match total over scored matches only.
    pub fn average_score(&self) -> Option<f64> {
        (self.scored_matches > 0).then(|| self.total_score_sum / self.scored_matches as f64)
    }

    /// Percentage of cooperative matches won, if any were played.
    pub fn cooperative_win_rate(&self) -> Option<f64> {
        (self.cooperative_matches > 0)
            .then(|| self.cooperative_wins as f64 / self.cooperative_matches as f64 * 100.0)
    }
}
