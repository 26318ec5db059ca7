use std::sync::Arc;

use tracing::{info, instrument};

use super::{GameStats, MatchLog, PlayerStats, StatsError, StatsRepository};
use crate::match_outcome::{MatchRecord, MatchSubmission};

pub struct StatsService {
    repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(repository: Arc<dyn StatsRepository>) -> Self {
        Self { repository }
    }

    /// Resolve a submitted match, record it, and return the log with the game's
    /// updated stats. Invalid submissions are rejected before anything is written.
    #[instrument(skip(self, submission), fields(players = submission.players.len()))]
    pub async fn log_match(
        &self,
        game_id: &str,
        submission: &MatchSubmission,
    ) -> Result<(MatchLog, GameStats), StatsError> {
        let record = MatchRecord::new(submission)?;
        let log = MatchLog::new(game_id, record);

        let game_stats = self.repository.record_match(log.clone()).await?;

        info!(
            match_id = %log.match_id,
            mode = %log.record.mode(),
            winners = log.record.result().winners.len(),
            "Match logged"
        );

        Ok((log, game_stats))
    }

    pub async fn get_game_stats(&self, game_id: &str) -> Result<Option<GameStats>, StatsError> {
        self.repository.get_game_stats(game_id).await
    }

    pub async fn get_player_stats(
        &self,
        player_id: &str,
    ) -> Result<Option<PlayerStats>, StatsError> {
        self.repository.get_player_stats(player_id).await
    }

    pub async fn reset_game_stats(&self, game_id: &str) -> Result<(), StatsError> {
        self.repository.reset_game_stats(game_id).await
    }
}
