use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{GameStats, MatchLog, PlayerStats, RecordScore, StatsError};
use crate::match_outcome::MatchMode;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Apply a match to the ledger and return the game's stats as of that write.
    async fn record_match(&self, log: MatchLog) -> Result<GameStats, StatsError>;
    async fn get_game_stats(&self, game_id: &str) -> Result<Option<GameStats>, StatsError>;
    async fn get_player_stats(&self, player_id: &str) -> Result<Option<PlayerStats>, StatsError>;
    async fn reset_game_stats(&self, game_id: &str) -> Result<(), StatsError>;
}

#[derive(Debug, Default)]
struct Ledger {
    games: HashMap<String, GameStats>,
    players: HashMap<String, PlayerStats>,
}

#[derive(Debug, Default)]
pub struct InMemoryStatsRepository {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryStatsRepository {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger::default())),
        }
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    #[instrument(skip(self, log), fields(match_id = %log.match_id, game_id = %log.game_id))]
    async fn record_match(&self, log: MatchLog) -> Result<GameStats, StatsError> {
        let record = &log.record;
        let mode = record.mode();

        let mut ledger = self.ledger.write().await;
        let Ledger { games, players } = &mut *ledger;

        let game_stats = games
            .entry(log.game_id.clone())
            .or_insert_with(|| GameStats::new(log.game_id.clone()));

        game_stats.matches_played += 1;
        if mode == MatchMode::Cooperative {
            game_stats.cooperative_matches += 1;
            if !record.result().winners.is_empty() {
                game_stats.cooperative_wins += 1;
            }
        }
        if let Some(total) = record.total_score {
            game_stats.scored_matches += 1;
            game_stats.total_score_sum += total;
        }

        for player in &record.players {
            let player_stats = players
                .entry(player.id.clone())
                .or_insert_with(|| PlayerStats {
                    player_id: player.id.clone(),
                    ..PlayerStats::default()
                });

            player_stats.name = player.name.clone();
            player_stats.total_matches += 1;

            if record.is_winner(&player.id) {
                player_stats.wins += 1;
                if mode.is_competitive() {
                    player_stats.competitive_wins += 1;
                }
                player_stats.current_win_streak += 1;
                player_stats.best_win_streak = player_stats
                    .best_win_streak
                    .max(player_stats.current_win_streak);
            } else {
                player_stats.losses += 1;
                player_stats.current_win_streak = 0;
            }

            if let Some(score) = player.score {
                player_stats.total_score += score;

                let beats_record = game_stats
                    .record_score
                    .as_ref()
                    .map_or(true, |current| score > current.score);
                if beats_record {
                    debug!(player_id = %player.id, score, "New game record score");
                    game_stats.record_score = Some(RecordScore {
                        player_id: player.id.clone(),
                        name: player.name.clone(),
                        score,
                    });
                }
            }
        }

        Ok(game_stats.clone())
    }

    async fn get_game_stats(&self, game_id: &str) -> Result<Option<GameStats>, StatsError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.games.get(game_id).cloned())
    }

    async fn get_player_stats(&self, player_id: &str) -> Result<Option<PlayerStats>, StatsError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.players.get(player_id).cloned())
    }

    async fn reset_game_stats(&self, game_id: &str) -> Result<(), StatsError> {
        let mut ledger = self.ledger.write().await;
        ledger.games.remove(game_id);
        Ok(())
    }
}
