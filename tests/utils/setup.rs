#![allow(dead_code)] // Not every test binary builds a ledger

use std::sync::Arc;

use meeplestats::{InMemoryStatsRepository, StatsService};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub stats_repository: Arc<InMemoryStatsRepository>,
    pub stats_service: StatsService,
    pub game_id: String,
}

pub struct TestSetupBuilder {
    game_id: String,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            game_id: "bgg-13".to_string(),
        }
    }

    pub fn for_game(mut self, game_id: &str) -> Self {
        self.game_id = game_id.to_string();
        self
    }

    pub fn build(self) -> TestSetup {
        let stats_repository = Arc::new(InMemoryStatsRepository::new());
        let stats_service = StatsService::new(stats_repository.clone());

        TestSetup {
            stats_repository,
            stats_service,
            game_id: self.game_id,
        }
    }
}
