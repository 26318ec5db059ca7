//! Fluent builders for match submissions as the logging form would send them
#![allow(dead_code)] // Test utilities may not all be used in every test

use meeplestats::{MatchSubmission, Participant};

// ============================================================================
// Match Setup Utilities
// ============================================================================

pub struct MatchBuilder {
    players: Vec<Participant>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self { players: vec![] }
    }

    /// Players are given ids `p-<name>` so ids and display names differ
    pub fn scored(mut self, name: &str, score: i32) -> Self {
        self.players
            .push(Participant::new(format!("p-{name}"), name).with_score(score));
        self
    }

    pub fn unscored(mut self, name: &str) -> Self {
        self.players.push(Participant::new(format!("p-{name}"), name));
        self
    }

    pub fn on_team(mut self, name: &str, team: &str, score: i32) -> Self {
        self.players.push(
            Participant::new(format!("p-{name}"), name)
                .with_team(team)
                .with_score(score),
        );
        self
    }

    /// Four players with a clear winner: alice 42, bob 35, charlie 28, david 12
    pub fn with_simple_four_player_match(self) -> Self {
        self.scored("alice", 42)
            .scored("bob", 35)
            .scored("charlie", 28)
            .scored("david", 12)
    }

    pub fn by_score(self) -> MatchSubmission {
        MatchSubmission::new(self.players)
    }

    pub fn cooperative(self, is_win: bool) -> MatchSubmission {
        MatchSubmission::new(self.players).cooperative(is_win)
    }

    pub fn team_won_by(self, team: &str) -> MatchSubmission {
        MatchSubmission::new(self.players).team_match(team)
    }

    pub fn manually_won_by(self, name: &str) -> MatchSubmission {
        MatchSubmission::new(self.players).manual_winner(format!("p-{name}"))
    }
}
