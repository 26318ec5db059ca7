use serde::{Deserialize, Serialize, Serializer};

use super::models::{MatchMode, MatchResult, MatchSubmission, Participant};
use super::resolver::resolve;
use crate::shared::ValidationError;

/// A participant as it appears in a persisted match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_score"
    )]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl From<&Participant> for PlayerEntry {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id.clone(),
            name: participant.display_name.clone(),
            score: participant.numeric_score(),
            team: participant.team_label().map(str::to_string),
        }
    }
}

/// The `winner` field of a persisted match: a single object for score and manual
/// matches, an array for team and cooperative ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Winner {
    Single(PlayerEntry),
    Team(Vec<PlayerEntry>),
    Cooperative(Vec<PlayerEntry>),
}

impl Winner {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Winner::Single(entry) => vec![entry.id.as_str()],
            Winner::Team(entries) | Winner::Cooperative(entries) => {
                entries.iter().map(|e| e.id.as_str()).collect()
            }
        }
    }
}

/// Match document handed to the backend once the outcome is resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub players: Vec<PlayerEntry>,
    pub winner: Winner,
    pub worst_score_player: Option<PlayerEntry>,
    pub is_cooperative: bool,
    #[serde(serialize_with = "serialize_score")]
    pub total_score: Option<f64>,
    #[serde(skip)]
    result: MatchResult,
}

impl MatchRecord {
    /// Resolve `submission` and shape it for persistence.
    pub fn new(submission: &MatchSubmission) -> Result<Self, ValidationError> {
        let result = resolve(submission)?;
        let players: Vec<PlayerEntry> = submission.players.iter().map(PlayerEntry::from).collect();

        let winners: Vec<PlayerEntry> = players
            .iter()
            .filter(|p| result.is_winner(&p.id))
            .cloned()
            .collect();

        let winner = match result.mode {
            MatchMode::Cooperative => Winner::Cooperative(winners),
            MatchMode::TeamCompetitive => Winner::Team(winners),
            // Ties keep the first top scorer here; `result()` still lists them all.
            MatchMode::ManualCompetitive | MatchMode::ScoreCompetitive => winners
                .into_iter()
                .next()
                .map(Winner::Single)
                .ok_or_else(ValidationError::empty_participants)?,
        };

        let scores = if result.mode.is_competitive() {
            players.iter().map(|p| p.score).collect::<Option<Vec<f64>>>()
        } else {
            None
        };

        let (worst_score_player, total_score) = match scores {
            Some(scores) => (
                lowest_scorer(&players, &scores).cloned(),
                Some(scores.iter().sum::<f64>()),
            ),
            None => (None, None),
        };

        Ok(Self {
            players,
            winner,
            worst_score_player,
            is_cooperative: result.mode == MatchMode::Cooperative,
            total_score,
            result,
        })
    }

    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    pub fn mode(&self) -> MatchMode {
        self.result.mode
    }

    pub fn is_winner(&self, participant_id: &str) -> bool {
        self.result.is_winner(participant_id)
    }
}

fn lowest_scorer<'a>(players: &'a [PlayerEntry], scores: &[f64]) -> Option<&'a PlayerEntry> {
    let mut lowest: Option<(usize, f64)> = None;
    for (index, score) in scores.iter().copied().enumerate() {
        if lowest.map_or(true, |(_, best)| score < best) {
            lowest = Some((index, score));
        }
    }
    lowest.and_then(|(index, _)| players.get(index))
}

/// Whole-number scores go out as JSON integers, matching what the backend stores.
fn serialize_score<S: Serializer>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match score {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}
