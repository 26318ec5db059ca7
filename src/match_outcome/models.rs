use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Raw score as submitted: forms send strings, JSON clients send numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    /// Finite numeric value, or `None` for blank / non-numeric input.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            ScoreValue::Number(n) => *n,
            ScoreValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Number(value)
    }
}

impl From<i32> for ScoreValue {
    fn from(value: i32) -> Self {
        ScoreValue::Number(value as f64)
    }
}

/// One player (or team member) entry of a logged match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            score: None,
            team: None,
        }
    }

    pub fn with_score(mut self, score: impl Into<ScoreValue>) -> Self {
        self.score = Some(score.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn numeric_score(&self) -> Option<f64> {
        self.score.as_ref().and_then(ScoreValue::as_number)
    }

    /// Team label, treating an empty string as "no team".
    pub fn team_label(&self) -> Option<&str> {
        self.team
            .as_deref()
            .map(str::trim)
            .filter(|team| !team.is_empty())
    }
}

/// Match as submitted by the logging form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmission {
    #[serde(default)]
    pub is_cooperative: bool,
    #[serde(default)]
    pub is_team_match: bool,
    #[serde(default)]
    pub use_manual_winner: bool,
    #[serde(default)]
    pub is_win: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_winner: Option<String>,
    pub players: Vec<Participant>,
}

impl MatchSubmission {
    /// A plain score-competitive submission; chain the mode setters to change it.
    pub fn new(players: Vec<Participant>) -> Self {
        Self {
            is_cooperative: false,
            is_team_match: false,
            use_manual_winner: false,
            is_win: false,
            winning_team: None,
            manual_winner: None,
            players,
        }
    }

    pub fn cooperative(mut self, is_win: bool) -> Self {
        self.is_cooperative = true;
        self.is_win = is_win;
        self
    }

    pub fn team_match(mut self, winning_team: impl Into<String>) -> Self {
        self.is_team_match = true;
        self.winning_team = Some(winning_team.into());
        self
    }

    pub fn manual_winner(mut self, participant_id: impl Into<String>) -> Self {
        self.use_manual_winner = true;
        self.manual_winner = Some(participant_id.into());
        self
    }

    pub fn mode(&self) -> MatchMode {
        MatchMode::select(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchMode {
    Cooperative,
    TeamCompetitive,
    ManualCompetitive,
    ScoreCompetitive,
}

impl MatchMode {
    /// Flags are read cooperative, team, manual in that order; the form only hides
    /// the team checkbox for cooperative games, so both can arrive set.
    pub fn select(submission: &MatchSubmission) -> Self {
        if submission.is_cooperative {
            MatchMode::Cooperative
        } else if submission.is_team_match {
            MatchMode::TeamCompetitive
        } else if submission.use_manual_winner {
            MatchMode::ManualCompetitive
        } else {
            MatchMode::ScoreCompetitive
        }
    }

    pub fn is_competitive(self) -> bool {
        self != MatchMode::Cooperative
    }
}

/// Winners of one match. Derived on every resolution, never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Participant ids in submission order.
    pub winners: Vec<String>,
    pub mode: MatchMode,
    pub is_tie: bool,
}

impl MatchResult {
    pub fn is_winner(&self, participant_id: &str) -> bool {
        self.winners.iter().any(|id| id == participant_id)
    }
}
