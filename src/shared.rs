use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

use crate::stats::StatsError;

/// Machine-readable cause of a rejected match or score-sheet input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    EmptyParticipants,
    MissingScore,
    MissingTeam,
    UnknownWinningTeam,
    UnknownManualWinner,
}

/// The single error kind raised by the outcome resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{reason}: {detail}")]
pub struct ValidationError {
    pub reason: ValidationReason,
    pub detail: String,
}

impl ValidationError {
    pub fn new(reason: ValidationReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }

    pub fn empty_participants() -> Self {
        Self::new(
            ValidationReason::EmptyParticipants,
            "a match needs at least one participant",
        )
    }

    pub fn missing_score(participant_id: &str) -> Self {
        Self::new(
            ValidationReason::MissingScore,
            format!("participant '{participant_id}' has no numeric score"),
        )
    }

    pub fn missing_team(participant_id: &str) -> Self {
        Self::new(
            ValidationReason::MissingTeam,
            format!("participant '{participant_id}' has no team label"),
        )
    }

    pub fn unknown_winning_team(team: &str) -> Self {
        Self::new(
            ValidationReason::UnknownWinningTeam,
            format!("no participant belongs to team '{team}'"),
        )
    }

    pub fn unknown_manual_winner(participant_id: &str) -> Self {
        Self::new(
            ValidationReason::UnknownManualWinner,
            format!("'{participant_id}' is not a participant of this match"),
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid match: {0}")]
    Validation(#[from] ValidationError),

    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),
}

impl AppError {
    /// Process exit status for the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 74,
            AppError::Json(_) => 65,
            AppError::Validation(_) => 1,
            AppError::Stats(_) => 70,
        }
    }
}
