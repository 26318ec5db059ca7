use tracing::{debug, warn};

use super::models::{MatchMode, MatchResult, MatchSubmission, Participant};
use crate::shared::ValidationError;

/// Decide the winners of a submitted match.
///
/// Pure: the same submission always yields the same result. Any invalid input is
/// rejected with a [`ValidationError`]; nothing is guessed or repaired.
pub fn resolve(submission: &MatchSubmission) -> Result<MatchResult, ValidationError> {
    let mode = MatchMode::select(submission);
    let outcome = resolve_in_mode(mode, submission);

    match &outcome {
        Ok(result) => debug!(
            mode = %mode,
            winners = result.winners.len(),
            is_tie = result.is_tie,
            "Resolved match outcome"
        ),
        Err(err) => warn!(mode = %mode, reason = %err.reason, "Rejected match submission"),
    }

    outcome
}

fn resolve_in_mode(
    mode: MatchMode,
    submission: &MatchSubmission,
) -> Result<MatchResult, ValidationError> {
    let players = &submission.players;
    if players.is_empty() {
        return Err(ValidationError::empty_participants());
    }

    let (winners, is_tie) = match mode {
        MatchMode::Cooperative => (cooperative_winners(submission.is_win, players), false),
        MatchMode::TeamCompetitive => (
            team_winners(submission.winning_team.as_deref(), players)?,
            false,
        ),
        MatchMode::ManualCompetitive => (
            manual_winner(submission.manual_winner.as_deref(), players)?,
            false,
        ),
        MatchMode::ScoreCompetitive => {
            let winners = highest_scorers(players)?;
            let is_tie = winners.len() > 1;
            (winners, is_tie)
        }
    };

    Ok(MatchResult {
        winners,
        mode,
        is_tie,
    })
}

fn cooperative_winners(is_win: bool, players: &[Participant]) -> Vec<String> {
    if is_win {
        players.iter().map(|p| p.id.clone()).collect()
    } else {
        Vec::new()
    }
}

fn team_winners(
    winning_team: Option<&str>,
    players: &[Participant],
) -> Result<Vec<String>, ValidationError> {
    let mut labelled = Vec::with_capacity(players.len());
    for player in players {
        let team = player
            .team_label()
            .ok_or_else(|| ValidationError::missing_team(&player.id))?;
        labelled.push((player, team));
    }

    let winning_team = winning_team.map(str::trim).unwrap_or_default();
    let winners: Vec<String> = labelled
        .into_iter()
        .filter(|(_, team)| !winning_team.is_empty() && *team == winning_team)
        .map(|(player, _)| player.id.clone())
        .collect();

    if winners.is_empty() {
        return Err(ValidationError::unknown_winning_team(winning_team));
    }
    Ok(winners)
}

fn manual_winner(
    manual_winner: Option<&str>,
    players: &[Participant],
) -> Result<Vec<String>, ValidationError> {
    let requested = manual_winner.unwrap_or_default();
    players
        .iter()
        .find(|p| p.id == requested)
        .map(|p| vec![p.id.clone()])
        .ok_or_else(|| ValidationError::unknown_manual_winner(requested))
}

fn highest_scorers(players: &[Participant]) -> Result<Vec<String>, ValidationError> {
    let mut scored = Vec::with_capacity(players.len());
    for player in players {
        let score = player
            .numeric_score()
            .ok_or_else(|| ValidationError::missing_score(&player.id))?;
        scored.push((player, score));
    }

    let best = scored
        .iter()
        .map(|(_, score)| *score)
        .fold(f64::NEG_INFINITY, f64::max);

    // Exact comparison: scores are whole numbers in practice.
    Ok(scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(player, _)| player.id.clone())
        .collect())
}
