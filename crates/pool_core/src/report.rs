//! One full evaluation: real standings, leaderboard, and per-participant
//! hypothetical tables with their deltas.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::comparator::{compare_standings, GroupDelta};
use crate::error::Result;
use crate::hypothetical::hypothetical_standings;
use crate::models::{MatchResult, Participant, Roster, Standings};
use crate::scoring::{rank_totals, score_predictions, MatchScore, ParticipantTotal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantReport {
    pub name: String,
    pub total: u32,
    /// One entry per played match, aligned with the results.
    pub scores: Vec<MatchScore>,
    pub hypothetical: Standings,
    pub deltas: Vec<GroupDelta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolReport {
    pub matches_played: usize,
    pub standings: Standings,
    pub leaderboard: Vec<ParticipantTotal>,
    /// In input order, not leaderboard order.
    pub participants: Vec<ParticipantReport>,
}

impl PoolReport {
    pub fn participant(&self, name: &str) -> Option<&ParticipantReport> {
        self.participants.iter().find(|p| p.name == name)
    }
}

pub fn evaluate(
    roster: &Roster,
    results: &[MatchResult],
    participants: &[Participant],
) -> Result<PoolReport> {
    let standings = crate::standings::compute_standings(roster, results)?;

    let mut leaderboard = Vec::with_capacity(participants.len());
    let mut reports = Vec::with_capacity(participants.len());
    for participant in participants {
        let scores = score_predictions(&participant.predictions, results);
        let line = ParticipantTotal::from_scores(&participant.name, &scores);
        let hypothetical = hypothetical_standings(roster, participant)?.standings;
        let deltas = compare_standings(&hypothetical, &standings)?;

        reports.push(ParticipantReport {
            name: participant.name.clone(),
            total: line.total,
            scores,
            hypothetical,
            deltas,
        });
        leaderboard.push(line);
    }
    rank_totals(&mut leaderboard);

    info!(
        matches = results.len(),
        participants = participants.len(),
        leader = ?leaderboard.first().map(|line| line.participant.as_str()),
        "pool evaluated"
    );

    Ok(PoolReport {
        matches_played: results.len(),
        standings,
        leaderboard,
        participants: reports,
    })
}
