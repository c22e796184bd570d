//! "What if my predictions had been the real results?"
//!
//! Every prediction counts as played here, whether or not the real match
//! has happened yet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{Participant, Roster, Standings};
use crate::standings::compute_standings;

/// Standings implied by one participant's predictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypotheticalStandings {
    pub participant: String,
    pub standings: Standings,
}

pub fn hypothetical_standings(
    roster: &Roster,
    participant: &Participant,
) -> Result<HypotheticalStandings> {
    let standings = compute_standings(roster, &participant.predictions)?;
    debug!(
        participant = %participant.name,
        predictions = participant.predictions.len(),
        "hypothetical standings computed"
    );
    Ok(HypotheticalStandings {
        participant: participant.name.clone(),
        standings,
    })
}

/// One independent engine run per participant, in input order.
pub fn all_hypothetical_standings(
    roster: &Roster,
    participants: &[Participant],
) -> Result<Vec<HypotheticalStandings>> {
    participants
        .iter()
        .map(|participant| hypothetical_standings(roster, participant))
        .collect()
}
