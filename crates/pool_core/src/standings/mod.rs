//! Standings engine.
//!
//! One pure function, [`compute_standings`], turns a roster and a sequence of
//! results into ranked group tables plus the cross-group ranking of the
//! third-placed teams. It runs once for the real results and once per
//! participant with their predictions substituted, so it owns no state: every
//! call starts from zeroed rows.

pub mod qualification;
pub mod ranking;

use tracing::debug;

use crate::error::{ConfigurationError, Result};
use crate::models::{
    GroupTable, MatchResult, Roster, Standings, StandingsRow, TeamSlot, ThirdPlaceRow,
    ThirdPlaceTable,
};

pub use qualification::Qualification;
pub use ranking::{compare_rows, rank_by, RankCriterion, RANKING_RULE};

/// Resolve both sides of a fixture against the roster.
///
/// Fails on unknown teams, a team playing itself, or teams from different
/// groups.
pub fn resolve_fixture(roster: &Roster, result: &MatchResult) -> Result<(TeamSlot, TeamSlot)> {
    let home = roster.locate(&result.home)?;
    let away = roster.locate(&result.away)?;
    if home == away {
        return Err(ConfigurationError::SelfFixture {
            team: result.home.clone(),
        });
    }
    if home.group != away.group {
        return Err(ConfigurationError::CrossGroupFixture {
            home: result.home.clone(),
            away: result.away.clone(),
        });
    }
    Ok((home, away))
}

/// Compute group tables and the third-place table.
///
/// `results` may hold any number of played matches, including none; teams
/// without a match keep zero rows and are still ranked (draw order breaks
/// the all-zero tie).
pub fn compute_standings(roster: &Roster, results: &[MatchResult]) -> Result<Standings> {
    let mut rows: Vec<Vec<StandingsRow>> = roster
        .groups()
        .iter()
        .map(|group| group.teams.iter().map(StandingsRow::new).collect())
        .collect();

    for result in results {
        let (home, away) = resolve_fixture(roster, result)?;
        rows[home.group][home.position].record(result.home_goals, result.away_goals);
        rows[away.group][away.position].record(result.away_goals, result.home_goals);
    }

    for (slot, _) in roster.teams() {
        let card_score = roster.discipline(slot).card_score();
        rows[slot.group][slot.position].finalize(card_score);
    }

    let groups: Vec<GroupTable> = roster
        .groups()
        .iter()
        .zip(rows)
        .map(|(group, mut rows)| {
            rank_by(&mut rows, |row| row);
            GroupTable {
                group: group.id.clone(),
                rows,
            }
        })
        .collect();

    let mut third_rows: Vec<ThirdPlaceRow> = groups
        .iter()
        .filter_map(|table| {
            table.third_placed().map(|row| ThirdPlaceRow {
                group: table.group.clone(),
                row: row.clone(),
            })
        })
        .collect();
    rank_by(&mut third_rows, |entry| &entry.row);

    debug!(
        leader = ?third_rows.first().map(|entry| entry.row.team.as_str()),
        "third-place table ranked"
    );

    Ok(Standings {
        groups,
        third_place: ThirdPlaceTable { rows: third_rows },
    })
}
