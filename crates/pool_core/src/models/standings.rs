//! Output tables of the standings engine.

use serde::{Deserialize, Serialize};

/// Aggregated group-stage record of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub played: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Always `goals_for - goals_against`, see [`StandingsRow::finalize`].
    pub goal_difference: i32,
    /// Yellow plus red cards; lower ranks higher.
    pub card_score: u32,
}

impl StandingsRow {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            played: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            card_score: 0,
        }
    }

    /// Fold one match into the row from this team's perspective.
    pub(crate) fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += u32::from(scored);
        self.goals_against += u32::from(conceded);
        self.points += match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => 3,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Less => 0,
        };
    }

    /// Derive goal difference and card score once all results are folded in.
    pub(crate) fn finalize(&mut self, card_score: u32) {
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        self.card_score = card_score;
    }
}

/// One group ranked by the ranking rule. Always four rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group: String,
    pub rows: Vec<StandingsRow>,
}

impl GroupTable {
    /// 0-based rank of `team`, if it is in this group.
    pub fn position(&self, team: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.team == team)
    }

    pub fn row(&self, team: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|row| row.team == team)
    }

    pub fn third_placed(&self) -> Option<&StandingsRow> {
        self.rows.get(2)
    }
}

/// A third-placed team together with the group it came third in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPlaceRow {
    pub group: String,
    pub row: StandingsRow,
}

/// The six third-placed teams ranked against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPlaceTable {
    pub rows: Vec<ThirdPlaceRow>,
}

impl ThirdPlaceTable {
    pub fn position(&self, team: &str) -> Option<usize> {
        self.rows.iter().position(|entry| entry.row.team == team)
    }
}

/// Everything one engine run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub groups: Vec<GroupTable>,
    pub third_place: ThirdPlaceTable,
}

impl Standings {
    pub fn group(&self, id: &str) -> Option<&GroupTable> {
        self.groups.iter().find(|table| table.group == id)
    }
}
