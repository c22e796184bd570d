//! Who advances from the group stage: the top two of every group plus the
//! best four third-placed teams.

use serde::{Deserialize, Serialize};

use crate::models::Standings;

/// Group winners and runners-up that advance directly.
pub const GROUP_QUALIFIERS: usize = 2;
/// Third-placed teams that advance after the cross-group ranking.
pub const THIRD_PLACE_QUALIFIERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
    GroupWinner,
    RunnerUp,
    BestThird,
    Eliminated,
}

impl Qualification {
    pub fn advances(self) -> bool {
        !matches!(self, Qualification::Eliminated)
    }
}

impl Standings {
    /// Qualification status of `team`, or `None` if it is not in any group.
    pub fn qualification(&self, team: &str) -> Option<Qualification> {
        let position = self.groups.iter().find_map(|table| table.position(team))?;
        let status = match position {
            0 => Qualification::GroupWinner,
            1 => Qualification::RunnerUp,
            _ => match self.third_place.position(team) {
                Some(rank) if rank < THIRD_PLACE_QUALIFIERS => Qualification::BestThird,
                _ => Qualification::Eliminated,
            },
        };
        Some(status)
    }

    /// The sixteen advancing teams: group top two in group order, then the
    /// best thirds in third-place order.
    pub fn qualified_teams(&self) -> Vec<&str> {
        let direct = self
            .groups
            .iter()
            .flat_map(|table| table.rows.iter().take(GROUP_QUALIFIERS));
        let thirds = self
            .third_place
            .rows
            .iter()
            .take(THIRD_PLACE_QUALIFIERS)
            .map(|entry| &entry.row);
        direct.chain(thirds).map(|row| row.team.as_str()).collect()
    }
}
