//! Static tournament roster: six groups of four plus each team's card count.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Number of groups in the group stage.
pub const GROUP_COUNT: usize = 6;
/// Teams per group (single round-robin, six matches per group).
pub const GROUP_SIZE: usize = 4;

/// Yellow and red cards collected by a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplinaryRecord {
    pub yellow: u32,
    pub red: u32,
}

impl DisciplinaryRecord {
    pub fn new(yellow: u32, red: u32) -> Self {
        Self { yellow, red }
    }

    /// Tiebreak value, lower is better. Reds weigh the same as yellows.
    pub fn card_score(&self) -> u32 {
        self.yellow + self.red
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub teams: Vec<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, teams: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            id: id.into(),
            teams: teams.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a team sits in the roster: group index and draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamSlot {
    pub group: usize,
    pub position: usize,
}

/// Validated roster.
///
/// Construction enforces the fixed structure (6 × 4, unique names, one
/// disciplinary record per team), so everything downstream can index
/// groups and teams positionally.
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    groups: Vec<Group>,
    /// `discipline[g][p]` belongs to `groups[g].teams[p]`.
    discipline: Vec<Vec<DisciplinaryRecord>>,
    #[serde(skip)]
    index: FxHashMap<String, TeamSlot>,
}

impl Roster {
    pub fn new(
        groups: Vec<Group>,
        discipline: impl IntoIterator<Item = (String, DisciplinaryRecord)>,
    ) -> Result<Self> {
        if groups.len() != GROUP_COUNT {
            return Err(ConfigurationError::GroupCount {
                expected: GROUP_COUNT,
                found: groups.len(),
            });
        }

        let mut index = FxHashMap::default();
        for (g, group) in groups.iter().enumerate() {
            if groups[..g].iter().any(|earlier| earlier.id == group.id) {
                return Err(ConfigurationError::DuplicateGroup {
                    group: group.id.clone(),
                });
            }
            if group.teams.len() != GROUP_SIZE {
                return Err(ConfigurationError::GroupSize {
                    group: group.id.clone(),
                    expected: GROUP_SIZE,
                    found: group.teams.len(),
                });
            }
            for (position, team) in group.teams.iter().enumerate() {
                let slot = TeamSlot { group: g, position };
                if index.insert(team.clone(), slot).is_some() {
                    return Err(ConfigurationError::DuplicateTeam { team: team.clone() });
                }
            }
        }

        let mut records: Vec<Vec<Option<DisciplinaryRecord>>> =
            vec![vec![None; GROUP_SIZE]; GROUP_COUNT];
        for (team, record) in discipline {
            let slot = index
                .get(&team)
                .ok_or_else(|| ConfigurationError::UnknownTeam { team: team.clone() })?;
            records[slot.group][slot.position] = Some(record);
        }

        let discipline = records
            .into_iter()
            .zip(&groups)
            .map(|(row, group)| {
                row.into_iter()
                    .zip(&group.teams)
                    .map(|(record, team)| {
                        record.ok_or_else(|| ConfigurationError::MissingDiscipline {
                            team: team.clone(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            groups,
            discipline,
            index,
        })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look a team up by name.
    pub fn locate(&self, team: &str) -> Result<TeamSlot> {
        self.index
            .get(team)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownTeam {
                team: team.to_string(),
            })
    }

    pub fn contains(&self, team: &str) -> bool {
        self.index.contains_key(team)
    }

    pub fn discipline(&self, slot: TeamSlot) -> DisciplinaryRecord {
        self.discipline[slot.group][slot.position]
    }

    pub fn team_name(&self, slot: TeamSlot) -> &str {
        &self.groups[slot.group].teams[slot.position]
    }

    /// All teams in group order, then draw order.
    pub fn teams(&self) -> impl Iterator<Item = (TeamSlot, &str)> + '_ {
        self.groups.iter().enumerate().flat_map(|(g, group)| {
            group.teams.iter().enumerate().map(move |(position, team)| {
                (TeamSlot { group: g, position }, team.as_str())
            })
        })
    }

    pub fn team_count(&self) -> usize {
        self.index.len()
    }
}
