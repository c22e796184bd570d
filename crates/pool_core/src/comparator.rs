//! Differences between a participant's implied group tables and the real ones.
//!
//! Two conventions to keep in mind:
//! - rank shift is `real index - hypothetical index`, so a team the
//!   participant ranked higher than it actually finished shows a positive
//!   shift;
//! - statistic deltas carry `real - hypothetical`, so a hypothetical value
//!   above reality renders with a minus sign (`5 (-2)`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConfigurationError, Result};
use crate::models::{GroupTable, Standings, StandingsRow};

/// A hypothetical statistic next to its distance from reality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    pub value: i32,
    /// `real - value`.
    pub diff: i32,
}

impl StatDelta {
    pub fn new(hypothetical: i32, real: i32) -> Self {
        Self {
            value: hypothetical,
            diff: real - hypothetical,
        }
    }
}

impl fmt::Display for StatDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({:+})", self.value, self.diff)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaRow {
    pub team: String,
    pub rank_shift: i32,
    pub points: StatDelta,
    pub goals_for: StatDelta,
    pub goals_against: StatDelta,
    pub goal_difference: StatDelta,
}

impl DeltaRow {
    fn between(hypothetical: &StandingsRow, real: &StandingsRow, rank_shift: i32) -> Self {
        Self {
            team: hypothetical.team.clone(),
            rank_shift,
            points: StatDelta::new(hypothetical.points as i32, real.points as i32),
            goals_for: StatDelta::new(hypothetical.goals_for as i32, real.goals_for as i32),
            goals_against: StatDelta::new(
                hypothetical.goals_against as i32,
                real.goals_against as i32,
            ),
            goal_difference: StatDelta::new(hypothetical.goal_difference, real.goal_difference),
        }
    }

    /// Team name annotated with its signed rank shift, e.g. `Spain (+1)`.
    pub fn label(&self) -> String {
        format!("{} ({:+})", self.team, self.rank_shift)
    }
}

/// Delta rows for one group, in hypothetical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDelta {
    pub group: String,
    pub rows: Vec<DeltaRow>,
}

/// Compare a hypothetical group table against the real one.
pub fn compare_group(hypothetical: &GroupTable, real: &GroupTable) -> Result<GroupDelta> {
    let mismatch = || ConfigurationError::TableMismatch {
        group: real.group.clone(),
    };
    if hypothetical.rows.len() != real.rows.len() {
        return Err(mismatch());
    }

    let rows = hypothetical
        .rows
        .iter()
        .enumerate()
        .map(|(hypo_index, hypo_row)| {
            let real_index = real.position(&hypo_row.team).ok_or_else(mismatch)?;
            let rank_shift = real_index as i32 - hypo_index as i32;
            Ok(DeltaRow::between(hypo_row, &real.rows[real_index], rank_shift))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(GroupDelta {
        group: hypothetical.group.clone(),
        rows,
    })
}

/// Per-group comparison of full standings. The third-place table is not
/// compared.
pub fn compare_standings(hypothetical: &Standings, real: &Standings) -> Result<Vec<GroupDelta>> {
    hypothetical
        .groups
        .iter()
        .map(|table| {
            let real_table = real
                .group(&table.group)
                .ok_or_else(|| ConfigurationError::TableMismatch {
                    group: table.group.clone(),
                })?;
            compare_group(table, real_table)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, points: u32, gf: u32, ga: u32) -> StandingsRow {
        let mut row = StandingsRow::new(team);
        row.points = points;
        row.goals_for = gf;
        row.goals_against = ga;
        row.finalize(0);
        row
    }

    fn table(rows: Vec<StandingsRow>) -> GroupTable {
        GroupTable {
            group: "Group A".to_string(),
            rows,
        }
    }

    #[test]
    fn test_identical_tables_show_zero() {
        let real = table(vec![
            row("Germany", 7, 8, 2),
            row("Switzerland", 5, 5, 3),
            row("Hungary", 3, 2, 5),
            row("Scotland", 1, 2, 7),
        ]);
        let delta = compare_group(&real, &real).unwrap();

        for r in &delta.rows {
            assert_eq!(r.rank_shift, 0);
            assert_eq!(r.points.diff, 0);
            assert_eq!(r.goal_difference.diff, 0);
        }
        assert_eq!(delta.rows[0].label(), "Germany (+0)");
        assert_eq!(delta.rows[0].points.to_string(), "7 (+0)");
        assert_eq!(delta.rows[3].goal_difference.to_string(), "-5 (+0)");
    }

    #[test]
    fn test_rank_shift_and_inverted_stat_sign() {
        let real = table(vec![
            row("Germany", 7, 8, 2),
            row("Switzerland", 5, 5, 3),
            row("Hungary", 3, 2, 5),
            row("Scotland", 1, 2, 7),
        ]);
        // Participant had Scotland winning the group.
        let hypothetical = table(vec![
            row("Scotland", 9, 6, 1),
            row("Germany", 6, 5, 2),
            row("Switzerland", 3, 3, 4),
            row("Hungary", 0, 1, 8),
        ]);
        let delta = compare_group(&hypothetical, &real).unwrap();

        let labels: Vec<String> = delta.rows.iter().map(DeltaRow::label).collect();
        assert_eq!(labels, ["Scotland (+3)", "Germany (-1)", "Switzerland (-1)", "Hungary (-1)"]);

        let scotland = &delta.rows[0];
        // Hypothetical above real: minus sign.
        assert_eq!(scotland.points.to_string(), "9 (-8)");
        assert_eq!(scotland.goal_difference.to_string(), "5 (-10)");
        // Hypothetical below real: plus sign.
        assert_eq!(scotland.goals_against.to_string(), "1 (+6)");
        let germany = &delta.rows[1];
        assert_eq!(germany.goals_for.to_string(), "5 (+3)");
    }

    #[test]
    fn test_mismatched_tables_rejected() {
        let real = table(vec![row("A1", 0, 0, 0), row("A2", 0, 0, 0)]);
        let other = table(vec![row("A1", 0, 0, 0), row("B2", 0, 0, 0)]);
        assert_eq!(
            compare_group(&other, &real).unwrap_err(),
            ConfigurationError::TableMismatch { group: "Group A".into() }
        );
        let short = table(vec![row("A1", 0, 0, 0)]);
        assert!(compare_group(&short, &real).is_err());
    }

    #[test]
    fn test_compare_standings_per_group() {
        use crate::models::roster::test_support::sample_roster;
        use crate::models::MatchResult;
        use crate::standings::compute_standings;

        let roster = sample_roster();
        let real = compute_standings(&roster, &[MatchResult::new("C1", "C2", 0, 1)]).unwrap();
        let hypo = compute_standings(&roster, &[MatchResult::new("C1", "C2", 2, 0)]).unwrap();
        let deltas = compare_standings(&hypo, &real).unwrap();

        assert_eq!(deltas.len(), 6);
        let group_c = &deltas[2];
        assert_eq!(group_c.group, "Group C");
        // Real: C2, C3, C4, C1. Hypothetical: C1, C3, C4, C2.
        assert_eq!(group_c.rows[0].label(), "C1 (+3)");
        assert_eq!(group_c.rows[3].label(), "C2 (-3)");
        assert!(deltas[0].rows.iter().all(|r| r.rank_shift == 0));
    }
}
