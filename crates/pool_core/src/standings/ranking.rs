//! The ranking rule shared by group tables and the third-place table.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::StandingsRow;

/// Tiebreak keys, applied in order until one separates two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankCriterion {
    Points,
    GoalDifference,
    GoalsFor,
    CardScore, // Lower is better.
}

/// Points, then goal difference, then goals scored, then fewest cards.
/// Rows equal on all four keep their input order.
pub const RANKING_RULE: [RankCriterion; 4] = [
    RankCriterion::Points,
    RankCriterion::GoalDifference,
    RankCriterion::GoalsFor,
    RankCriterion::CardScore,
];

impl RankCriterion {
    /// `Less` means `a` ranks above `b`.
    pub fn compare(self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        match self {
            RankCriterion::Points => b.points.cmp(&a.points),
            RankCriterion::GoalDifference => b.goal_difference.cmp(&a.goal_difference),
            RankCriterion::GoalsFor => b.goals_for.cmp(&a.goals_for),
            RankCriterion::CardScore => a.card_score.cmp(&b.card_score),
        }
    }
}

pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    RANKING_RULE
        .iter()
        .map(|criterion| criterion.compare(a, b))
        .find(|order| order.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable sort by the ranking rule.
pub fn rank_by<T>(items: &mut [T], row: impl Fn(&T) -> &StandingsRow) {
    items.sort_by(|a, b| compare_rows(row(a), row(b)));
}
