//! Prediction scorer.
//!
//! Predictions are matched to real results by fixture index. Each aligned
//! pair earns points under a fixed, priority-ordered rule set; the first
//! rule that applies wins.
//!
//! | Rule | Condition | Points |
//! |---|---|---|
//! | [`ScoreRule::ExactScore`] | both goal counts right | 7 |
//! | [`ScoreRule::OutcomeAndGoals`] | right outcome, one goal count right | 4 |
//! | [`ScoreRule::Outcome`] | right outcome | 3 |
//! | [`ScoreRule::GoalsOnly`] | wrong outcome, one goal count right | 1 |
//! | [`ScoreRule::Miss`] | nothing right | 0 |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{MatchResult, Participant, Prediction, Roster};
use crate::standings::resolve_fixture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    ExactScore,
    OutcomeAndGoals,
    Outcome,
    GoalsOnly,
    Miss,
}

impl ScoreRule {
    pub fn points(self) -> u32 {
        match self {
            ScoreRule::ExactScore => 7,
            ScoreRule::OutcomeAndGoals => 4,
            ScoreRule::Outcome => 3,
            ScoreRule::GoalsOnly => 1,
            ScoreRule::Miss => 0,
        }
    }
}

/// Score of one prediction against the real result at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "rule")]
pub enum MatchScore {
    Awarded(ScoreRule),
    /// The prediction at this index is for a different fixture.
    NotApplicable,
}

impl MatchScore {
    /// Points earned, `None` for a misaligned fixture.
    pub fn points(self) -> Option<u32> {
        match self {
            MatchScore::Awarded(rule) => Some(rule.points()),
            MatchScore::NotApplicable => None,
        }
    }
}

/// Score a single prediction.
pub fn score_prediction(predicted: &Prediction, actual: &MatchResult) -> MatchScore {
    if !predicted.same_fixture(actual) {
        return MatchScore::NotApplicable;
    }

    let home_right = predicted.home_goals == actual.home_goals;
    let away_right = predicted.away_goals == actual.away_goals;
    let outcome_right = predicted.outcome() == actual.outcome();

    let rule = if home_right && away_right {
        ScoreRule::ExactScore
    } else if outcome_right && (home_right || away_right) {
        ScoreRule::OutcomeAndGoals
    } else if outcome_right {
        ScoreRule::Outcome
    } else if home_right || away_right {
        ScoreRule::GoalsOnly
    } else {
        ScoreRule::Miss
    };
    MatchScore::Awarded(rule)
}

/// Score every prediction that has a played counterpart.
///
/// Only the overlapping prefix is scored: predictions for matches not yet
/// played are ignored, and a short prediction list simply yields fewer
/// scores.
pub fn score_predictions(predictions: &[Prediction], results: &[MatchResult]) -> Vec<MatchScore> {
    predictions
        .iter()
        .zip(results)
        .map(|(predicted, actual)| score_prediction(predicted, actual))
        .collect()
}

/// Sum of all applicable scores.
pub fn total(scores: &[MatchScore]) -> u32 {
    scores.iter().filter_map(|score| score.points()).sum()
}

/// One line of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTotal {
    pub participant: String,
    pub total: u32,
    /// Matches scored, misaligned fixtures excluded.
    pub scored_matches: usize,
    pub exact_scores: usize,
}

impl ParticipantTotal {
    pub fn from_scores(participant: impl Into<String>, scores: &[MatchScore]) -> Self {
        Self {
            participant: participant.into(),
            total: total(scores),
            scored_matches: scores.iter().filter(|s| s.points().is_some()).count(),
            exact_scores: scores
                .iter()
                .filter(|s| **s == MatchScore::Awarded(ScoreRule::ExactScore))
                .count(),
        }
    }
}

/// Totals for every participant, highest first. Equal totals keep the
/// order in which participants were supplied.
///
/// Every result and prediction must name two rostered teams of one group;
/// a misspelled team is an error here, not a silently unscored match.
pub fn leaderboard(
    roster: &Roster,
    participants: &[Participant],
    results: &[MatchResult],
) -> Result<Vec<ParticipantTotal>> {
    for result in results {
        resolve_fixture(roster, result)?;
    }

    let mut board = participants
        .iter()
        .map(|participant| {
            for predicted in &participant.predictions {
                resolve_fixture(roster, predicted)?;
            }
            let scores = score_predictions(&participant.predictions, results);
            let line = ParticipantTotal::from_scores(&participant.name, &scores);
            debug!(participant = %line.participant, total = line.total, "scored");
            Ok(line)
        })
        .collect::<Result<Vec<_>>>()?;
    rank_totals(&mut board);
    Ok(board)
}

/// Stable descending sort on total points.
pub fn rank_totals(board: &mut [ParticipantTotal]) {
    board.sort_by(|a, b| b.total.cmp(&a.total));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::models::roster::test_support::sample_roster;

    fn score(predicted: (u8, u8), actual: (u8, u8)) -> MatchScore {
        score_prediction(
            &MatchResult::new("Home", "Away", predicted.0, predicted.1),
            &MatchResult::new("Home", "Away", actual.0, actual.1),
        )
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(score((2, 1), (2, 1)).points(), Some(7));
        assert_eq!(score((1, 0), (2, 0)).points(), Some(4));
        assert_eq!(score((3, 1), (1, 0)).points(), Some(3));
        assert_eq!(score((0, 1), (1, 1)).points(), Some(1));
        assert_eq!(score((1, 1), (2, 0)).points(), Some(0));
    }

    #[test]
    fn test_rule_variants() {
        assert_eq!(score((0, 0), (0, 0)), MatchScore::Awarded(ScoreRule::ExactScore));
        assert_eq!(score((1, 1), (2, 2)), MatchScore::Awarded(ScoreRule::Outcome));
        assert_eq!(score((2, 3), (1, 3)), MatchScore::Awarded(ScoreRule::OutcomeAndGoals));
        assert_eq!(score((2, 0), (0, 2)), MatchScore::Awarded(ScoreRule::Miss));
        assert_eq!(score((2, 2), (2, 0)), MatchScore::Awarded(ScoreRule::GoalsOnly));
    }

    #[test]
    fn test_misaligned_fixture_is_not_applicable() {
        let predicted = MatchResult::new("Spain", "Italy", 1, 0);
        let actual = MatchResult::new("Italy", "Spain", 1, 0);
        let result = score_prediction(&predicted, &actual);
        assert_eq!(result, MatchScore::NotApplicable);
        assert_eq!(result.points(), None);
    }

    #[test]
    fn test_only_played_prefix_is_scored() {
        let results = vec![MatchResult::new("A", "B", 1, 0)];
        let predictions = vec![
            MatchResult::new("A", "B", 1, 0),
            MatchResult::new("C", "D", 2, 2),
        ];
        let scores = score_predictions(&predictions, &results);
        assert_eq!(scores.len(), 1);
        assert_eq!(total(&scores), 7);

        // Shorter prediction list than results: tolerated.
        assert!(score_predictions(&[], &results).is_empty());
    }

    #[test]
    fn test_total_skips_not_applicable() {
        let scores = vec![
            MatchScore::Awarded(ScoreRule::ExactScore),
            MatchScore::NotApplicable,
            MatchScore::Awarded(ScoreRule::Outcome),
        ];
        assert_eq!(total(&scores), 10);
        let line = ParticipantTotal::from_scores("Ida", &scores);
        assert_eq!(line.scored_matches, 2);
        assert_eq!(line.exact_scores, 1);
    }

    #[test]
    fn test_leaderboard_descending_and_stable() {
        let results = vec![
            MatchResult::new("A1", "A2", 2, 1),
            MatchResult::new("A3", "A4", 0, 0),
        ];
        let participants = vec![
            Participant::new(
                "first_three",
                vec![MatchResult::new("A1", "A2", 1, 0), MatchResult::new("A3", "A4", 1, 2)],
            ),
            Participant::new(
                "exact",
                vec![MatchResult::new("A1", "A2", 2, 1), MatchResult::new("A3", "A4", 0, 0)],
            ),
            Participant::new(
                "second_three",
                vec![MatchResult::new("A1", "A2", 3, 0), MatchResult::new("A3", "A4", 2, 1)],
            ),
        ];
        let board = leaderboard(&sample_roster(), &participants, &results).unwrap();
        let order: Vec<(&str, u32)> = board
            .iter()
            .map(|l| (l.participant.as_str(), l.total))
            .collect();
        assert_eq!(order, [("exact", 14), ("first_three", 3), ("second_three", 3)]);
    }

    #[test]
    fn test_leaderboard_rejects_misspelled_prediction() {
        let results = vec![
            MatchResult::new("B1", "B2", 3, 0),
            MatchResult::new("B3", "B4", 1, 2),
        ];
        let participants = vec![Participant::new(
            "Mads",
            vec![MatchResult::new("B1", "B2", 3, 0), MatchResult::new("B33", "B4", 1, 2)],
        )];
        let err = leaderboard(&sample_roster(), &participants, &results).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownTeam { team: "B33".into() });
    }

    #[test]
    fn test_leaderboard_rejects_misspelled_result() {
        let results = vec![MatchResult::new("Germny", "A2", 5, 1)];
        let participants = vec![Participant::new("Ida", vec![MatchResult::new("A1", "A2", 1, 0)])];
        let err = leaderboard(&sample_roster(), &participants, &results).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownTeam { team: "Germny".into() });

        // Unknown teams surface even when nobody has predicted anything yet.
        assert!(leaderboard(&sample_roster(), &[], &results).is_err());
    }

    #[test]
    fn test_match_score_serializes_tagged() {
        let json = serde_json::to_string(&MatchScore::Awarded(ScoreRule::GoalsOnly)).unwrap();
        assert_eq!(json, r#"{"kind":"awarded","rule":"goals_only"}"#);
        let json = serde_json::to_string(&MatchScore::NotApplicable).unwrap();
        assert_eq!(json, r#"{"kind":"not_applicable"}"#);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an exact prediction always earns 7
            #[test]
            fn prop_exact_always_seven(home in 0u8..20, away in 0u8..20) {
                prop_assert_eq!(score((home, away), (home, away)).points(), Some(7));
            }

            /// Property: every aligned score lands in the award set
            #[test]
            fn prop_points_in_award_set(p in (0u8..8, 0u8..8), a in (0u8..8, 0u8..8)) {
                let points = score(p, a).points().unwrap();
                prop_assert!([0, 1, 3, 4, 7].contains(&points));
            }
        }
    }
}
