use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of a match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// A played group match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home: String,
    pub away: String,
    pub home_goals: u8,
    pub away_goals: u8,
}

/// A participant's guess has the same shape as a real result.
pub type Prediction = MatchResult;

impl MatchResult {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        home_goals: u8,
        away_goals: u8,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Same home and away team, in the same orientation.
    pub fn same_fixture(&self, other: &MatchResult) -> bool {
        self.home == other.home && self.away == other.away
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.home, self.home_goals, self.away_goals, self.away
        )
    }
}

/// One member of the pool and their pre-tournament predictions, in fixture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub predictions: Vec<Prediction>,
}

impl Participant {
    pub fn new(name: impl Into<String>, predictions: Vec<Prediction>) -> Self {
        Self {
            name: name.into(),
            predictions,
        }
    }
}
