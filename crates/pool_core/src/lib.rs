//! # pool_core - Group Stage Standings and Prediction Pool Engine
//!
//! Computes group standings for a six-group, four-team-per-group stage,
//! ranks the third-placed teams across groups, scores each participant's
//! match predictions, and shows how each participant's predictions would
//! have shaped the tables compared to what actually happened.
//!
//! ## Features
//! - One pure standings engine, reused for real results and for every
//!   participant's predicted results
//! - Fixed four-key ranking rule (points, goal difference, goals scored,
//!   fewest cards) with stable ordering for full ties
//! - Priority-ordered prediction scoring (7/4/3/1/0)
//! - Serializable output tables for any presentation layer
//!
//! Nothing here performs I/O; reading rosters, results and predictions is
//! the adapter crate's job.

pub mod comparator;
pub mod error;
pub mod hypothetical;
pub mod models;
pub mod report;
pub mod scoring;
pub mod standings;

pub use comparator::{compare_group, compare_standings, DeltaRow, GroupDelta, StatDelta};
pub use error::{ConfigurationError, Result};
pub use hypothetical::{all_hypothetical_standings, hypothetical_standings, HypotheticalStandings};
pub use models::{
    DisciplinaryRecord, Group, GroupTable, MatchResult, Outcome, Participant, Prediction, Roster,
    Standings, StandingsRow, TeamSlot, ThirdPlaceRow, ThirdPlaceTable, GROUP_COUNT, GROUP_SIZE,
};
pub use report::{evaluate, ParticipantReport, PoolReport};
pub use scoring::{
    leaderboard, score_prediction, score_predictions, MatchScore, ParticipantTotal, ScoreRule,
};
pub use standings::qualification::{GROUP_QUALIFIERS, THIRD_PLACE_QUALIFIERS};
pub use standings::{compute_standings, Qualification, RankCriterion, RANKING_RULE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
