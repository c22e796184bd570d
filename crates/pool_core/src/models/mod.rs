pub mod fixture;
pub mod roster;
pub mod standings;

pub use fixture::{MatchResult, Outcome, Participant, Prediction};
pub use roster::{DisciplinaryRecord, Group, Roster, TeamSlot, GROUP_COUNT, GROUP_SIZE};
pub use standings::{GroupTable, Standings, StandingsRow, ThirdPlaceRow, ThirdPlaceTable};
