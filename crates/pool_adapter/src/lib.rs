//! pool_adapter: turn roster YAML and result/prediction CSVs into
//! `pool_core` inputs.
//!
//! Everything that touches files or drops malformed data lives here; the
//! core crate assumes clean, typed input.

pub mod predictions;
pub mod results;
pub mod roster;

pub use predictions::{load_participant, load_predictions_dir};
pub use results::{load_results, read_matches, ParseStats};
pub use roster::{default_roster, load_roster, RosterConfig, EURO_2024_YAML};
