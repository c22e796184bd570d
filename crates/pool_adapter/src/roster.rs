//! Roster configuration loading.
//!
//! The roster is static YAML: the six groups in draw order and every team's
//! yellow/red card count. A default for the 2024 European Championship is
//! embedded at compile time.

use anyhow::{Context, Result};
use pool_core::{DisciplinaryRecord, Group, Roster};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Euro 2024 roster YAML (compile-time embedded).
pub const EURO_2024_YAML: &str = include_str!("../data/euro2024.yaml");

static DEFAULT_ROSTER: OnceLock<Roster> = OnceLock::new();

/// On-disk shape of a roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub groups: Vec<Group>,
    pub discipline: BTreeMap<String, DisciplinaryRecord>,
}

impl RosterConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse roster YAML")
    }

    /// Validate into a core roster.
    pub fn into_roster(self) -> Result<Roster> {
        let roster = Roster::new(self.groups, self.discipline)?;
        debug!(teams = roster.team_count(), "roster validated");
        Ok(roster)
    }
}

/// Load and validate a roster file.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    RosterConfig::from_yaml(&yaml)
        .and_then(RosterConfig::into_roster)
        .with_context(|| format!("Invalid roster in {}", path.display()))
}

/// The embedded Euro 2024 roster.
///
/// # Panics
///
/// Panics if the embedded YAML is invalid, which the tests below rule out.
pub fn default_roster() -> &'static Roster {
    DEFAULT_ROSTER.get_or_init(|| {
        RosterConfig::from_yaml(EURO_2024_YAML)
            .and_then(RosterConfig::into_roster)
            .expect("Failed to parse embedded euro2024.yaml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_core::{ConfigurationError, TeamSlot};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_roster_is_valid() {
        let roster = default_roster();
        assert_eq!(roster.team_count(), 24);
        assert_eq!(roster.groups()[0].id, "Group A");
        let czechia = roster.locate("Czechia").unwrap();
        assert_eq!(czechia, TeamSlot { group: 5, position: 3 });
        assert_eq!(roster.discipline(czechia).card_score(), 15);
    }

    #[test]
    fn test_load_roster_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(EURO_2024_YAML.as_bytes())?;
        let roster = load_roster(file.path())?;
        assert_eq!(roster.groups(), default_roster().groups());
        Ok(())
    }

    #[test]
    fn test_missing_card_entry_is_configuration_error() {
        let yaml = EURO_2024_YAML.replace("  Croatia: { yellow: 7, red: 0 }\n", "");
        let err = RosterConfig::from_yaml(&yaml)
            .and_then(RosterConfig::into_roster)
            .unwrap_err();
        let core = err.downcast_ref::<ConfigurationError>().unwrap();
        assert_eq!(
            *core,
            ConfigurationError::MissingDiscipline {
                team: "Croatia".into()
            }
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_roster(Path::new("/nonexistent/roster.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/roster.yaml"));
    }
}
