use thiserror::Error;

/// Roster or fixture data that does not fit the fixed tournament structure.
///
/// These are terminal for the computation that raised them; nothing in the
/// core retries or skips past one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown team: {team}")]
    UnknownTeam { team: String },

    #[error("Fixture {home} vs {away} crosses groups")]
    CrossGroupFixture { home: String, away: String },

    #[error("Team {team} cannot play itself")]
    SelfFixture { team: String },

    #[error("Invalid group count: expected {expected}, found {found}")]
    GroupCount { expected: usize, found: usize },

    #[error("Invalid group size in {group}: expected {expected}, found {found}")]
    GroupSize {
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Team listed twice in roster: {team}")]
    DuplicateTeam { team: String },

    #[error("Group listed twice in roster: {group}")]
    DuplicateGroup { group: String },

    #[error("No disciplinary record for {team}")]
    MissingDiscipline { team: String },

    #[error("Tables for {group} do not hold the same teams")]
    TableMismatch { group: String },
}

impl ConfigurationError {
    /// True when the roster itself is malformed, as opposed to a result,
    /// prediction or table referring to something the roster lacks.
    pub fn is_roster_error(&self) -> bool {
        match self {
            ConfigurationError::GroupCount { .. }
            | ConfigurationError::GroupSize { .. }
            | ConfigurationError::DuplicateTeam { .. }
            | ConfigurationError::DuplicateGroup { .. }
            | ConfigurationError::MissingDiscipline { .. } => true,
            ConfigurationError::UnknownTeam { .. }
            | ConfigurationError::CrossGroupFixture { .. }
            | ConfigurationError::SelfFixture { .. }
            | ConfigurationError::TableMismatch { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_team() {
        let err = ConfigurationError::UnknownTeam {
            team: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown team: Atlantis");
    }

    #[test]
    fn test_roster_error_classification() {
        assert!(ConfigurationError::GroupCount { expected: 6, found: 5 }.is_roster_error());
        assert!(ConfigurationError::MissingDiscipline { team: "X".into() }.is_roster_error());
        assert!(!ConfigurationError::SelfFixture { team: "X".into() }.is_roster_error());
        assert!(!ConfigurationError::CrossGroupFixture {
            home: "X".into(),
            away: "Y".into()
        }
        .is_roster_error());
    }
}
