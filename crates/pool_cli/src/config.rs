//! Run configuration.
//!
//! Read from `--config <file>` or, failing that, the file named by
//! `POOL_CONFIG_PATH`. Command-line flags override whatever the file says.
//!
//! Relative paths inside a config file are taken relative to that file;
//! relative paths given as flags are taken relative to the working directory.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "POOL_CONFIG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Roster YAML; the embedded Euro 2024 roster when absent.
    pub roster: Option<PathBuf>,
    /// Played results CSV.
    pub results: Option<PathBuf>,
    /// Directory with one prediction CSV per participant.
    pub predictions: Option<PathBuf>,
    pub results_has_headers: bool,
    pub predictions_has_headers: bool,
}

/// Values given on the command line. `None`/`false` leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub roster: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub predictions: Option<PathBuf>,
    pub headers: bool,
}

impl PoolConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse config YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config.relative_to(path.parent().unwrap_or(Path::new(""))))
    }

    /// Anchor relative input paths at `base`.
    fn relative_to(mut self, base: &Path) -> Self {
        for field in [&mut self.roster, &mut self.results, &mut self.predictions] {
            if let Some(path) = field {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
        self
    }

    /// Explicit path first, then the environment, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim()))
                .with_context(|| format!("Failed to load config from {CONFIG_PATH_ENV}")),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.roster.is_some() {
            self.roster = overrides.roster;
        }
        if overrides.results.is_some() {
            self.results = overrides.results;
        }
        if overrides.predictions.is_some() {
            self.predictions = overrides.predictions;
        }
        if overrides.headers {
            self.results_has_headers = true;
            self.predictions_has_headers = true;
        }
        self
    }

    pub fn validate(&self, needs_predictions: bool) -> Result<()> {
        if self.results.is_none() {
            bail!("No results file configured (use --results or set `results` in the config)");
        }
        if needs_predictions && self.predictions.is_none() {
            bail!(
                "No predictions directory configured (use --predictions or set `predictions` in the config)"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::{tempdir, NamedTempFile};

    // Tests that touch POOL_CONFIG_PATH hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_yaml_with_defaults() -> Result<()> {
        let config = PoolConfig::from_yaml("results: data/results.csv\n")?;
        assert_eq!(config.results, Some(PathBuf::from("data/results.csv")));
        assert_eq!(config.roster, None);
        assert!(!config.results_has_headers);
        Ok(())
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(PoolConfig::from_yaml("resluts: typo.csv\n").is_err());
    }

    #[test]
    fn test_overrides_win() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "results: file.csv")?;
        writeln!(file, "predictions: sheets")?;

        let config = PoolConfig::resolve(Some(file.path()))?.with_overrides(Overrides {
            results: Some(PathBuf::from("flag.csv")),
            headers: true,
            ..Overrides::default()
        });
        assert_eq!(config.results, Some(PathBuf::from("flag.csv")));
        let dir = file.path().parent().unwrap();
        assert_eq!(config.predictions, Some(dir.join("sheets")));
        assert!(config.results_has_headers && config.predictions_has_headers);
        Ok(())
    }

    #[test]
    fn test_validate() {
        let config = PoolConfig::default();
        assert!(config.validate(false).is_err());

        let config = PoolConfig {
            results: Some(PathBuf::from("r.csv")),
            ..PoolConfig::default()
        };
        assert!(config.validate(false).is_ok());
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_paths_relative_to_config_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("pool.yaml");
        fs::write(
            &path,
            "results: results.csv\npredictions: sheets\nroster: /etc/roster.yaml\n",
        )?;

        let config = PoolConfig::load(&path)?;
        assert_eq!(config.results, Some(dir.path().join("results.csv")));
        assert_eq!(config.predictions, Some(dir.path().join("sheets")));
        assert_eq!(config.roster, Some(PathBuf::from("/etc/roster.yaml")));
        Ok(())
    }

    #[test]
    fn test_demo_config_runs_from_any_directory() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/euro2024/pool.yaml");
        let config = PoolConfig::load(&path)?;
        assert!(config.results.as_deref().is_some_and(Path::is_file));
        assert!(config.predictions.as_deref().is_some_and(Path::is_dir));
        Ok(())
    }

    #[test]
    fn test_resolve_from_environment() -> Result<()> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempdir()?;
        let env_file = dir.path().join("env.yaml");
        fs::write(&env_file, "results: env.csv\nresults_has_headers: true\n")?;
        let flag_file = dir.path().join("flag.yaml");
        fs::write(&flag_file, "results: flag.csv\n")?;

        env::set_var(CONFIG_PATH_ENV, &env_file);
        let config = PoolConfig::resolve(None)?;
        assert_eq!(config.results, Some(dir.path().join("env.csv")));
        assert!(config.results_has_headers);

        // An explicit path wins over the environment.
        let config = PoolConfig::resolve(Some(flag_file.as_path()))?;
        assert_eq!(config.results, Some(dir.path().join("flag.csv")));

        // Blank value: defaults.
        env::set_var(CONFIG_PATH_ENV, "   ");
        assert_eq!(PoolConfig::resolve(None)?, PoolConfig::default());

        env::set_var(CONFIG_PATH_ENV, dir.path().join("missing.yaml"));
        let err = PoolConfig::resolve(None).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_PATH_ENV));

        // Cleanup
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(PoolConfig::resolve(None)?, PoolConfig::default());
        Ok(())
    }
}
