//! Prediction sheets: one CSV per participant, named after them.
//!
//! `predictions/Ida.csv` holds Ida's predicted score for every fixture, in
//! fixture order, in the same four-column layout as the results file.

use anyhow::{Context, Result};
use pool_core::Participant;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::results::read_matches;

/// Load one participant's sheet. The participant is named after the file stem.
pub fn load_participant(path: &Path, has_headers: bool) -> Result<Participant> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| format!("Prediction file has no name: {}", path.display()))?;
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open prediction file: {}", path.display()))?;
    let (predictions, stats) = read_matches(file, has_headers, &path.display().to_string())?;
    debug!(
        participant = %name,
        parsed = stats.parsed,
        dropped = stats.dropped,
        "predictions loaded"
    );
    Ok(Participant::new(name, predictions))
}

/// Load every `*.csv` in `dir`, ordered by file name.
pub fn load_predictions_dir(dir: &Path, has_headers: bool) -> Result<Vec<Participant>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read predictions directory: {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list predictions directory: {}", dir.display()))?
            .path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            paths.push(path);
        }
    }
    paths.sort();

    let participants = paths
        .iter()
        .map(|path| load_participant(path, has_headers))
        .collect::<Result<Vec<_>>>()?;
    info!(count = participants.len(), dir = %dir.display(), "participants loaded");
    Ok(participants)
}
