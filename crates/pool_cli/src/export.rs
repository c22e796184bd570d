//! JSON report export.

use anyhow::{Context, Result};
use pool_core::{MatchResult, Participant, PoolReport, Roster, SCHEMA_VERSION};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Header written in front of every exported report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub schema_version: u8,
    pub tool_version: String,
    /// RFC3339.
    pub generated_at: String,
    /// SHA256 (hex) of the canonical JSON of roster, results and predictions.
    pub input_checksum: String,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    metadata: &'a ReportMetadata,
    #[serde(flatten)]
    report: &'a PoolReport,
}

#[derive(Serialize)]
struct Inputs<'a> {
    roster: &'a Roster,
    results: &'a [MatchResult],
    participants: &'a [Participant],
}

/// Identical inputs give identical checksums.
pub fn input_checksum(
    roster: &Roster,
    results: &[MatchResult],
    participants: &[Participant],
) -> Result<String> {
    let canonical = serde_json::to_vec(&Inputs {
        roster,
        results,
        participants,
    })
    .context("Failed to serialize inputs")?;

    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn write_report(
    path: &Path,
    report: &PoolReport,
    roster: &Roster,
    results: &[MatchResult],
    participants: &[Participant],
) -> Result<ReportMetadata> {
    let metadata = ReportMetadata {
        schema_version: SCHEMA_VERSION,
        tool_version: pool_core::VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        input_checksum: input_checksum(roster, results, participants)?,
    };

    let json = serde_json::to_string_pretty(&ReportDocument {
        metadata: &metadata,
        report,
    })
    .context("Failed to serialize report")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, json)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    Ok(metadata)
}
