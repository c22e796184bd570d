//! Match CSV ingestion.
//!
//! Results and prediction sheets share one row shape:
//!
//! ```text
//! home team, away team, home goals, away goals
//! ```
//!
//! Incomplete rows (unplayed matches, blank cells, non-numeric goals) are
//! dropped here so the core only ever sees fully formed results.

use anyhow::{Context, Result};
use pool_core::MatchResult;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Row counts from one CSV read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub dropped: u32,
    /// First dropped row that has parsed rows after it. Matches are aligned
    /// by index, so every row after this one sits one fixture early.
    pub misaligned_from: Option<u32>,
}

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowIssue {
    TooFewFields(usize),
    EmptyCell(usize),
    BadGoals(String),
}

/// Parse a goal cell. Spreadsheet exports often write `2.0` for 2.
fn parse_goals(cell: &str) -> Option<u8> {
    if let Ok(goals) = cell.parse::<u8>() {
        return Some(goals);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

fn parse_row(record: &csv::StringRecord) -> std::result::Result<MatchResult, RowIssue> {
    if record.len() < 4 {
        return Err(RowIssue::TooFewFields(record.len()));
    }
    if let Some(column) = (0..4).find(|&i| record[i].trim().is_empty()) {
        return Err(RowIssue::EmptyCell(column));
    }
    let home_goals = parse_goals(record[2].trim())
        .ok_or_else(|| RowIssue::BadGoals(record[2].trim().to_string()))?;
    let away_goals = parse_goals(record[3].trim())
        .ok_or_else(|| RowIssue::BadGoals(record[3].trim().to_string()))?;

    Ok(MatchResult::new(
        record[0].trim().trim_start_matches('\u{feff}'),
        record[1].trim(),
        home_goals,
        away_goals,
    ))
}

/// Read match rows from any CSV source, dropping incomplete ones.
pub fn read_matches<R: io::Read>(
    reader: R,
    has_headers: bool,
    source: &str,
) -> Result<(Vec<MatchResult>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut matches = Vec::new();
    let mut stats = ParseStats::default();
    let mut first_dropped = None;

    for record in reader.records() {
        stats.total_rows += 1;
        let record = record
            .with_context(|| format!("Failed to read row {} of {}", stats.total_rows, source))?;

        match parse_row(&record) {
            Ok(result) => {
                stats.parsed += 1;
                if stats.misaligned_from.is_none() {
                    stats.misaligned_from = first_dropped;
                }
                matches.push(result);
            }
            Err(issue) => {
                stats.dropped += 1;
                if first_dropped.is_none() {
                    first_dropped = Some(stats.total_rows);
                }
                warn!(
                    source = %source,
                    row = stats.total_rows,
                    ?issue,
                    "dropping incomplete row; any later rows move up one fixture"
                );
            }
        }
    }

    if let Some(row) = stats.misaligned_from {
        warn!(
            source = %source,
            row,
            "rows after a dropped row no longer line up with the fixture list; \
             predictions scored against them count as not applicable"
        );
    }

    info!(
        source = %source,
        parsed = stats.parsed,
        dropped = stats.dropped,
        "match rows loaded"
    );
    Ok((matches, stats))
}

/// Load played results from a CSV file, in fixture order.
pub fn load_results(path: &Path, has_headers: bool) -> Result<(Vec<MatchResult>, ParseStats)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open results file: {}", path.display()))?;
    read_matches(file, has_headers, &path.display().to_string())
}
