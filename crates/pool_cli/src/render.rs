//! Plain-text tables for the terminal.
//!
//! Every function here reads core output and returns a `String` without a
//! trailing newline; nothing is mutated.

use pool_core::{
    GroupDelta, GroupTable, MatchResult, ParticipantReport, ParticipantTotal, Qualification,
    Standings, StandingsRow,
};

fn marker(status: Option<Qualification>) -> &'static str {
    match status {
        Some(Qualification::GroupWinner) | Some(Qualification::RunnerUp) => "Q",
        Some(Qualification::BestThird) => "q",
        Some(Qualification::Eliminated) | None => "",
    }
}

fn stats_header(lead: &str) -> String {
    format!("{lead}{:>3}{:>5}{:>4}{:>4}{:>5}", "P", "Pts", "GF", "GA", "GD")
}

fn stats_cells(row: &StandingsRow) -> String {
    format!(
        "{:>3}{:>5}{:>4}{:>4}{:>5}",
        row.played,
        row.points,
        row.goals_for,
        row.goals_against,
        format!("{:+}", row.goal_difference)
    )
}

/// One group with `Q` for direct qualifiers and `q` for best thirds.
pub fn group_table(table: &GroupTable, standings: &Standings) -> String {
    let mut lines = vec![
        table.group.clone(),
        stats_header(&format!("{:<3}{:<14}", "#", "Team")),
    ];
    for (rank, row) in table.rows.iter().enumerate() {
        let line = format!(
            "{:<3}{:<14}{}  {}",
            rank + 1,
            row.team,
            stats_cells(row),
            marker(standings.qualification(&row.team))
        );
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

pub fn third_place_table(standings: &Standings) -> String {
    let mut lines = vec![
        "Third-placed teams".to_string(),
        stats_header(&format!("{:<3}{:<14}{:<9}", "#", "Team", "Group")),
    ];
    for (rank, entry) in standings.third_place.rows.iter().enumerate() {
        let line = format!(
            "{:<3}{:<14}{:<9}{}  {}",
            rank + 1,
            entry.row.team,
            entry.group,
            stats_cells(&entry.row),
            marker(standings.qualification(&entry.row.team))
        );
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// All groups followed by the third-place ranking, separated by blank lines.
pub fn standings(standings: &Standings) -> String {
    let mut blocks: Vec<String> = standings
        .groups
        .iter()
        .map(|table| group_table(table, standings))
        .collect();
    blocks.push(third_place_table(standings));
    blocks.join("\n\n")
}

/// Leaderboard with shared ranks for equal totals.
pub fn leaderboard(board: &[ParticipantTotal]) -> String {
    let mut lines = vec![format!(
        "{:<3}{:<16}{:>7}{:>7}{:>8}",
        "#", "Participant", "Points", "Exact", "Scored"
    )];
    let mut rank = 0;
    for (index, line) in board.iter().enumerate() {
        if index == 0 || board[index - 1].total != line.total {
            rank = index + 1;
        }
        lines.push(format!(
            "{:<3}{:<16}{:>7}{:>7}{:>8}",
            rank, line.participant, line.total, line.exact_scores, line.scored_matches
        ));
    }
    lines.join("\n")
}

fn match_scores(
    report: &ParticipantReport,
    results: &[MatchResult],
    predictions: &[MatchResult],
) -> String {
    let mut lines = vec![format!("{:<28}{:<28}{}", "Result", "Prediction", "Points")];
    for ((actual, predicted), score) in results.iter().zip(predictions).zip(&report.scores) {
        let points = score
            .points()
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        lines.push(format!(
            "{:<28}{:<28}{}",
            actual.to_string(),
            predicted.to_string(),
            points
        ));
    }
    lines.join("\n")
}

/// Hypothetical group table annotated with rank shifts and statistic deltas.
pub fn group_delta(delta: &GroupDelta) -> String {
    let mut lines = vec![
        delta.group.clone(),
        format!("{:<20}{:<10}{:<10}{:<10}{}", "Team", "Pts", "GF", "GA", "GD"),
    ];
    for row in &delta.rows {
        lines.push(format!(
            "{:<20}{:<10}{:<10}{:<10}{}",
            row.label(),
            row.points.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            row.goal_difference.to_string()
        ));
    }
    lines.join("\n")
}

/// Everything about one participant: per-match points, then the tables
/// their predictions imply compared with reality.
pub fn participant(
    report: &ParticipantReport,
    results: &[MatchResult],
    predictions: &[MatchResult],
) -> String {
    let mut blocks = vec![
        format!("{}: {} points", report.name, report.total),
        match_scores(report, results, predictions),
    ];
    blocks.extend(report.deltas.iter().map(group_delta));
    blocks.join("\n\n")
}
