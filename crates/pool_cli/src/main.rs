//! Prediction pool CLI
//!
//! Group standings, leaderboard and per-participant "what if" tables from a
//! results CSV and a directory of prediction sheets.

mod config;
mod export;
mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pool_core::{evaluate, MatchResult, Participant, Roster};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Overrides, PoolConfig};

#[derive(Parser)]
#[command(name = "pool")]
#[command(about = "Group-stage standings and prediction pool scoring", long_about = None)]
struct Cli {
    /// Config file (YAML); falls back to $POOL_CONFIG_PATH
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Roster YAML (default: embedded Euro 2024 roster)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Played results CSV
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    /// Directory with one prediction CSV per participant
    #[arg(long, global = true)]
    predictions: Option<PathBuf>,

    /// Input CSVs start with a header row
    #[arg(long, global = true)]
    headers: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show group tables and the third-place ranking
    Standings,

    /// Show participants ranked by prediction points
    Leaderboard,

    /// Show one participant's scores and the tables their predictions imply
    Participant {
        /// Participant name (prediction file stem)
        name: String,
    },

    /// Write the full evaluation as JSON
    Report {
        /// Output JSON file path
        #[arg(long)]
        out: PathBuf,
    },
}

impl Commands {
    fn needs_predictions(&self) -> bool {
        !matches!(self, Commands::Standings)
    }
}

struct Inputs {
    roster: Roster,
    results: Vec<MatchResult>,
    participants: Vec<Participant>,
}

impl Inputs {
    fn load(config: &PoolConfig) -> Result<Self> {
        let roster = match &config.roster {
            Some(path) => pool_adapter::load_roster(path)?,
            None => pool_adapter::default_roster().clone(),
        };

        let results = match &config.results {
            Some(path) => pool_adapter::load_results(path, config.results_has_headers)?.0,
            None => Vec::new(),
        };

        let participants = match &config.predictions {
            Some(dir) => pool_adapter::load_predictions_dir(dir, config.predictions_has_headers)?,
            None => Vec::new(),
        };

        Ok(Self {
            roster,
            results,
            participants,
        })
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PoolConfig::resolve(cli.config.as_deref())?.with_overrides(Overrides {
        roster: cli.roster,
        results: cli.results,
        predictions: cli.predictions,
        headers: cli.headers,
    });
    config.validate(cli.command.needs_predictions())?;
    debug!(?config, "configuration resolved");

    let inputs = Inputs::load(&config)?;

    match cli.command {
        Commands::Standings => {
            let standings = pool_core::compute_standings(&inputs.roster, &inputs.results)?;
            println!("{}", render::standings(&standings));
        }

        Commands::Leaderboard => {
            let board =
                pool_core::leaderboard(&inputs.roster, &inputs.participants, &inputs.results)?;
            println!("{}", render::leaderboard(&board));
        }

        Commands::Participant { name } => {
            let Some(participant) = inputs.participants.iter().find(|p| p.name == name) else {
                let known: Vec<&str> =
                    inputs.participants.iter().map(|p| p.name.as_str()).collect();
                bail!("Unknown participant '{}' (known: {})", name, known.join(", "));
            };
            let report = evaluate(
                &inputs.roster,
                &inputs.results,
                std::slice::from_ref(participant),
            )?;
            println!(
                "{}",
                render::participant(
                    &report.participants[0],
                    &inputs.results,
                    &participant.predictions
                )
            );
        }

        Commands::Report { out } => {
            let report = evaluate(&inputs.roster, &inputs.results, &inputs.participants)?;
            let metadata = export::write_report(
                &out,
                &report,
                &inputs.roster,
                &inputs.results,
                &inputs.participants,
            )?;
            info!(
                path = %out.display(),
                checksum = %metadata.input_checksum,
                "report written"
            );
        }
    }

    Ok(())
}
