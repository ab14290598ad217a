use anyhow::Context;
use clap::{Parser, Subcommand};
use scout_core::utils::TimeEstimation;
use database::{RosterFile, RosterLoader};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

mod analyze;
mod juniors;
mod matches;
mod snapshot;
mod training;

#[derive(Debug, Parser)]
#[command(author, version, about = "Squad analytics and training projection toolkit", long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the roster on role fit, potential and cost-benefit
    Analyze(analyze::AnalyzeArgs),
    /// Aggregate team overview
    Snapshot(snapshot::SnapshotArgs),
    /// Project training outcomes
    Training(training::TrainingArgs),
    /// Assess the junior squad
    Juniors(juniors::JuniorsArgs),
    /// Extract patterns from match history
    Matches(matches::MatchesArgs),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    match args.command {
        Command::Analyze(arg) => analyze::run(&arg),
        Command::Snapshot(arg) => snapshot::run(&arg),
        Command::Training(arg) => training::run(&arg),
        Command::Juniors(arg) => juniors::run(&arg),
        Command::Matches(arg) => matches::run(&arg),
    }
}

/// Load a roster file, logging timing and any skipped rows. Row-level
/// problems were already collected by the loader; only a missing or
/// unreadable file fails the command.
pub(crate) fn load_roster(path: &Path) -> anyhow::Result<RosterFile> {
    let (roster, estimated) = TimeEstimation::estimate(|| RosterLoader::load_csv(path));
    let roster = roster?;

    info!(
        "roster loaded: {} players, {} skipped rows, {} ms",
        roster.players.len(),
        roster.errors.len(),
        estimated
    );

    Ok(roster)
}

/// Pretty JSON to stdout, or to `--output FILE` when given.
pub(crate) fn write_report<T: Serialize>(report: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report to {}", path.display()))?;

            info!("report saved to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
