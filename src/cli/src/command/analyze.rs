use clap::Args;
use scout_core::InsightScorer;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// CSV file with player data
    pub file: PathBuf,

    /// Output file (JSON), defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> anyhow::Result<()> {
    let roster = super::load_roster(&args.file)?;

    let scorer = InsightScorer::default();
    let report = scorer.score_roster(&roster.players)?;

    super::write_report(&report, args.output.as_deref())
}
