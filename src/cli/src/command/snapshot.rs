use clap::Args;
use scout_core::TeamSnapshot;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// CSV file with player data
    pub file: PathBuf,

    /// Output file (JSON), defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &SnapshotArgs) -> anyhow::Result<()> {
    let roster = super::load_roster(&args.file)?;

    let snapshot = TeamSnapshot::generate(&roster.players);

    super::write_report(&snapshot, args.output.as_deref())
}
