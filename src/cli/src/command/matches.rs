use anyhow::bail;
use clap::Args;
use scout_core::MatchAnalyzer;
use database::MatchHistoryLoader;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MatchesArgs {
    /// JSON file with match data, newest match first
    pub file: PathBuf,

    /// Analyze recent form only
    #[arg(short, long)]
    pub recent: bool,

    /// Number of recent matches to analyze
    #[arg(short, long, default_value_t = 5)]
    pub last_n: usize,

    /// Get tactical suggestions
    #[arg(short, long)]
    pub suggestions: bool,

    /// Output file (JSON), defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SuggestionsReport {
    suggestions: Vec<String>,
}

pub fn run(args: &MatchesArgs) -> anyhow::Result<()> {
    let matches = MatchHistoryLoader::load_json(&args.file)?;
    let analyzer = MatchAnalyzer::new(matches);

    if analyzer.is_empty() {
        bail!("no matches to analyze in {}", args.file.display());
    }

    if args.recent {
        let report = analyzer.recent_form(args.last_n);

        return super::write_report(&report, args.output.as_deref());
    }

    if args.suggestions {
        let report = SuggestionsReport {
            suggestions: analyzer.suggest_tactical_changes(),
        };

        return super::write_report(&report, args.output.as_deref());
    }

    let report = analyzer.extract_patterns();

    super::write_report(&report, args.output.as_deref())
}
