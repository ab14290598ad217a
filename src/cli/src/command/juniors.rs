use anyhow::bail;
use clap::Args;
use scout_core::{
    AcademyAnalyzer, GrowthConfig, LinearFinanceModel, TrainingConfig, TrainingSimulator,
    TrainingType,
};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct JuniorsArgs {
    /// CSV file with junior player data
    pub file: PathBuf,

    /// Recommend which juniors to promote
    #[arg(short, long)]
    pub promotions: bool,

    /// Simulate training impact on the junior squad
    #[arg(short, long)]
    pub simulate: bool,

    /// Training type for --simulate
    #[arg(short, long, default_value = "playmaking")]
    pub training: String,

    /// Weeks for --simulate
    #[arg(short, long, default_value_t = 4)]
    pub weeks: u32,

    /// Max promotions to recommend
    #[arg(short, long, default_value_t = 3)]
    pub max: usize,

    /// Output file (JSON), defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &JuniorsArgs) -> anyhow::Result<()> {
    let roster = super::load_roster(&args.file)?;
    let analyzer = AcademyAnalyzer::default();

    if args.promotions {
        let report = analyzer.recommend_promotions(&roster.players, args.max)?;

        return super::write_report(&report, args.output.as_deref());
    }

    if args.simulate {
        if args.weeks == 0 {
            bail!("weeks must be a positive number");
        }

        let training_type: TrainingType = args.training.parse()?;
        let config = TrainingConfig::new(training_type, args.weeks);

        let growth = GrowthConfig::default();
        let finance = LinearFinanceModel::default();
        let simulator = TrainingSimulator::new(&growth, &finance);

        let report =
            AcademyAnalyzer::simulate_training_impact(&simulator, &roster.players, &config);

        return super::write_report(&report, args.output.as_deref());
    }

    let report = analyzer.analyze_potential(&roster.players)?;

    super::write_report(&report, args.output.as_deref())
}
