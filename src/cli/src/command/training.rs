use anyhow::bail;
use clap::Args;
use scout_core::{
    ComparisonMetric, GrowthConfig, LinearFinanceModel, NearSkillupReport, ProjectionReport,
    RoleWeightTable, TrainingComparator, TrainingConfig, TrainingSimulator, TrainingType,
    DEFAULT_NEAR_SKILLUP_THRESHOLD,
};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TrainingArgs {
    /// CSV file with player data
    pub file: PathBuf,

    /// Training type (playmaking, defending, scoring, ...)
    #[arg(short, long, default_value = "playmaking")]
    pub training: String,

    /// Number of weeks to project
    #[arg(short, long, default_value_t = 4)]
    pub weeks: u32,

    /// Rank all training types instead of projecting one
    #[arg(short, long)]
    pub compare: bool,

    /// List players already close to a skill-up (no simulation)
    #[arg(short = 'n', long)]
    pub near_skillup: bool,

    /// Proximity threshold for --near-skillup
    #[arg(long, default_value_t = DEFAULT_NEAR_SKILLUP_THRESHOLD)]
    pub threshold: f32,

    /// Emit the full weekly trajectory for one player id
    #[arg(short, long)]
    pub player: Option<u32>,

    /// Output file (JSON), defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &TrainingArgs) -> anyhow::Result<()> {
    if args.weeks == 0 {
        bail!("weeks must be a positive number");
    }

    let roster = super::load_roster(&args.file)?;

    let growth = GrowthConfig::default();
    let finance = LinearFinanceModel::default();
    let simulator = TrainingSimulator::new(&growth, &finance);

    if args.near_skillup {
        let report = NearSkillupReport::generate(&roster.players, args.threshold);

        return super::write_report(&report, args.output.as_deref());
    }

    if args.compare {
        let role_weights = RoleWeightTable::default();
        let comparator = TrainingComparator::new(&simulator, &role_weights);
        let report = comparator.compare(
            &roster.players,
            &TrainingType::ALL,
            args.weeks,
            ComparisonMetric::default(),
        );

        return super::write_report(&report, args.output.as_deref());
    }

    let training_type: TrainingType = args.training.parse()?;
    let config = TrainingConfig::new(training_type, args.weeks);

    if let Some(player_id) = args.player {
        let player = match roster.players.iter().find(|p| p.id == player_id) {
            Some(player) => player,
            None => bail!("no player with id {} in {}", player_id, args.file.display()),
        };

        let result = simulator.simulate(player, &config)?;

        return super::write_report(&result, args.output.as_deref());
    }

    let (results, errors) = simulator.simulate_roster(&roster.players, &config);
    let report = ProjectionReport::from_results(&config, &results, errors);

    super::write_report(&report, args.output.as_deref())
}
