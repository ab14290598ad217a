pub mod academy;
pub mod error;
pub mod insight;
pub mod matches;
pub mod report;
pub mod roster;
pub mod training;

pub mod shared;
pub mod utils;

// Re-export roster items
pub use roster::{
    Player, PlayerCollection, PlayerPosition,
    Skill, SkillSet, SkillValue,
    MAX_FORM, MAX_PLAYER_AGE, MIN_FORM, MIN_PLAYER_AGE,
};

// Re-export training items
pub use training::{
    AgeBracket, AgeFactorTable, AffinityTable, GrowthConfig, MAX_WEEKLY_RATE,
    FinanceModel, LinearFinanceModel, ROI_EPSILON, TSI_GAIN_PER_SKILL_POINT,
    TrainingConfig, TrainingType,
    NearSkillupEntry, ProjectionResult, SkillState, TrainingSimulator, WeekSnapshot,
    near_skillups, DEFAULT_NEAR_SKILLUP_THRESHOLD,
    ComparisonMetric, PlayerGainRow, TrainingComparator, TrainingComparison,
    TrainingTypeSummary,
};

// Re-export insight items
pub use insight::{
    CompositeWeights, InsightConfig, InsightScore, InsightScorer, Recommendation,
    RoleWeightTable, RosterScores,
};

// Re-export academy items
pub use academy::{
    AcademyAnalyzer, AcademyReport, JuniorAssessment, PromotionAction,
    TrainingImpact, TrainingImpactRow,
};

// Re-export match analysis items
pub use matches::{
    AttackSummary, DefenseSummary, FormSummary, MatchAnalyzer, MatchOutcome,
    MatchPatterns, MatchRecord, MatchScore, PossessionSummary, Trend,
};

// Re-export report items
pub use report::{
    BestLineup, NearSkillupReport, ProjectionReport, ProjectionRow, TeamSnapshot,
};

pub use error::{EngineError, MissingSkill, PlayerError};
pub use shared::*;
pub use utils::*;
