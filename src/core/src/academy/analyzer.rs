use crate::error::{EngineError, PlayerError};
use crate::insight::{CompositeWeights, InsightConfig, InsightScorer};
use crate::roster::{Player, PlayerPosition, Skill};
use crate::training::{TrainingConfig, TrainingSimulator, TrainingType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionAction {
    PromoteAndTrain,
    Promote,
    Train,
    Release,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JuniorAssessment {
    pub player_id: u32,
    pub name: String,
    pub age: u8,
    pub best_position: PlayerPosition,
    pub potential_score: f64,
    pub action: PromotionAction,
    pub estimated_promotion_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcademyReport {
    pub assessments: Vec<JuniorAssessment>,
    pub errors: Vec<PlayerError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingImpactRow {
    pub player_id: u32,
    pub name: String,
    pub skill: Skill,
    pub current_level: u8,
    pub projected_level: u8,
    pub improvement: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingImpact {
    pub training_type: TrainingType,
    pub weeks: u32,
    pub projections: Vec<TrainingImpactRow>,
    pub errors: Vec<PlayerError>,
}

/// Junior squad assessment: the insight scorer with a potential-heavy
/// blend, plus promotion thresholds on the resulting score.
pub struct AcademyAnalyzer {
    scorer: InsightScorer,
}

impl Default for AcademyAnalyzer {
    fn default() -> Self {
        AcademyAnalyzer {
            scorer: InsightScorer::new(InsightConfig {
                composite: CompositeWeights::youth(),
                ..InsightConfig::default()
            }),
        }
    }
}

impl AcademyAnalyzer {
    pub fn new(scorer: InsightScorer) -> Self {
        AcademyAnalyzer { scorer }
    }

    pub fn analyze_potential(&self, juniors: &[Player]) -> Result<AcademyReport, EngineError> {
        let scored = self.scorer.score_roster(juniors)?;

        let assessments = scored
            .scores
            .iter()
            .map(|score| {
                let junior = juniors.iter().find(|j| j.id == score.player_id);
                let tsi = junior.map(|j| j.tsi).unwrap_or(0.0);
                let action = action_for(score.composite);

                JuniorAssessment {
                    player_id: score.player_id,
                    name: score.name.clone(),
                    age: score.age,
                    best_position: score.best_position,
                    potential_score: score.composite,
                    action,
                    estimated_promotion_value: promotion_value(tsi, score.composite),
                }
            })
            .collect();

        Ok(AcademyReport {
            assessments,
            errors: scored.errors,
        })
    }

    /// Shortlist of juniors worth promoting, best first.
    pub fn recommend_promotions(
        &self,
        juniors: &[Player],
        max_promotions: usize,
    ) -> Result<AcademyReport, EngineError> {
        let mut report = self.analyze_potential(juniors)?;

        report.assessments.retain(|assessment| {
            matches!(
                assessment.action,
                PromotionAction::Promote | PromotionAction::PromoteAndTrain
            )
        });
        report.assessments.truncate(max_promotions);

        Ok(report)
    }

    /// Primary-skill development of the junior roster under one training
    /// configuration; reuses the training simulator unchanged.
    pub fn simulate_training_impact(
        simulator: &TrainingSimulator<'_>,
        juniors: &[Player],
        config: &TrainingConfig,
    ) -> TrainingImpact {
        let skill = config.training_type.primary_skill();
        let (results, errors) = simulator.simulate_roster(juniors, config);

        let projections = results
            .iter()
            .map(|result| {
                let current = result
                    .starting
                    .get(&skill)
                    .map(|state| state.level)
                    .unwrap_or(0);

                let projected = result
                    .trajectory
                    .last()
                    .and_then(|snapshot| snapshot.skills.get(&skill))
                    .map(|state| state.level)
                    .unwrap_or(current);

                TrainingImpactRow {
                    player_id: result.player_id,
                    name: result.player_name.clone(),
                    skill,
                    current_level: current,
                    projected_level: projected,
                    improvement: (projected - current) as u32,
                }
            })
            .collect();

        TrainingImpact {
            training_type: config.training_type,
            weeks: config.weeks,
            projections,
            errors,
        }
    }
}

fn action_for(potential_score: f64) -> PromotionAction {
    if potential_score >= 70.0 {
        PromotionAction::PromoteAndTrain
    } else if potential_score >= 50.0 {
        PromotionAction::Promote
    } else if potential_score >= 30.0 {
        PromotionAction::Train
    } else {
        PromotionAction::Release
    }
}

/// Rough market value of a junior once promoted to the senior squad.
fn promotion_value(tsi: f64, potential_score: f64) -> f64 {
    let multiplier = if potential_score > 70.0 {
        2.0
    } else if potential_score > 50.0 {
        1.5
    } else {
        1.0
    };

    tsi * 10.0 * multiplier
}
