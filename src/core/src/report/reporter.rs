use crate::error::{MissingSkill, PlayerError};
use crate::roster::{Player, Skill};
use crate::training::{
    near_skillups, NearSkillupEntry, ProjectionResult, TrainingConfig, TrainingType,
};
use serde::Serialize;

/// One roster row of the projection report: where the trained skill
/// stands now and where the horizon leaves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub player_id: u32,
    pub name: String,
    pub skill: Skill,
    pub current_level: u8,
    pub projected_level: u8,
    pub skill_ups: u32,
    pub weeks_to_next_skillup: Option<u32>,
    pub projected_salary_delta: f64,
    pub projected_value_delta: f64,
    pub roi: f64,
}

/// Roster-wide projection summary under one training configuration,
/// in roster order, with the players that could not be projected listed
/// alongside.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub training_type: TrainingType,
    pub weeks: u32,
    pub projections: Vec<ProjectionRow>,
    pub warnings: Vec<MissingSkill>,
    pub errors: Vec<PlayerError>,
}

impl ProjectionReport {
    pub fn from_results(
        config: &TrainingConfig,
        results: &[ProjectionResult],
        errors: Vec<PlayerError>,
    ) -> Self {
        let skill = config.training_type.primary_skill();

        let warnings = results
            .iter()
            .flat_map(|result| {
                result.missing_skills.iter().map(|missing| MissingSkill {
                    player_id: result.player_id,
                    skill: *missing,
                })
            })
            .collect();

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

                ProjectionRow {
                    player_id: result.player_id,
                    name: result.player_name.clone(),
                    skill,
                    current_level: current,
                    projected_level: projected,
                    skill_ups: result.skill_ups.get(&skill).copied().unwrap_or(0),
                    weeks_to_next_skillup: result
                        .weeks_to_next_skillup
                        .get(&skill)
                        .copied()
                        .flatten(),
                    projected_salary_delta: result.projected_salary_delta,
                    projected_value_delta: result.projected_value_delta,
                    roi: result.roi,
                }
            })
            .collect();

        ProjectionReport {
            training_type: config.training_type,
            weeks: config.weeks,
            projections,
            warnings,
            errors,
        }
    }
}

/// Skills already sitting close to their next threshold, best candidates
/// first (descending week-0 progress).
#[derive(Debug, Clone, Serialize)]
pub struct NearSkillupReport {
    pub threshold: f32,
    pub candidates: Vec<NearSkillupEntry>,
}

impl NearSkillupReport {
    pub fn generate(players: &[Player], threshold: f32) -> Self {
        NearSkillupReport {
            threshold,
            candidates: near_skillups(players, threshold),
        }
    }
}
