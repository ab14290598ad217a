use crate::error::{EngineError, PlayerError};
use crate::roster::{Player, Skill};
use crate::training::finance::{FinanceModel, ROI_EPSILON};
use crate::training::{GrowthConfig, TrainingConfig, TrainingType};
use crate::utils::Logging;
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fractional accumulator for one skill: the last crossed integer level
/// plus progress toward the next one, always in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillState {
    pub level: u8,
    pub progress: f32,
}

impl SkillState {
    fn starting(player: &Player, skill: Skill) -> Self {
        let value = player.skills.value(skill);

        SkillState {
            level: value.level,
            progress: value.progress,
        }
    }

    pub fn effective(&self) -> f64 {
        self.level as f64 + self.progress as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSnapshot {
    pub week: u32,
    pub skills: BTreeMap<Skill, SkillState>,
}

/// Outcome of one projection run for one player. Owned by the caller;
/// the simulator retains nothing across invocations.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionResult {
    pub player_id: u32,
    pub player_name: String,
    pub training_type: TrainingType,
    pub weeks: u32,
    pub starting: BTreeMap<Skill, SkillState>,
    pub trajectory: Vec<WeekSnapshot>,
    pub skill_ups: BTreeMap<Skill, u32>,
    pub weeks_to_next_skillup: BTreeMap<Skill, Option<u32>>,
    pub projected_salary_delta: f64,
    pub projected_value_delta: f64,
    pub roi: f64,
    pub missing_skills: Vec<Skill>,
}

impl ProjectionResult {
    pub fn total_skill_ups(&self) -> u32 {
        self.skill_ups.values().sum()
    }

    /// Fractional gain of one skill over the whole horizon.
    pub fn skill_gain(&self, skill: Skill) -> f64 {
        let start = match self.starting.get(&skill) {
            Some(state) => state.effective(),
            None => return 0.0,
        };

        let end = self
            .trajectory
            .last()
            .and_then(|snapshot| snapshot.skills.get(&skill))
            .map(|state| state.effective())
            .unwrap_or(start);

        end - start
    }

    pub fn total_skill_gain(&self) -> f64 {
        self.starting
            .keys()
            .map(|skill| self.skill_gain(*skill))
            .sum()
    }
}

/// Candidate for the near-skillup list: a skill already sitting close to
/// its next integer threshold before any training is simulated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearSkillupEntry {
    pub player_id: u32,
    pub player_name: String,
    pub skill: Skill,
    pub level: u8,
    pub progress: f32,
}

pub const DEFAULT_NEAR_SKILLUP_THRESHOLD: f32 = 0.8;

/// Deterministic week-by-week projection of skill development under one
/// training configuration. All state lives on the stack of `simulate`;
/// re-running with another config leaves no residue.
pub struct TrainingSimulator<'a> {
    growth: &'a GrowthConfig,
    finance: &'a dyn FinanceModel,
}

impl<'a> TrainingSimulator<'a> {
    pub fn new(growth: &'a GrowthConfig, finance: &'a dyn FinanceModel) -> Self {
        TrainingSimulator { growth, finance }
    }

    pub fn simulate(
        &self,
        player: &Player,
        config: &TrainingConfig,
    ) -> Result<ProjectionResult, EngineError> {
        player.validate()?;

        let tracked: Vec<Skill> = config
            .training_type
            .trained_skills()
            .iter()
            .map(|(skill, _)| *skill)
            .collect();

        let missing_skills = player.skills.missing(&tracked);
        for skill in &missing_skills {
            warn!(
                "player {} ({}) has no '{}' rating, defaulting to 0",
                player.id, player.name, skill
            );
        }

        let starting: BTreeMap<Skill, SkillState> = tracked
            .iter()
            .map(|skill| (*skill, SkillState::starting(player, *skill)))
            .collect();

        let mut states = starting.clone();
        let mut skill_ups: BTreeMap<Skill, u32> =
            tracked.iter().map(|skill| (*skill, 0)).collect();
        let mut weeks_to_next_skillup: BTreeMap<Skill, Option<u32>> =
            tracked.iter().map(|skill| (*skill, None)).collect();

        let mut trajectory = Vec::with_capacity(config.weeks as usize);
        let mut skill_points_gained = 0.0f64;

        for week in 1..=config.weeks {
            for skill in &tracked {
                let rate = self.growth.weekly_rate(player, *skill, config);

                if rate == 0.0 {
                    continue;
                }

                let state = states.get_mut(skill).unwrap();
                state.progress += rate;
                skill_points_gained += rate as f64;

                // The rate is below 1.0, so at most one threshold can be
                // crossed per week and the remainder is carried forward.
                if state.progress >= 1.0 {
                    state.level = state.level.saturating_add(1);
                    state.progress -= 1.0;

                    *skill_ups.get_mut(skill).unwrap() += 1;

                    let first = weeks_to_next_skillup.get_mut(skill).unwrap();
                    if first.is_none() {
                        *first = Some(week);
                    }
                }
            }

            trajectory.push(WeekSnapshot {
                week,
                skills: states.clone(),
            });
        }

        let tsi_delta = self.finance.tsi_delta(player.tsi, skill_points_gained);
        let projected_salary_delta = self.finance.salary_delta(tsi_delta);
        let projected_value_delta = self.finance.value_delta(tsi_delta);
        let roi = projected_value_delta / projected_salary_delta.max(ROI_EPSILON);

        Ok(ProjectionResult {
            player_id: player.id,
            player_name: player.name.clone(),
            training_type: config.training_type,
            weeks: config.weeks,
            starting,
            trajectory,
            skill_ups,
            weeks_to_next_skillup,
            projected_salary_delta,
            projected_value_delta,
            roi,
            missing_skills,
        })
    }

    /// Project every player of a roster under the same configuration.
    /// Players are independent, so the batch runs on a worker pool; a bad
    /// record becomes an error entry and never aborts the rest.
    pub fn simulate_roster(
        &self,
        players: &[Player],
        config: &TrainingConfig,
    ) -> (Vec<ProjectionResult>, Vec<PlayerError>) {
        let outcomes: Vec<(u32, Result<ProjectionResult, EngineError>)> = players
            .par_iter()
            .map(|player| {
                let message = &format!("simulate player: id: {}", player.id);

                (
                    player.id,
                    Logging::estimate_result(|| self.simulate(player, config), message),
                )
            })
            .collect();

        let mut results = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();

        for (player_id, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(error) => errors.push(PlayerError::new(player_id, error)),
            }
        }

        (results, errors)
    }
}

/// Week-0 scan for skills already close to their next threshold. No
/// simulation is involved; this reads the roster's sub-level progress
/// directly. Sorted by descending progress.
pub fn near_skillups(players: &[Player], threshold: f32) -> Vec<NearSkillupEntry> {
    let mut entries: Vec<NearSkillupEntry> = players
        .iter()
        .flat_map(|player| {
            player.skills.iter().filter_map(move |(skill, value)| {
                if value.progress >= threshold {
                    Some(NearSkillupEntry {
                        player_id: player.id,
                        player_name: player.name.clone(),
                        skill,
                        level: value.level,
                        progress: value.progress,
                    })
                } else {
                    None
                }
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.progress
            .partial_cmp(&a.progress)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.player_id.cmp(&b.player_id))
            .then_with(|| a.skill.cmp(&b.skill))
    });

    entries
}
