use crate::error::PlayerError;
use crate::insight::RoleWeightTable;
use crate::roster::{Player, PlayerPosition};
use crate::training::{ProjectionResult, TrainingConfig, TrainingSimulator, TrainingType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Metric a comparison is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    WeightedSkillGain,
    ValueDelta,
    Roi,
}

impl Default for ComparisonMetric {
    fn default() -> Self {
        ComparisonMetric::WeightedSkillGain
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGainRow {
    pub player_id: u32,
    pub name: String,
    pub weighted_gain: f64,
    pub salary_delta: f64,
    pub skill_ups: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingTypeSummary {
    pub training_type: TrainingType,
    pub affected_players: usize,
    pub total_weighted_gain: f64,
    pub cumulative_salary_delta: f64,
    pub total_value_delta: f64,
    pub mean_roi: f64,
    pub first_skillup_week: Option<u32>,
    pub players: Vec<PlayerGainRow>,
}

impl TrainingTypeSummary {
    fn metric_value(&self, metric: ComparisonMetric) -> f64 {
        match metric {
            ComparisonMetric::WeightedSkillGain => self.total_weighted_gain,
            ComparisonMetric::ValueDelta => self.total_value_delta,
            ComparisonMetric::Roi => self.mean_roi,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingComparison {
    pub metric: ComparisonMetric,
    pub weeks: u32,
    pub ranking: Vec<TrainingTypeSummary>,
    pub recommendation: Option<TrainingType>,
    pub errors: Vec<PlayerError>,
}

/// Runs one projection per candidate training type and ranks the types.
/// The ranking is a pure function of the candidate *set*: input order
/// never changes the output.
pub struct TrainingComparator<'a> {
    simulator: &'a TrainingSimulator<'a>,
    role_weights: &'a RoleWeightTable,
}

impl<'a> TrainingComparator<'a> {
    pub fn new(simulator: &'a TrainingSimulator<'a>, role_weights: &'a RoleWeightTable) -> Self {
        TrainingComparator {
            simulator,
            role_weights,
        }
    }

    pub fn compare(
        &self,
        players: &[Player],
        candidates: &[TrainingType],
        weeks: u32,
        metric: ComparisonMetric,
    ) -> TrainingComparison {
        let mut types: Vec<TrainingType> = candidates.to_vec();
        types.sort();
        types.dedup();

        let mut ranking = Vec::with_capacity(types.len());
        let mut errors: Vec<PlayerError> = Vec::new();

        for training_type in types {
            let config = TrainingConfig::new(training_type, weeks);
            let (results, run_errors) = self.simulator.simulate_roster(players, &config);

            // The same players fail for every candidate; keep one copy.
            if errors.is_empty() {
                errors = run_errors;
            }

            ranking.push(self.summarize(training_type, players, &results));
        }

        ranking.sort_by(|a, b| {
            b.metric_value(metric)
                .partial_cmp(&a.metric_value(metric))
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    a.cumulative_salary_delta
                        .partial_cmp(&b.cumulative_salary_delta)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.training_type.cmp(&b.training_type))
        });

        let recommendation = ranking.first().map(|summary| summary.training_type);

        TrainingComparison {
            metric,
            weeks,
            ranking,
            recommendation,
            errors,
        }
    }

    fn summarize(
        &self,
        training_type: TrainingType,
        players: &[Player],
        results: &[ProjectionResult],
    ) -> TrainingTypeSummary {
        let mut rows: Vec<PlayerGainRow> = results
            .iter()
            .map(|result| {
                let position = players
                    .iter()
                    .find(|player| player.id == result.player_id)
                    .map(|player| player.position);

                PlayerGainRow {
                    player_id: result.player_id,
                    name: result.player_name.clone(),
                    weighted_gain: self.weighted_gain(result, position),
                    salary_delta: result.projected_salary_delta,
                    skill_ups: result.total_skill_ups(),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.weighted_gain
                .partial_cmp(&a.weighted_gain)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        let affected_players = rows.iter().filter(|row| row.weighted_gain > 0.0).count();
        let total_weighted_gain = rows.iter().map(|row| row.weighted_gain).sum();
        let cumulative_salary_delta = rows.iter().map(|row| row.salary_delta).sum();
        let total_value_delta = results.iter().map(|r| r.projected_value_delta).sum();

        let mean_roi = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.roi).sum::<f64>() / results.len() as f64
        };

        let first_skillup_week = results
            .iter()
            .flat_map(|result| result.weeks_to_next_skillup.values().flatten())
            .min()
            .copied();

        TrainingTypeSummary {
            training_type,
            affected_players,
            total_weighted_gain,
            cumulative_salary_delta,
            total_value_delta,
            mean_roi,
            first_skillup_week,
            players: rows,
        }
    }

    /// Skill gain weighted by how much each skill matters for the
    /// player's registered role.
    fn weighted_gain(&self, result: &ProjectionResult, position: Option<PlayerPosition>) -> f64 {
        let position = match position {
            Some(position) => position,
            None => return result.total_skill_gain(),
        };

        result
            .starting
            .keys()
            .map(|skill| result.skill_gain(*skill) * self.role_weights.weight(position, *skill))
            .sum()
    }
}
