use crate::error::{EngineError, PlayerError};
use crate::insight::{CompositeWeights, RoleWeightTable};
use crate::roster::{Player, PlayerPosition};
use crate::training::AgeFactorTable;
use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Numeric tables behind the insight scores. `age_decay` is the same
/// table the growth model runs on, so a player flagged high-potential
/// also projects a high weekly training rate.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub role_weights: RoleWeightTable,
    pub composite: CompositeWeights,
    pub age_decay: AgeFactorTable,
    pub base_ceilings: BTreeMap<PlayerPosition, f64>,
    pub level_ceiling: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        let base_ceilings = [
            (PlayerPosition::GK, 90.0),
            (PlayerPosition::CD, 92.0),
            (PlayerPosition::WB, 88.0),
            (PlayerPosition::IM, 95.0),
            (PlayerPosition::WI, 90.0),
            (PlayerPosition::FW, 94.0),
        ]
        .into_iter()
        .collect();

        InsightConfig {
            role_weights: RoleWeightTable::default(),
            composite: CompositeWeights::default(),
            age_decay: AgeFactorTable::default(),
            base_ceilings,
            level_ceiling: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Keep,
    Train,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightScore {
    pub player_id: u32,
    pub name: String,
    pub age: u8,
    pub position: PlayerPosition,
    pub best_position: PlayerPosition,
    pub role_fit: f64,
    pub potential: f64,
    pub cost_benefit: f64,
    pub composite: f64,
    pub recommendation: Recommendation,
}

/// Scores for a whole roster plus the players that could not be scored.
#[derive(Debug, Clone, Serialize)]
pub struct RosterScores {
    pub scores: Vec<InsightScore>,
    pub errors: Vec<PlayerError>,
}

/// Pure scoring over current attributes; no time dimension. Every call is
/// a function of the snapshot handed in, nothing is retained.
#[derive(Debug, Clone, Default)]
pub struct InsightScorer {
    config: InsightConfig,
}

impl InsightScorer {
    pub fn new(config: InsightConfig) -> Self {
        InsightScorer { config }
    }

    pub fn with_composite(composite: CompositeWeights) -> Self {
        InsightScorer {
            config: InsightConfig {
                composite,
                ..InsightConfig::default()
            },
        }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// How well the skill profile matches the ideal profile of the
    /// player's registered position, 0-100.
    pub fn role_fit(&self, player: &Player) -> f64 {
        let profile = match self.config.role_weights.profile(player.position) {
            Some(profile) => profile,
            None => return 0.0,
        };

        let dot: f64 = profile
            .iter()
            .map(|(skill, weight)| player.skills.level(*skill) as f64 * weight)
            .sum();

        (dot / self.config.level_ceiling * 100.0).clamp(0.0, 100.0)
    }

    /// Age-decayed ceiling estimate, 0-100.
    pub fn potential(&self, player: &Player) -> f64 {
        let ceiling = self
            .config
            .base_ceilings
            .get(&player.position)
            .copied()
            .unwrap_or(90.0);

        let peak = self.config.age_decay.peak();
        if peak <= 0.0 {
            return 0.0;
        }

        let decay = self.config.age_decay.factor(player.age) as f64 / peak as f64;

        (ceiling * decay).clamp(0.0, 100.0)
    }

    /// Raw value-for-money ratio. A non-positive salary makes the ratio
    /// meaningless, which is a per-player data error.
    pub fn cost_ratio(player: &Player) -> Result<f64, EngineError> {
        if player.salary <= 0.0 {
            return Err(EngineError::invalid_player_data(
                player.id,
                format!("salary {} must be positive for cost-benefit", player.salary),
            ));
        }

        Ok(player.tsi / player.salary)
    }

    /// Score the whole roster. The cost-benefit scale is anchored on the
    /// roster median (median ratio → 50), so scores are comparable within
    /// the snapshot. Per-player failures become error entries.
    pub fn score_roster(&self, players: &[Player]) -> Result<RosterScores, EngineError> {
        self.config.composite.validate()?;

        let valid_ratios: Vec<f64> = players
            .iter()
            .filter(|player| player.validate().is_ok())
            .filter_map(|player| Self::cost_ratio(player).ok())
            .collect();

        let median = median(&valid_ratios);

        let mut scores = Vec::with_capacity(players.len());
        let mut errors = Vec::new();

        for player in players {
            match self.score_player(player, median) {
                Ok(score) => scores.push(score),
                Err(error) => errors.push(PlayerError::new(player.id, error)),
            }
        }

        scores.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        Ok(RosterScores { scores, errors })
    }

    fn score_player(&self, player: &Player, median: Option<f64>) -> Result<InsightScore, EngineError> {
        player.validate()?;

        if let Some(profile) = self.config.role_weights.profile(player.position) {
            let referenced: Vec<_> = profile.keys().copied().collect();

            for skill in player.skills.missing(&referenced) {
                warn!(
                    "player {} ({}) has no '{}' rating, scoring it as 0",
                    player.id, player.name, skill
                );
            }
        }

        let ratio = Self::cost_ratio(player)?;
        let cost_benefit = normalize_against_median(ratio, median);

        let role_fit = self.role_fit(player);
        let potential = self.potential(player);

        let weights = &self.config.composite;
        let composite = role_fit * weights.role_fit
            + potential * weights.potential
            + cost_benefit * weights.cost_benefit;

        let recommendation = recommend(player, potential, cost_benefit, composite);

        Ok(InsightScore {
            player_id: player.id,
            name: player.name.clone(),
            age: player.age,
            position: player.position,
            best_position: player.best_position(),
            role_fit,
            potential,
            cost_benefit,
            composite,
            recommendation,
        })
    }
}

/// 0-100 scale with the roster median pinned at 50.
fn normalize_against_median(ratio: f64, median: Option<f64>) -> f64 {
    match median {
        Some(median) if median > 0.0 => (50.0 * ratio / median).clamp(0.0, 100.0),
        // Degenerate roster (no valid peers or all-zero TSI): everyone
        // is average.
        _ => 50.0,
    }
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sorted: Vec<f64> = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .collect();

    let mid = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn recommend(player: &Player, potential: f64, cost_benefit: f64, composite: f64) -> Recommendation {
    if player.age > 30 && cost_benefit < 40.0 {
        Recommendation::Sell
    } else if potential >= 70.0 && player.age < 22 {
        Recommendation::Train
    } else if composite >= 60.0 {
        Recommendation::Keep
    } else if potential < 40.0 && cost_benefit < 45.0 {
        Recommendation::Sell
    } else {
        Recommendation::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Skill, SkillSet};
    use crate::training::{GrowthConfig, TrainingConfig, TrainingType};

    fn player(id: u32, age: u8, salary: f64, tsi: f64) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            age,
            position: PlayerPosition::FW,
            skills: SkillSet::from_levels(&[(Skill::Scoring, 12), (Skill::Passing, 8)]),
            salary,
            tsi,
            form: 5,
            stamina: 5,
            experience: 2,
            leadership: 2,
        }
    }

    #[test]
    fn ideal_profile_scores_full_role_fit() {
        let scorer = InsightScorer::default();

        let mut ideal = player(1, 22, 1000.0, 5000.0);
        ideal.skills = SkillSet::from_levels(&[
            (Skill::Scoring, 20),
            (Skill::Winger, 20),
            (Skill::Passing, 20),
            (Skill::SetPieces, 20),
        ]);

        assert!((scorer.role_fit(&ideal) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn younger_player_has_higher_potential_and_rate() {
        let scorer = InsightScorer::default();
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let young = player(1, 18, 1000.0, 5000.0);
        let old = player(2, 29, 1000.0, 5000.0);

        assert!(scorer.potential(&young) >= scorer.potential(&old));
        assert!(
            growth.weekly_rate(&young, Skill::Scoring, &config)
                >= growth.weekly_rate(&old, Skill::Scoring, &config)
        );
    }

    #[test]
    fn median_ratio_maps_to_fifty() {
        let scorer = InsightScorer::default();

        let roster = vec![
            player(1, 22, 1000.0, 2000.0),
            player(2, 22, 1000.0, 4000.0),
            player(3, 22, 1000.0, 8000.0),
        ];

        let result = scorer.score_roster(&roster).unwrap();
        let middle = result.scores.iter().find(|s| s.player_id == 2).unwrap();

        assert!((middle.cost_benefit - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_salary_is_rejected_without_aborting_batch() {
        let scorer = InsightScorer::default();

        let roster = vec![player(1, 22, 0.0, 5000.0), player(2, 22, 1000.0, 5000.0)];

        let result = scorer.score_roster(&roster).unwrap();

        assert_eq!(result.scores.len(), 1);
        assert_eq!(result.scores[0].player_id, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].player_id, 1);
        assert!(matches!(
            result.errors[0].error,
            EngineError::InvalidPlayerData { player_id: 1, .. }
        ));
    }

    #[test]
    fn invalid_composite_weights_fail_the_call() {
        let scorer = InsightScorer::with_composite(CompositeWeights::new(0.7, 0.7, 0.7));

        let outcome = scorer.score_roster(&[player(1, 22, 1000.0, 5000.0)]);

        assert!(matches!(outcome, Err(EngineError::InvalidWeights(_))));
    }

    #[test]
    fn scores_are_sorted_by_composite_descending() {
        let scorer = InsightScorer::default();

        let weak = player(1, 33, 4000.0, 1000.0);
        let strong = player(2, 18, 1000.0, 9000.0);

        let result = scorer.score_roster(&[weak, strong]).unwrap();

        assert_eq!(result.scores[0].player_id, 2);
        assert!(result.scores[0].composite >= result.scores[1].composite);
    }

    #[test]
    fn old_expensive_player_is_flagged_for_sale() {
        let scorer = InsightScorer::default();

        let burden = player(1, 33, 5000.0, 1000.0);
        let peer = player(2, 22, 1000.0, 5000.0);

        let result = scorer.score_roster(&[burden, peer]).unwrap();

        let burden_score = result.scores.iter().find(|s| s.player_id == 1).unwrap();
        assert_eq!(burden_score.recommendation, Recommendation::Sell);

        let peer_score = result.scores.iter().find(|s| s.player_id == 2).unwrap();
        assert_eq!(peer_score.recommendation, Recommendation::Keep);
    }
}
