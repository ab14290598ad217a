use crate::error::EngineError;
use crate::roster::{PlayerPosition, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position-specific skill weighting used for role fit. Weights sum to
/// 1.0 per position; skills absent from a profile weigh 0.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleWeightTable {
    profiles: BTreeMap<PlayerPosition, BTreeMap<Skill, f64>>,
}

impl RoleWeightTable {
    pub fn weight(&self, position: PlayerPosition, skill: Skill) -> f64 {
        self.profiles
            .get(&position)
            .and_then(|profile| profile.get(&skill))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn profile(&self, position: PlayerPosition) -> Option<&BTreeMap<Skill, f64>> {
        self.profiles.get(&position)
    }

    pub fn set_profile(&mut self, position: PlayerPosition, profile: BTreeMap<Skill, f64>) {
        self.profiles.insert(position, profile);
    }
}

impl Default for RoleWeightTable {
    fn default() -> Self {
        let entries: &[(PlayerPosition, &[(Skill, f64)])] = &[
            (
                PlayerPosition::GK,
                &[
                    (Skill::Goalkeeping, 0.8),
                    (Skill::SetPieces, 0.1),
                    (Skill::Defending, 0.1),
                ],
            ),
            (
                PlayerPosition::CD,
                &[
                    (Skill::Defending, 0.7),
                    (Skill::Playmaking, 0.1),
                    (Skill::Passing, 0.1),
                    (Skill::SetPieces, 0.1),
                ],
            ),
            (
                PlayerPosition::WB,
                &[
                    (Skill::Defending, 0.45),
                    (Skill::Winger, 0.35),
                    (Skill::Passing, 0.1),
                    (Skill::Playmaking, 0.1),
                ],
            ),
            (
                PlayerPosition::IM,
                &[
                    (Skill::Playmaking, 0.6),
                    (Skill::Passing, 0.2),
                    (Skill::Defending, 0.1),
                    (Skill::Scoring, 0.1),
                ],
            ),
            (
                PlayerPosition::WI,
                &[
                    (Skill::Winger, 0.6),
                    (Skill::Passing, 0.2),
                    (Skill::Playmaking, 0.1),
                    (Skill::Scoring, 0.1),
                ],
            ),
            (
                PlayerPosition::FW,
                &[
                    (Skill::Scoring, 0.6),
                    (Skill::Winger, 0.15),
                    (Skill::Passing, 0.15),
                    (Skill::SetPieces, 0.1),
                ],
            ),
        ];

        let profiles = entries
            .iter()
            .map(|(position, weights)| (*position, weights.iter().copied().collect()))
            .collect();

        RoleWeightTable { profiles }
    }
}

/// Blend weights for the composite score. Supplied by the caller and
/// validated, never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub role_fit: f64,
    pub potential: f64,
    pub cost_benefit: f64,
}

impl CompositeWeights {
    pub fn new(role_fit: f64, potential: f64, cost_benefit: f64) -> Self {
        CompositeWeights {
            role_fit,
            potential,
            cost_benefit,
        }
    }

    /// Potential-heavy profile used for junior squad assessment.
    pub fn youth() -> Self {
        CompositeWeights::new(0.2, 0.6, 0.2)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let sum = self.role_fit + self.potential + self.cost_benefit;

        if (sum - 1.0).abs() > 1e-6
            || self.role_fit < 0.0
            || self.potential < 0.0
            || self.cost_benefit < 0.0
        {
            return Err(EngineError::InvalidWeights(sum));
        }

        Ok(())
    }
}

impl Default for CompositeWeights {
    fn default() -> Self {
        CompositeWeights::new(0.4, 0.3, 0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_sum_to_one() {
        let table = RoleWeightTable::default();

        for position in PlayerPosition::ALL {
            let sum: f64 = table.profile(position).unwrap().values().sum();

            assert!((sum - 1.0).abs() < 1e-9, "{} profile sums to {}", position, sum);
        }
    }

    #[test]
    fn unlisted_skill_weighs_zero() {
        let table = RoleWeightTable::default();

        assert_eq!(table.weight(PlayerPosition::FW, Skill::Goalkeeping), 0.0);
    }

    #[test]
    fn composite_weights_must_sum_to_one() {
        assert!(CompositeWeights::default().validate().is_ok());
        assert!(CompositeWeights::youth().validate().is_ok());

        let uneven = CompositeWeights::new(0.5, 0.5, 0.5);
        assert_eq!(
            uneven.validate().unwrap_err(),
            EngineError::InvalidWeights(1.5)
        );

        let negative = CompositeWeights::new(1.5, -0.25, -0.25);
        assert!(negative.validate().is_err());
    }
}
