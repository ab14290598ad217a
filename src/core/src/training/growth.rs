use crate::roster::{Player, PlayerPosition, Skill};
use crate::training::{TrainingConfig, TrainingType};
use std::collections::BTreeMap;

/// Weekly rates are clamped below 1.0 so a skill-up can never be skipped
/// and the simulator always terminates in `weeks` steps.
pub const MAX_WEEKLY_RATE: f32 = 0.99;

const DEFAULT_BASE_RATE: f32 = 0.3;
const DEFAULT_STAMINA_CAP: f32 = 1.2;

/// Piecewise age → growth multiplier. The same table drives the growth
/// model and the insight scorer's age decay, which keeps "high potential"
/// and "high weekly rate" consistent for the same player.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeFactorTable {
    brackets: Vec<AgeBracket>,
    fallback: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBracket {
    pub min_age: u8,
    pub max_age: u8,
    pub factor: f32,
}

impl AgeFactorTable {
    pub fn new(brackets: Vec<AgeBracket>, fallback: f32) -> Self {
        AgeFactorTable { brackets, fallback }
    }

    pub fn factor(&self, age: u8) -> f32 {
        self.brackets
            .iter()
            .find(|bracket| age >= bracket.min_age && age <= bracket.max_age)
            .map(|bracket| bracket.factor)
            .unwrap_or(self.fallback)
    }

    /// Highest multiplier in the table, used to normalize age decay.
    pub fn peak(&self) -> f32 {
        self.brackets
            .iter()
            .map(|bracket| bracket.factor)
            .fold(self.fallback, f32::max)
    }
}

impl Default for AgeFactorTable {
    fn default() -> Self {
        AgeFactorTable {
            brackets: vec![
                AgeBracket { min_age: 16, max_age: 20, factor: 1.0 },
                AgeBracket { min_age: 21, max_age: 25, factor: 0.75 },
                AgeBracket { min_age: 26, max_age: 30, factor: 0.35 },
            ],
            fallback: 0.1,
        }
    }
}

/// Fixed (position, training type) → multiplier in [0, 1]. Pairs absent
/// from the table read as 0: that training does nothing for that position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffinityTable {
    values: BTreeMap<(PlayerPosition, TrainingType), f32>,
}

impl AffinityTable {
    pub fn multiplier(&self, position: PlayerPosition, training: TrainingType) -> f32 {
        self.values
            .get(&(position, training))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, position: PlayerPosition, training: TrainingType, multiplier: f32) {
        self.values.insert((position, training), multiplier);
    }

    pub fn standard() -> Self {
        let mut table = AffinityTable::default();

        let entries: &[(PlayerPosition, TrainingType, f32)] = &[
            (PlayerPosition::GK, TrainingType::Goalkeeping, 1.0),
            (PlayerPosition::GK, TrainingType::SetPieces, 0.5),
            (PlayerPosition::CD, TrainingType::Defending, 1.0),
            (PlayerPosition::CD, TrainingType::Playmaking, 0.4),
            (PlayerPosition::CD, TrainingType::Passing, 0.3),
            (PlayerPosition::CD, TrainingType::SetPieces, 0.3),
            (PlayerPosition::WB, TrainingType::Defending, 0.7),
            (PlayerPosition::WB, TrainingType::Winger, 0.7),
            (PlayerPosition::WB, TrainingType::Passing, 0.4),
            (PlayerPosition::WB, TrainingType::Playmaking, 0.3),
            (PlayerPosition::WB, TrainingType::SetPieces, 0.3),
            (PlayerPosition::IM, TrainingType::Playmaking, 1.0),
            (PlayerPosition::IM, TrainingType::Passing, 0.6),
            (PlayerPosition::IM, TrainingType::Defending, 0.4),
            (PlayerPosition::IM, TrainingType::Scoring, 0.3),
            (PlayerPosition::IM, TrainingType::SetPieces, 0.3),
            (PlayerPosition::WI, TrainingType::Winger, 1.0),
            (PlayerPosition::WI, TrainingType::Passing, 0.5),
            (PlayerPosition::WI, TrainingType::Playmaking, 0.4),
            (PlayerPosition::WI, TrainingType::Scoring, 0.3),
            (PlayerPosition::WI, TrainingType::SetPieces, 0.3),
            (PlayerPosition::FW, TrainingType::Scoring, 1.0),
            (PlayerPosition::FW, TrainingType::Passing, 0.5),
            (PlayerPosition::FW, TrainingType::Winger, 0.4),
            (PlayerPosition::FW, TrainingType::SetPieces, 0.3),
        ];

        for (position, training, multiplier) in entries {
            table.set(*position, *training, *multiplier);
        }

        table
    }
}

/// All numeric tables behind the growth model. Tables are data, not code,
/// so tests can inject synthetic deterministic values.
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    pub age_factors: AgeFactorTable,
    pub affinity: AffinityTable,
    pub base_rates: BTreeMap<Skill, f32>,
    pub stamina_cap: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        GrowthConfig {
            age_factors: AgeFactorTable::default(),
            affinity: AffinityTable::standard(),
            base_rates: Skill::ALL
                .iter()
                .map(|skill| (*skill, DEFAULT_BASE_RATE))
                .collect(),
            stamina_cap: DEFAULT_STAMINA_CAP,
        }
    }
}

impl GrowthConfig {
    /// Weekly fractional gain for one skill of one player under the given
    /// training, in [0, MAX_WEEKLY_RATE]. Pure function of its inputs.
    pub fn weekly_rate(&self, player: &Player, skill: Skill, config: &TrainingConfig) -> f32 {
        let focus = config.training_type.focus_weight(skill);

        if focus == 0.0 {
            return 0.0;
        }

        let base = self
            .base_rates
            .get(&skill)
            .copied()
            .unwrap_or(DEFAULT_BASE_RATE);

        let age = self.age_factors.factor(player.age);
        let affinity = self.affinity.multiplier(player.position, config.training_type);
        let form = form_factor(player.form);
        let stamina = self.stamina_factor(player.stamina);

        let rate = base * focus * age * affinity * form * stamina * config.intensity;

        rate.clamp(0.0, MAX_WEEKLY_RATE)
    }

    fn stamina_factor(&self, stamina: u8) -> f32 {
        (0.8 + stamina as f32 * 0.04).min(self.stamina_cap)
    }
}

/// Linear form scale: form 1 → 0.6, form 8 → 1.3.
fn form_factor(form: u8) -> f32 {
    let form = form.clamp(crate::roster::MIN_FORM, crate::roster::MAX_FORM);

    0.6 + (form - 1) as f32 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SkillSet;

    fn player(age: u8, position: PlayerPosition, form: u8, stamina: u8) -> Player {
        Player {
            id: 1,
            name: "Test".to_string(),
            age,
            position,
            skills: SkillSet::from_levels(&[(Skill::Scoring, 10)]),
            salary: 1000.0,
            tsi: 5000.0,
            form,
            stamina,
            experience: 0,
            leadership: 0,
        }
    }

    #[test]
    fn age_table_matches_brackets_and_fallback() {
        let table = AgeFactorTable::default();

        assert_eq!(table.factor(17), 1.0);
        assert_eq!(table.factor(23), 0.75);
        assert_eq!(table.factor(28), 0.35);
        assert_eq!(table.factor(31), 0.1);
        assert_eq!(table.factor(44), 0.1);
    }

    #[test]
    fn younger_player_never_grows_slower() {
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let mut previous = f32::MAX;
        for age in [18, 23, 28, 33] {
            let rate = growth.weekly_rate(&player(age, PlayerPosition::FW, 5, 5), Skill::Scoring, &config);
            assert!(rate <= previous, "rate increased with age at {}", age);
            previous = rate;
        }
    }

    #[test]
    fn unaffected_position_yields_zero_rate() {
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Goalkeeping, 4);

        let rate = growth.weekly_rate(&player(19, PlayerPosition::FW, 5, 5), Skill::Goalkeeping, &config);

        assert_eq!(rate, 0.0);
    }

    #[test]
    fn untargeted_skill_yields_zero_rate() {
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let rate = growth.weekly_rate(&player(19, PlayerPosition::FW, 5, 5), Skill::Defending, &config);

        assert_eq!(rate, 0.0);
    }

    #[test]
    fn form_scales_linearly() {
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let low = growth.weekly_rate(&player(19, PlayerPosition::FW, 1, 5), Skill::Scoring, &config);
        let high = growth.weekly_rate(&player(19, PlayerPosition::FW, 8, 5), Skill::Scoring, &config);

        assert!(high > low);
        assert!((high / low - 1.3 / 0.6).abs() < 1e-4);
    }

    #[test]
    fn rate_is_clamped_below_one() {
        let mut growth = GrowthConfig::default();
        growth.base_rates.insert(Skill::Scoring, 50.0);
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let rate = growth.weekly_rate(&player(19, PlayerPosition::FW, 8, 9), Skill::Scoring, &config);

        assert_eq!(rate, MAX_WEEKLY_RATE);
    }

    #[test]
    fn stamina_factor_is_capped() {
        let growth = GrowthConfig::default();
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let high = growth.weekly_rate(&player(19, PlayerPosition::FW, 5, 10), Skill::Scoring, &config);
        let extreme = growth.weekly_rate(&player(19, PlayerPosition::FW, 5, 50), Skill::Scoring, &config);

        assert_eq!(high, extreme);
    }

    #[test]
    fn synthetic_age_table_overrides_defaults() {
        let mut growth = GrowthConfig::default();
        growth.age_factors = AgeFactorTable::new(
            vec![AgeBracket { min_age: 16, max_age: 45, factor: 0.5 }],
            0.0,
        );
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        let young = growth.weekly_rate(&player(17, PlayerPosition::FW, 5, 5), Skill::Scoring, &config);
        let old = growth.weekly_rate(&player(40, PlayerPosition::FW, 5, 5), Skill::Scoring, &config);

        assert_eq!(young, old);
    }
}
