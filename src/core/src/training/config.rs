use crate::error::EngineError;
use crate::roster::Skill;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Closed set of training regimens, matching the game's training categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    Goalkeeping,
    Defending,
    Playmaking,
    Winger,
    Passing,
    Scoring,
    SetPieces,
}

impl TrainingType {
    pub const ALL: [TrainingType; 7] = [
        TrainingType::Goalkeeping,
        TrainingType::Defending,
        TrainingType::Playmaking,
        TrainingType::Winger,
        TrainingType::Passing,
        TrainingType::Scoring,
        TrainingType::SetPieces,
    ];

    pub fn primary_skill(&self) -> Skill {
        match self {
            TrainingType::Goalkeeping => Skill::Goalkeeping,
            TrainingType::Defending => Skill::Defending,
            TrainingType::Playmaking => Skill::Playmaking,
            TrainingType::Winger => Skill::Winger,
            TrainingType::Passing => Skill::Passing,
            TrainingType::Scoring => Skill::Scoring,
            TrainingType::SetPieces => Skill::SetPieces,
        }
    }

    /// Skills developed by a week of this training, with their focus weight.
    /// The primary skill trains at full weight; spill-over skills at a
    /// fraction of it.
    pub fn trained_skills(&self) -> &'static [(Skill, f32)] {
        match self {
            TrainingType::Goalkeeping => &[(Skill::Goalkeeping, 1.0)],
            TrainingType::Defending => &[(Skill::Defending, 1.0)],
            TrainingType::Playmaking => &[(Skill::Playmaking, 1.0), (Skill::Passing, 0.25)],
            TrainingType::Winger => &[(Skill::Winger, 1.0), (Skill::Passing, 0.25)],
            TrainingType::Passing => &[(Skill::Passing, 1.0), (Skill::Playmaking, 0.25)],
            TrainingType::Scoring => &[(Skill::Scoring, 1.0), (Skill::SetPieces, 0.25)],
            TrainingType::SetPieces => &[(Skill::SetPieces, 1.0)],
        }
    }

    pub fn focus_weight(&self, skill: Skill) -> f32 {
        self.trained_skills()
            .iter()
            .find(|(trained, _)| *trained == skill)
            .map(|(_, weight)| *weight)
            .unwrap_or(0.0)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TrainingType::Goalkeeping => "goalkeeping",
            TrainingType::Defending => "defending",
            TrainingType::Playmaking => "playmaking",
            TrainingType::Winger => "winger",
            TrainingType::Passing => "passing",
            TrainingType::Scoring => "scoring",
            TrainingType::SetPieces => "set_pieces",
        }
    }
}

impl FromStr for TrainingType {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "goalkeeping" => Ok(TrainingType::Goalkeeping),
            "defending" => Ok(TrainingType::Defending),
            "playmaking" => Ok(TrainingType::Playmaking),
            "winger" => Ok(TrainingType::Winger),
            "passing" => Ok(TrainingType::Passing),
            "scoring" => Ok(TrainingType::Scoring),
            "set_pieces" => Ok(TrainingType::SetPieces),
            other => Err(EngineError::InvalidTrainingType(other.to_string())),
        }
    }
}

impl Display for TrainingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

/// One projection request: what to train, for how long, how hard.
/// Constructed once per request and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub training_type: TrainingType,
    pub weeks: u32,
    pub intensity: f32,
}

impl TrainingConfig {
    pub fn new(training_type: TrainingType, weeks: u32) -> Self {
        TrainingConfig {
            training_type,
            weeks,
            intensity: 1.0,
        }
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_training_types() {
        for training in TrainingType::ALL {
            assert_eq!(training.name().parse::<TrainingType>().unwrap(), training);
        }
    }

    #[test]
    fn parse_rejects_unknown_training_type() {
        let err = "juggling".parse::<TrainingType>().unwrap_err();

        assert_eq!(err, EngineError::InvalidTrainingType("juggling".to_string()));
    }

    #[test]
    fn primary_skill_trains_at_full_weight() {
        for training in TrainingType::ALL {
            assert_eq!(training.focus_weight(training.primary_skill()), 1.0);
        }
    }

    #[test]
    fn untargeted_skill_has_zero_focus() {
        assert_eq!(TrainingType::Scoring.focus_weight(Skill::Goalkeeping), 0.0);
    }

    #[test]
    fn config_defaults_to_full_intensity() {
        let config = TrainingConfig::new(TrainingType::Scoring, 4);

        assert_eq!(config.intensity, 1.0);
        assert_eq!(config.weeks, 4);
    }
}
