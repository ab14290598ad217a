use crate::roster::Skill;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("unknown training type '{0}'")]
    InvalidTrainingType(String),

    #[error("scoring weights must sum to 1.0 (got {0:.4})")]
    InvalidWeights(f64),

    #[error("invalid player data (id {player_id}): {reason}")]
    InvalidPlayerData { player_id: u32, reason: String },
}

impl EngineError {
    pub fn invalid_player_data(player_id: u32, reason: impl Into<String>) -> Self {
        EngineError::InvalidPlayerData {
            player_id,
            reason: reason.into(),
        }
    }
}

impl Serialize for EngineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-player error entry collected alongside successful results.
/// A bad record never aborts the batch it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerError {
    pub player_id: u32,
    pub error: EngineError,
}

impl PlayerError {
    pub fn new(player_id: u32, error: EngineError) -> Self {
        PlayerError { player_id, error }
    }
}

/// Data-quality warning: a skill referenced by the engine was absent from
/// the player's skill map and was read as level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingSkill {
    pub player_id: u32,
    pub skill: Skill,
}
