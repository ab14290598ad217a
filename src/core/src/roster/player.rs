use crate::error::EngineError;
use crate::roster::{PlayerPosition, Skill, SkillSet};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Index;

pub const MIN_PLAYER_AGE: u8 = 16;
pub const MAX_PLAYER_AGE: u8 = 45;

pub const MIN_FORM: u8 = 1;
pub const MAX_FORM: u8 = 8;

/// Immutable roster snapshot of a single player. The engine never mutates
/// a `Player`; every projection works on engine-internal copies of its
/// skill ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub position: PlayerPosition,
    pub skills: SkillSet,
    pub salary: f64,
    pub tsi: f64,
    pub form: u8,
    pub stamina: u8,
    pub experience: u8,
    pub leadership: u8,
}

impl Player {
    /// Sanity validation of the snapshot fields. Range violations are
    /// per-player errors and never abort a whole roster.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.age < MIN_PLAYER_AGE || self.age > MAX_PLAYER_AGE {
            return Err(EngineError::invalid_player_data(
                self.id,
                format!("age {} outside {}-{}", self.age, MIN_PLAYER_AGE, MAX_PLAYER_AGE),
            ));
        }

        if self.form < MIN_FORM || self.form > MAX_FORM {
            return Err(EngineError::invalid_player_data(
                self.id,
                format!("form {} outside {}-{}", self.form, MIN_FORM, MAX_FORM),
            ));
        }

        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(EngineError::invalid_player_data(
                self.id,
                format!("salary {} is not a non-negative number", self.salary),
            ));
        }

        if !self.tsi.is_finite() || self.tsi < 0.0 {
            return Err(EngineError::invalid_player_data(
                self.id,
                format!("tsi {} is not a non-negative number", self.tsi),
            ));
        }

        Ok(())
    }

    /// Position the skill profile fits best, regardless of the position the
    /// player is currently registered at.
    pub fn best_position(&self) -> PlayerPosition {
        if self.skills.level(Skill::Goalkeeping) > 10 {
            return PlayerPosition::GK;
        }

        let defending = self.skills.level(Skill::Defending);
        let playmaking = self.skills.level(Skill::Playmaking);
        let winger = self.skills.level(Skill::Winger);
        let scoring = self.skills.level(Skill::Scoring);

        if scoring > defending.max(playmaking).max(winger) {
            PlayerPosition::FW
        } else if defending > playmaking.max(winger) {
            PlayerPosition::CD
        } else if winger > playmaking {
            PlayerPosition::WI
        } else {
            PlayerPosition::IM
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({}, {})", self.name, self.position, self.age)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn by_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn get(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn total_salary(&self) -> f64 {
        self.players.iter().map(|p| p.salary).sum()
    }

    pub fn total_tsi(&self) -> f64 {
        self.players.iter().map(|p| p.tsi).sum()
    }

    pub fn average_age(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.players.iter().map(|p| p.age as f64).sum();

        sum / self.players.len() as f64
    }
}

impl Index<u32> for PlayerCollection {
    type Output = Player;

    fn index(&self, player_id: u32) -> &Self::Output {
        self.get(player_id)
            .unwrap_or_else(|| panic!("no player with id = {}", player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn player(id: u32, age: u8, position: PlayerPosition, skills: &[(Skill, u8)]) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            age,
            position,
            skills: SkillSet::from_levels(skills),
            salary: 1000.0,
            tsi: 5000.0,
            form: 5,
            stamina: 5,
            experience: 3,
            leadership: 3,
        }
    }

    #[test]
    fn validate_accepts_sane_player() {
        let p = player(1, 22, PlayerPosition::IM, &[(Skill::Playmaking, 10)]);

        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_rejects_age_out_of_range() {
        let mut p = player(1, 22, PlayerPosition::IM, &[]);
        p.age = 15;

        assert!(matches!(
            p.validate(),
            Err(EngineError::InvalidPlayerData { player_id: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_salary() {
        let mut p = player(2, 22, PlayerPosition::IM, &[]);
        p.salary = -1.0;

        assert!(p.validate().is_err());
    }

    #[test]
    fn best_position_prefers_dominant_skill() {
        let striker = player(1, 22, PlayerPosition::IM, &[(Skill::Scoring, 12)]);
        assert_eq!(striker.best_position(), PlayerPosition::FW);

        let keeper = player(2, 22, PlayerPosition::FW, &[(Skill::Goalkeeping, 12)]);
        assert_eq!(keeper.best_position(), PlayerPosition::GK);

        let stopper = player(
            3,
            22,
            PlayerPosition::IM,
            &[(Skill::Defending, 12), (Skill::Playmaking, 8)],
        );
        assert_eq!(stopper.best_position(), PlayerPosition::CD);
    }

    #[test]
    fn collection_aggregates_salary_and_age() {
        let mut collection = PlayerCollection::default();
        collection.add(player(1, 20, PlayerPosition::FW, &[]));
        collection.add(player(2, 30, PlayerPosition::CD, &[]));

        assert_eq!(collection.total_salary(), 2000.0);
        assert_eq!(collection.average_age(), 25.0);
        assert_eq!(collection.by_position(PlayerPosition::FW).len(), 1);
    }
}
