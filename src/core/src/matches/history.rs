use chrono::NaiveDate;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

/// Full-time score from our side's perspective, carried on the wire as
/// the string "goals_for-goals_against" (e.g. "3-1").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub goals_for: u8,
    pub goals_against: u8,
}

impl MatchScore {
    pub fn new(goals_for: u8, goals_against: u8) -> Self {
        MatchScore {
            goals_for,
            goals_against,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        if self.goals_for > self.goals_against {
            MatchOutcome::Win
        } else if self.goals_for == self.goals_against {
            MatchOutcome::Draw
        } else {
            MatchOutcome::Loss
        }
    }

    /// League points for this result: 3 / 1 / 0.
    pub fn points(&self) -> u8 {
        match self.outcome() {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

impl FromStr for MatchScore {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (left, right) = value
            .split_once('-')
            .ok_or_else(|| format!("malformed score '{}'", value))?;

        let goals_for = left
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("malformed score '{}'", value))?;
        let goals_against = right
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("malformed score '{}'", value))?;

        Ok(MatchScore::new(goals_for, goals_against))
    }
}

impl Display for MatchScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.goals_for, self.goals_against)
    }
}

impl Serialize for MatchScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(D::Error::custom)
    }
}

/// One entry of the match-history document, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub opponent: String,
    pub result: MatchScore,
    pub possession: f32,
    pub chances: u32,
    pub tactics: String,
    pub formation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_parses_and_classifies() {
        let win: MatchScore = "3-1".parse().unwrap();
        let draw: MatchScore = "2-2".parse().unwrap();
        let loss: MatchScore = "0-4".parse().unwrap();

        assert_eq!(win.outcome(), MatchOutcome::Win);
        assert_eq!(draw.outcome(), MatchOutcome::Draw);
        assert_eq!(loss.outcome(), MatchOutcome::Loss);
        assert_eq!(win.points(), 3);
        assert_eq!(draw.points(), 1);
        assert_eq!(loss.points(), 0);
    }

    #[test]
    fn malformed_score_is_rejected() {
        assert!("3:1".parse::<MatchScore>().is_err());
        assert!("many-few".parse::<MatchScore>().is_err());
    }

    #[test]
    fn score_serializes_as_string() {
        let json = serde_json::to_string(&MatchScore::new(3, 1)).unwrap();

        assert_eq!(json, "\"3-1\"");
    }
}
