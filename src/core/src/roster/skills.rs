use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Goalkeeping,
    Defending,
    Playmaking,
    Winger,
    Passing,
    Scoring,
    SetPieces,
}

impl Skill {
    pub const ALL: [Skill; 7] = [
        Skill::Goalkeeping,
        Skill::Defending,
        Skill::Playmaking,
        Skill::Winger,
        Skill::Passing,
        Skill::Scoring,
        Skill::SetPieces,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Goalkeeping => "goalkeeping",
            Skill::Defending => "defending",
            Skill::Playmaking => "playmaking",
            Skill::Winger => "winger",
            Skill::Passing => "passing",
            Skill::Scoring => "scoring",
            Skill::SetPieces => "set_pieces",
        }
    }
}

impl FromStr for Skill {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "goalkeeping" => Ok(Skill::Goalkeeping),
            "defending" => Ok(Skill::Defending),
            "playmaking" => Ok(Skill::Playmaking),
            "winger" => Ok(Skill::Winger),
            "passing" => Ok(Skill::Passing),
            "scoring" => Ok(Skill::Scoring),
            "set_pieces" => Ok(Skill::SetPieces),
            other => Err(format!("unknown skill '{}'", other)),
        }
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

/// A single skill rating: the last crossed integer level plus accumulated
/// sub-level progress toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillValue {
    pub level: u8,
    pub progress: f32,
}

impl SkillValue {
    pub fn new(level: u8) -> Self {
        SkillValue {
            level,
            progress: 0.0,
        }
    }

    /// Split a possibly-fractional rating into level and sub-level progress.
    /// Negative ratings collapse to zero.
    pub fn from_rating(rating: f64) -> Self {
        if rating <= 0.0 {
            return SkillValue::default();
        }

        let level = rating.floor().min(u8::MAX as f64) as u8;

        SkillValue {
            level,
            progress: (rating - rating.floor()) as f32,
        }
    }

    pub fn effective(&self) -> f64 {
        self.level as f64 + self.progress as f64
    }
}

/// Closed map skill → rating. Skills absent from the map read as level 0;
/// callers that require them surface a data-quality warning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    values: BTreeMap<Skill, SkillValue>,
}

impl SkillSet {
    pub fn new() -> Self {
        SkillSet {
            values: BTreeMap::new(),
        }
    }

    pub fn from_levels(levels: &[(Skill, u8)]) -> Self {
        let values = levels
            .iter()
            .map(|(skill, level)| (*skill, SkillValue::new(*level)))
            .collect();

        SkillSet { values }
    }

    pub fn insert(&mut self, skill: Skill, value: SkillValue) {
        self.values.insert(skill, value);
    }

    pub fn get(&self, skill: Skill) -> Option<SkillValue> {
        self.values.get(&skill).copied()
    }

    /// Rating for a skill, defaulting to level 0 when absent.
    pub fn value(&self, skill: Skill) -> SkillValue {
        self.get(skill).unwrap_or_default()
    }

    pub fn level(&self, skill: Skill) -> u8 {
        self.value(skill).level
    }

    pub fn contains(&self, skill: Skill) -> bool {
        self.values.contains_key(&skill)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, SkillValue)> + '_ {
        self.values.iter().map(|(skill, value)| (*skill, *value))
    }

    pub fn max_level(&self) -> u8 {
        self.values
            .values()
            .map(|value| value.level)
            .max()
            .unwrap_or(0)
    }

    /// Skills from `required` that are absent from this set.
    pub fn missing(&self, required: &[Skill]) -> Vec<Skill> {
        required
            .iter()
            .copied()
            .filter(|skill| !self.contains(*skill))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rating_splits_level_and_progress() {
        let value = SkillValue::from_rating(10.85);

        assert_eq!(value.level, 10);
        assert!((value.progress - 0.85).abs() < 1e-6);
    }

    #[test]
    fn from_rating_clamps_negative_to_zero() {
        let value = SkillValue::from_rating(-3.0);

        assert_eq!(value.level, 0);
        assert_eq!(value.progress, 0.0);
    }

    #[test]
    fn absent_skill_reads_as_zero() {
        let skills = SkillSet::from_levels(&[(Skill::Scoring, 10)]);

        assert_eq!(skills.level(Skill::Defending), 0);
        assert!(!skills.contains(Skill::Defending));
    }

    #[test]
    fn missing_reports_only_absent_skills() {
        let skills = SkillSet::from_levels(&[(Skill::Scoring, 10), (Skill::Passing, 5)]);

        let missing = skills.missing(&[Skill::Scoring, Skill::SetPieces]);

        assert_eq!(missing, vec![Skill::SetPieces]);
    }

    #[test]
    fn skill_names_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(skill.name().parse::<Skill>().unwrap(), skill);
        }
    }
}
