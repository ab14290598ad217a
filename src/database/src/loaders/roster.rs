use crate::LoaderError;
use scout_core::{Player, PlayerPosition, Skill, SkillSet, SkillValue};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw CSV row. The `skills` column carries an embedded JSON object
/// mapping skill name → rating (fractional ratings allowed).
#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub position: String,
    pub skills: String,
    pub salary: f64,
    pub tsi: f64,
    pub form: u8,
    pub stamina: u8,
    pub experience: u8,
    pub leadership: u8,
}

/// Parse failure of a single data row (1-based, header excluded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Result of reading one roster file: the rows that mapped cleanly plus
/// the rows that did not. A malformed row never fails the file.
#[derive(Debug, Default)]
pub struct RosterFile {
    pub players: Vec<Player>,
    pub errors: Vec<RowError>,
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn load_csv(path: impl AsRef<Path>) -> Result<RosterFile, LoaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::read_csv(file))
    }

    pub fn read_csv<R: Read>(reader: R) -> RosterFile {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut roster = RosterFile::default();

        for (index, record) in csv_reader.deserialize::<PlayerEntity>().enumerate() {
            let row = index + 1;

            let outcome = record
                .map_err(|error| error.to_string())
                .and_then(|entity| entity.into_player());

            match outcome {
                Ok(player) => roster.players.push(player),
                Err(message) => {
                    warn!("skipping roster row {}: {}", row, message);
                    roster.errors.push(RowError { row, message });
                }
            }
        }

        roster
    }
}

impl PlayerEntity {
    fn into_player(self) -> Result<Player, String> {
        let position: PlayerPosition = self.position.parse()?;
        let skills = parse_skills(&self.skills)?;

        Ok(Player {
            id: self.id,
            name: self.name,
            age: self.age,
            position,
            skills,
            salary: self.salary,
            tsi: self.tsi,
            form: self.form,
            stamina: self.stamina,
            experience: self.experience,
            leadership: self.leadership,
        })
    }
}

/// Decode the embedded skills object against the closed skill enum, so
/// the engine never sees arbitrary keys.
fn parse_skills(raw: &str) -> Result<SkillSet, String> {
    let ratings: BTreeMap<String, f64> = serde_json::from_str(raw)
        .map_err(|error| format!("malformed skills object: {}", error))?;

    let mut skills = SkillSet::new();

    for (name, rating) in ratings {
        let skill: Skill = name.parse()?;

        if !rating.is_finite() || rating < 0.0 {
            return Err(format!("skill '{}' has invalid rating {}", skill, rating));
        }

        skills.insert(skill, SkillValue::from_rating(rating));
    }

    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,age,position,skills,salary,tsi,form,stamina,experience,leadership";

    fn read(rows: &[&str]) -> RosterFile {
        let data = format!("{}\n{}", HEADER, rows.join("\n"));

        RosterLoader::read_csv(data.as_bytes())
    }

    #[test]
    fn clean_row_maps_to_player() {
        let roster = read(&[r#"1,Arnesen,19,FW,"{""scoring"": 10.85, ""passing"": 6}",1200,8000,6,5,1,1"#]);

        assert!(roster.errors.is_empty());
        assert_eq!(roster.players.len(), 1);

        let player = &roster.players[0];
        assert_eq!(player.position, PlayerPosition::FW);
        assert_eq!(player.skills.level(Skill::Scoring), 10);
        assert!((player.skills.value(Skill::Scoring).progress - 0.85).abs() < 1e-6);
        assert_eq!(player.skills.level(Skill::Passing), 6);
    }

    #[test]
    fn bad_row_is_skipped_not_fatal() {
        let roster = read(&[
            r#"1,Arnesen,19,FW,"{""scoring"": 10}",1200,8000,6,5,1,1"#,
            r#"2,Ghost,xx,FW,"{""scoring"": 10}",1200,8000,6,5,1,1"#,
            r#"3,Sole,21,IM,"{""playmaking"": 11}",1400,9000,5,6,2,2"#,
        ]);

        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.errors.len(), 1);
        assert_eq!(roster.errors[0].row, 2);
    }

    #[test]
    fn unknown_skill_key_is_a_row_error() {
        let roster = read(&[r#"1,Arnesen,19,FW,"{""juggling"": 10}",1200,8000,6,5,1,1"#]);

        assert!(roster.players.is_empty());
        assert!(roster.errors[0].message.contains("juggling"));
    }

    #[test]
    fn unknown_position_is_a_row_error() {
        let roster = read(&[r#"1,Arnesen,19,ST,"{""scoring"": 10}",1200,8000,6,5,1,1"#]);

        assert!(roster.players.is_empty());
        assert!(roster.errors[0].message.contains("ST"));
    }

    #[test]
    fn malformed_skills_object_is_a_row_error() {
        let roster = read(&[r#"1,Arnesen,19,FW,not-json,1200,8000,6,5,1,1"#]);

        assert!(roster.players.is_empty());
        assert!(roster.errors[0].message.contains("skills"));
    }

    #[test]
    fn negative_rating_is_a_row_error() {
        let roster = read(&[r#"1,Arnesen,19,FW,"{""scoring"": -2}",1200,8000,6,5,1,1"#]);

        assert!(roster.players.is_empty());
        assert_eq!(roster.errors.len(), 1);
    }
}
