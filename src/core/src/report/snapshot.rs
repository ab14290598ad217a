use crate::roster::{Player, PlayerPosition, Skill};
use crate::shared::CurrencyValue;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const STRONG_SKILL_AVG: f64 = 12.0;
const WEAK_SKILL_AVG: f64 = 10.0;
const YOUNG_SQUAD_AGE: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestLineup {
    pub goalkeeper: Option<String>,
    pub defenders: Vec<String>,
    pub midfielders: Vec<String>,
    pub forwards: Vec<String>,
}

/// Aggregate overview of a roster: totals, distribution, strengths and
/// weaknesses, and a naive best lineup. Pure assembly over the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSnapshot {
    pub total_players: usize,
    pub average_age: f64,
    pub total_salary: CurrencyValue,
    pub total_tsi: f64,
    pub position_distribution: BTreeMap<PlayerPosition, usize>,
    pub average_skills: BTreeMap<Skill, f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub tactical_recommendations: Vec<String>,
    pub best_lineup: BestLineup,
}

impl TeamSnapshot {
    pub fn generate(players: &[Player]) -> Self {
        let average_age = if players.is_empty() {
            0.0
        } else {
            players.iter().map(|p| p.age as f64).sum::<f64>() / players.len() as f64
        };

        let mut position_distribution: BTreeMap<PlayerPosition, usize> = BTreeMap::new();
        for player in players {
            *position_distribution.entry(player.position).or_insert(0) += 1;
        }

        let average_skills = average_skills(players);
        let strengths = identify_strengths(&average_skills, average_age);
        let weaknesses = identify_weaknesses(&average_skills, &position_distribution);
        let tactical_recommendations = recommendations(&weaknesses);

        TeamSnapshot {
            total_players: players.len(),
            average_age,
            total_salary: CurrencyValue::usd(players.iter().map(|p| p.salary).sum()),
            total_tsi: players.iter().map(|p| p.tsi).sum(),
            position_distribution,
            average_skills,
            strengths,
            weaknesses,
            tactical_recommendations,
            best_lineup: best_lineup(players),
        }
    }
}

/// Mean level per skill, over the players that actually carry the skill.
fn average_skills(players: &[Player]) -> BTreeMap<Skill, f64> {
    let mut sums: BTreeMap<Skill, (f64, usize)> = BTreeMap::new();

    for player in players {
        for (skill, value) in player.skills.iter() {
            let entry = sums.entry(skill).or_insert((0.0, 0));
            entry.0 += value.level as f64;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(skill, (sum, count))| (skill, sum / count as f64))
        .collect()
}

fn identify_strengths(average_skills: &BTreeMap<Skill, f64>, average_age: f64) -> Vec<String> {
    let mut strengths = Vec::new();

    if average_skills.get(&Skill::Defending).copied().unwrap_or(0.0) > STRONG_SKILL_AVG {
        strengths.push("Strong defense".to_string());
    }

    if average_skills.get(&Skill::Playmaking).copied().unwrap_or(0.0) > STRONG_SKILL_AVG {
        strengths.push("Good midfield control".to_string());
    }

    if average_skills.get(&Skill::Scoring).copied().unwrap_or(0.0) > STRONG_SKILL_AVG {
        strengths.push("Strong attack".to_string());
    }

    if average_age > 0.0 && average_age < YOUNG_SQUAD_AGE {
        strengths.push("Young squad with potential".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Balanced team".to_string());
    }

    strengths
}

fn identify_weaknesses(
    average_skills: &BTreeMap<Skill, f64>,
    position_distribution: &BTreeMap<PlayerPosition, usize>,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if average_skills.get(&Skill::Defending).copied().unwrap_or(0.0) < WEAK_SKILL_AVG {
        weaknesses.push("Weak defense".to_string());
    }

    if average_skills.get(&Skill::Playmaking).copied().unwrap_or(0.0) < WEAK_SKILL_AVG {
        weaknesses.push("Weak midfield".to_string());
    }

    if average_skills.get(&Skill::Scoring).copied().unwrap_or(0.0) < WEAK_SKILL_AVG {
        weaknesses.push("Weak attack".to_string());
    }

    if position_distribution
        .get(&PlayerPosition::GK)
        .copied()
        .unwrap_or(0)
        == 0
    {
        weaknesses.push("Missing goalkeeper".to_string());
    }

    weaknesses
}

fn recommendations(weaknesses: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    for weakness in weaknesses {
        match weakness.as_str() {
            "Weak defense" => {
                recommendations.push("Consider defending training or buying defenders".to_string())
            }
            "Weak midfield" => recommendations.push("Focus on playmaking training".to_string()),
            "Weak attack" => {
                recommendations.push("Train scoring or invest in forwards".to_string())
            }
            "Missing goalkeeper" => recommendations.push("Sign a goalkeeper".to_string()),
            _ => {}
        }
    }

    if recommendations.is_empty() {
        recommendations.push("Team is well balanced - focus on maintaining form".to_string());
    }

    recommendations
}

fn best_lineup(players: &[Player]) -> BestLineup {
    let by_tsi = |a: &&Player, b: &&Player| {
        b.tsi
            .partial_cmp(&a.tsi)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    };

    let mut goalkeepers: Vec<&Player> =
        players.iter().filter(|p| p.position.is_goalkeeper()).collect();
    let mut defenders: Vec<&Player> =
        players.iter().filter(|p| p.position.is_defender()).collect();
    let mut midfielders: Vec<&Player> =
        players.iter().filter(|p| p.position.is_midfielder()).collect();
    let mut forwards: Vec<&Player> =
        players.iter().filter(|p| p.position.is_forward()).collect();

    goalkeepers.sort_by(by_tsi);
    defenders.sort_by(by_tsi);
    midfielders.sort_by(by_tsi);
    forwards.sort_by(by_tsi);

    BestLineup {
        goalkeeper: goalkeepers.first().map(|p| p.name.clone()),
        defenders: defenders.iter().take(4).map(|p| p.name.clone()).collect(),
        midfielders: midfielders.iter().take(4).map(|p| p.name.clone()).collect(),
        forwards: forwards.iter().take(2).map(|p| p.name.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SkillSet;

    fn player(id: u32, position: PlayerPosition, tsi: f64, skills: &[(Skill, u8)]) -> Player {
        Player {
            id,
            name: format!("Player {}", id),
            age: 22,
            position,
            skills: SkillSet::from_levels(skills),
            salary: 1000.0,
            tsi,
            form: 5,
            stamina: 5,
            experience: 2,
            leadership: 2,
        }
    }

    #[test]
    fn snapshot_aggregates_totals() {
        let roster = vec![
            player(1, PlayerPosition::GK, 3000.0, &[(Skill::Goalkeeping, 12)]),
            player(2, PlayerPosition::FW, 5000.0, &[(Skill::Scoring, 14)]),
        ];

        let snapshot = TeamSnapshot::generate(&roster);

        assert_eq!(snapshot.total_players, 2);
        assert_eq!(snapshot.total_tsi, 8000.0);
        assert_eq!(snapshot.total_salary.amount, 2000.0);
        assert_eq!(snapshot.position_distribution[&PlayerPosition::FW], 1);
    }

    #[test]
    fn missing_goalkeeper_is_a_weakness() {
        let roster = vec![player(1, PlayerPosition::FW, 5000.0, &[(Skill::Scoring, 14)])];

        let snapshot = TeamSnapshot::generate(&roster);

        assert!(snapshot
            .weaknesses
            .contains(&"Missing goalkeeper".to_string()));
        assert!(snapshot.best_lineup.goalkeeper.is_none());
    }

    #[test]
    fn strong_attack_is_recognized() {
        let roster = vec![
            player(1, PlayerPosition::FW, 5000.0, &[(Skill::Scoring, 15)]),
            player(2, PlayerPosition::FW, 4000.0, &[(Skill::Scoring, 13)]),
        ];

        let snapshot = TeamSnapshot::generate(&roster);

        assert!(snapshot.strengths.contains(&"Strong attack".to_string()));
    }

    #[test]
    fn best_lineup_prefers_higher_tsi() {
        let roster = vec![
            player(1, PlayerPosition::FW, 2000.0, &[]),
            player(2, PlayerPosition::FW, 9000.0, &[]),
            player(3, PlayerPosition::FW, 5000.0, &[]),
        ];

        let snapshot = TeamSnapshot::generate(&roster);

        assert_eq!(
            snapshot.best_lineup.forwards,
            vec!["Player 2".to_string(), "Player 3".to_string()]
        );
    }
}
