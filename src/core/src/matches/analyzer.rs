use crate::matches::{MatchOutcome, MatchRecord};
use serde::Serialize;

const LOW_POSSESSION: f32 = 45.0;
const LOW_CHANCES: f64 = 3.0;
const HIGH_CONCEDED: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSummary {
    pub matches_analyzed: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_possession: f64,
    pub average_chances: f64,
    pub form_trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PossessionSummary {
    pub average: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackSummary {
    pub average_chances: f64,
    pub average_goals: f64,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefenseSummary {
    pub goals_conceded_avg: f64,
    pub clean_sheets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPatterns {
    pub possession: PossessionSummary,
    pub attack: AttackSummary,
    pub defense: DefenseSummary,
    pub weak_points: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Pattern extraction over the match-history document. Pure averaging and
/// thresholding; expects records ordered newest first.
pub struct MatchAnalyzer {
    matches: Vec<MatchRecord>,
}

impl MatchAnalyzer {
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        MatchAnalyzer { matches }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn recent_form(&self, last_n: usize) -> FormSummary {
        let recent: &[MatchRecord] = if self.matches.len() >= last_n {
            &self.matches[..last_n]
        } else {
            &self.matches
        };

        let wins = count_outcome(recent, MatchOutcome::Win);
        let draws = count_outcome(recent, MatchOutcome::Draw);
        let losses = count_outcome(recent, MatchOutcome::Loss);

        let win_rate = if recent.is_empty() {
            0.0
        } else {
            wins as f64 / recent.len() as f64 * 100.0
        };

        FormSummary {
            matches_analyzed: recent.len(),
            wins,
            draws,
            losses,
            win_rate,
            average_possession: average(recent.iter().map(|m| m.possession as f64)),
            average_chances: average(recent.iter().map(|m| m.chances as f64)),
            form_trend: self.form_trend(recent),
        }
    }

    pub fn extract_patterns(&self) -> MatchPatterns {
        let possession = self.possession_summary();
        let attack = self.attack_summary();
        let defense = self.defense_summary();

        let mut weak_points = Vec::new();
        let mut recommendations = Vec::new();

        if possession.average < LOW_POSSESSION as f64 {
            weak_points.push("Midfield control".to_string());
            recommendations
                .push("Low possession - consider playmaking training or a wider midfield".to_string());
        }

        if attack.average_chances < LOW_CHANCES {
            weak_points.push("Chance creation".to_string());
            recommendations
                .push("Low chance creation - develop wingers or switch to a counter game".to_string());
        }

        if defense.goals_conceded_avg > HIGH_CONCEDED {
            weak_points.push("Defense".to_string());
            recommendations
                .push("High goals conceded - strengthen the back line or train defending".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("Current tactics are working - no changes needed".to_string());
        }

        MatchPatterns {
            possession,
            attack,
            defense,
            weak_points,
            recommendations,
        }
    }

    pub fn suggest_tactical_changes(&self) -> Vec<String> {
        self.extract_patterns().recommendations
    }

    fn possession_summary(&self) -> PossessionSummary {
        let values: Vec<f64> = self.matches.iter().map(|m| m.possession as f64).collect();

        let trend = if values.len() > 5 {
            let recent = average(values[..5].iter().copied());
            let older = average(values[5..].iter().copied());

            trend_from_delta(recent - older, 5.0)
        } else {
            Trend::Stable
        };

        PossessionSummary {
            average: average(values.iter().copied()),
            trend,
        }
    }

    fn attack_summary(&self) -> AttackSummary {
        let chances: f64 = self.matches.iter().map(|m| m.chances as f64).sum();
        let goals: f64 = self
            .matches
            .iter()
            .map(|m| m.result.goals_for as f64)
            .sum();

        let conversion_rate = if chances > 0.0 {
            goals / chances * 100.0
        } else {
            0.0
        };

        AttackSummary {
            average_chances: average(self.matches.iter().map(|m| m.chances as f64)),
            average_goals: average(self.matches.iter().map(|m| m.result.goals_for as f64)),
            conversion_rate,
        }
    }

    fn defense_summary(&self) -> DefenseSummary {
        DefenseSummary {
            goals_conceded_avg: average(
                self.matches.iter().map(|m| m.result.goals_against as f64),
            ),
            clean_sheets: self
                .matches
                .iter()
                .filter(|m| m.result.goals_against == 0)
                .count(),
        }
    }

    /// Points-per-game of the newest three matches against the three
    /// before them.
    fn form_trend(&self, recent: &[MatchRecord]) -> Trend {
        if recent.len() < 2 {
            return Trend::Stable;
        }

        let newest = average(recent.iter().take(3).map(|m| m.result.points() as f64));
        let older_slice: Vec<f64> = recent
            .iter()
            .skip(3)
            .take(3)
            .map(|m| m.result.points() as f64)
            .collect();

        if older_slice.is_empty() {
            return Trend::Stable;
        }

        trend_from_delta(newest - average(older_slice.iter().copied()), 0.5)
    }
}

fn count_outcome(matches: &[MatchRecord], outcome: MatchOutcome) -> usize {
    matches
        .iter()
        .filter(|m| m.result.outcome() == outcome)
        .count()
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();

    if collected.is_empty() {
        return 0.0;
    }

    collected.iter().sum::<f64>() / collected.len() as f64
}

fn trend_from_delta(delta: f64, tolerance: f64) -> Trend {
    if delta > tolerance {
        Trend::Improving
    } else if delta < -tolerance {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::MatchScore;
    use chrono::NaiveDate;

    fn record(days_ago: u32, score: &str, possession: f32, chances: u32) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() - chrono::Days::new(days_ago as u64),
            opponent: "Rivals".to_string(),
            result: score.parse().unwrap(),
            possession,
            chances,
            tactics: "normal".to_string(),
            formation: "4-4-2".to_string(),
        }
    }

    #[test]
    fn recent_form_counts_outcomes() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "3-1", 55.0, 6),
            record(7, "2-2", 50.0, 4),
            record(14, "0-1", 45.0, 2),
        ]);

        let form = analyzer.recent_form(5);

        assert_eq!(form.matches_analyzed, 3);
        assert_eq!((form.wins, form.draws, form.losses), (1, 1, 1));
        assert!((form.win_rate - 100.0 / 3.0).abs() < 1e-9);
        assert!((form.average_possession - 50.0).abs() < 1e-9);
    }

    #[test]
    fn recent_form_respects_window() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "3-0", 55.0, 6),
            record(7, "3-0", 55.0, 6),
            record(14, "0-3", 30.0, 1),
        ]);

        let form = analyzer.recent_form(2);

        assert_eq!(form.matches_analyzed, 2);
        assert_eq!(form.losses, 0);
    }

    #[test]
    fn weak_defense_is_flagged() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "1-3", 50.0, 4),
            record(7, "2-4", 50.0, 5),
        ]);

        let patterns = analyzer.extract_patterns();

        assert!(patterns.weak_points.contains(&"Defense".to_string()));
        assert!(patterns.defense.goals_conceded_avg > HIGH_CONCEDED);
    }

    #[test]
    fn healthy_record_yields_no_weak_points() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "3-0", 56.0, 7),
            record(7, "2-1", 52.0, 5),
        ]);

        let patterns = analyzer.extract_patterns();

        assert!(patterns.weak_points.is_empty());
        assert_eq!(patterns.recommendations.len(), 1);
    }

    #[test]
    fn conversion_rate_uses_total_chances() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "2-0", 50.0, 4),
            record(7, "1-0", 50.0, 2),
        ]);

        let patterns = analyzer.extract_patterns();

        assert!((patterns.attack.conversion_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn winning_streak_after_losses_trends_up() {
        let analyzer = MatchAnalyzer::new(vec![
            record(0, "2-0", 50.0, 4),
            record(7, "3-1", 50.0, 4),
            record(14, "1-0", 50.0, 4),
            record(21, "0-2", 50.0, 4),
            record(28, "1-3", 50.0, 4),
            record(35, "0-1", 50.0, 4),
        ]);

        let form = analyzer.recent_form(6);

        assert_eq!(form.form_trend, Trend::Improving);
    }
}
