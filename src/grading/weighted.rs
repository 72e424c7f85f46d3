use super::config::GradingConfig;
use super::ladder::Ladder;
use super::result::{GradeResult, ScoreComponent};
use super::GradingPolicy;
use crate::reward::RewardStatus;
use crate::team::TeamMember;

/// Multi-factor weighted policy: the primary "AI grading" simulation.
///
/// Scores are relative to the team, not absolute: hours and entry counts
/// are measured against the top contributor. Weights:
///   hours 35, entries 25, consistency 20 (saturates at 3 entries),
///   work share 20.
#[derive(Debug, Clone)]
pub struct WeightedPolicy {
    pub grades: Ladder,
    pub badges: Ladder,
    pub feedback: Ladder,
}

impl Default for WeightedPolicy {
    fn default() -> Self {
        WeightedPolicy {
            grades: Ladder::default_grades(),
            badges: Ladder::default_badges(),
            feedback: Ladder::default_feedback(),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl GradingPolicy for WeightedPolicy {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn grade(&self, members: &[TeamMember], config: &GradingConfig) -> Vec<GradeResult> {
        if members.is_empty() {
            return Vec::new();
        }

        // Divisors floor at 1 so a team of zero-hour members degrades to
        // zero scores instead of dividing by zero.
        let max_hours = members
            .iter()
            .map(|m| m.total_hours)
            .fold(f64::MIN, f64::max)
            .max(1.0);
        let max_contribs = members
            .iter()
            .map(|m| m.contributions)
            .max()
            .unwrap_or(0)
            .max(1);

        let mut results: Vec<GradeResult> = members
            .iter()
            .map(|m| {
                let hours_score = (m.total_hours / max_hours * 35.0).round() as u32;
                let contributions_score =
                    (m.contributions as f64 / max_contribs as f64 * 25.0).round() as u32;
                let consistency_score =
                    ((m.contributions as f64 / 3.0).min(1.0) * 20.0).round() as u32;
                let quality_score = (m.percentage as f64 / 100.0 * 20.0).round() as u32;

                let score =
                    (hours_score + contributions_score + consistency_score + quality_score).min(100);

                let reward_amount = round1(score as f64 / 100.0 * config.max_reward());

                GradeResult {
                    member: m.member.clone(),
                    score,
                    grade: self.grades.pick(score).to_string(),
                    badge: Some(self.badges.pick(score).to_string()),
                    feedback: self.feedback.pick(score).to_string(),
                    reward_amount,
                    breakdown: vec![
                        ScoreComponent { label: "Hours Logged", points: hours_score, max: 35 },
                        ScoreComponent { label: "Contributions", points: contributions_score, max: 25 },
                        ScoreComponent { label: "Consistency", points: consistency_score, max: 20 },
                        ScoreComponent { label: "Work Share", points: quality_score, max: 20 },
                    ],
                    reward_status: RewardStatus::Pending,
                    tx_ref: None,
                }
            })
            .collect();

        // Stable: ties keep their input order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
