use crate::reward::RewardStatus;
use crate::team::MemberId;

/// One named sub-score of a multi-factor grade (e.g. "Hours Logged" 31/35).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComponent {
    pub label: &'static str,
    pub points: u32,
    pub max: u32,
}

/// Outcome of running a grading policy for one member.
///
/// Created fresh every time grading runs. `reward_status` and `tx_ref` are
/// the only fields mutated afterwards, strictly through the dispatch
/// protocol in the reward module.
#[derive(Debug, Clone)]
pub struct GradeResult {
    pub member: MemberId,
    /// 0-100 under the weighted policy; 0-total_marks under the share policy
    pub score: u32,
    pub grade: String,
    /// Qualitative badge; only the weighted policy assigns one
    pub badge: Option<String>,
    pub feedback: String,
    pub reward_amount: f64,
    /// Empty for policies without a factor breakdown
    pub breakdown: Vec<ScoreComponent>,
    pub reward_status: RewardStatus,
    /// Transaction reference, set only after a successful dispatch
    pub tx_ref: Option<String>,
}

impl GradeResult {
    /// Memo attached to the reward payment for this result.
    pub fn reward_memo(&self) -> String {
        format!(
            "ContribChain reward - Grade: {} | Score: {}/100",
            self.grade, self.score
        )
    }
}

/// Team-level totals over one grading run, for the summary footer.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingSummary {
    pub total_reward: f64,
    pub average_score: u32,
    pub sent: usize,
    pub total: usize,
}

impl GradingSummary {
    pub fn of(results: &[GradeResult]) -> Self {
        let total = results.len();
        let total_reward: f64 = results.iter().map(|r| r.reward_amount).sum();
        let average_score = if total > 0 {
            (results.iter().map(|r| r.score as f64).sum::<f64>() / total as f64).round() as u32
        } else {
            0
        };
        let sent = results
            .iter()
            .filter(|r| r.reward_status == RewardStatus::Sent)
            .count();
        GradingSummary {
            total_reward,
            average_score,
            sent,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(member: &str, score: u32, reward: f64) -> GradeResult {
        GradeResult {
            member: MemberId::new(member),
            score,
            grade: "A".to_string(),
            badge: None,
            feedback: String::new(),
            reward_amount: reward,
            breakdown: vec![],
            reward_status: RewardStatus::Pending,
            tx_ref: None,
        }
    }

    #[test]
    fn test_reward_memo_carries_grade_and_score() {
        let r = result("alice", 92, 4.6);
        assert_eq!(r.reward_memo(), "ContribChain reward - Grade: A | Score: 92/100");
    }

    #[test]
    fn test_summary_of_empty_run() {
        let summary = GradingSummary::of(&[]);
        assert_eq!(summary.average_score, 0);
        assert_eq!(summary.total_reward, 0.0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_summary_totals() {
        let mut sent = result("a", 90, 4.5);
        sent.reward_status = RewardStatus::Sent;
        let results = vec![sent, result("b", 70, 3.5)];
        let summary = GradingSummary::of(&results);
        assert_eq!(summary.total_reward, 8.0);
        assert_eq!(summary.average_score, 80);
        assert_eq!(summary.sent, 1);
        assert_eq!(summary.total, 2);
    }
}
