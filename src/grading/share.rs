use super::config::GradingConfig;
use super::ladder::MarksLadder;
use super::result::GradeResult;
use super::GradingPolicy;
use crate::reward::RewardStatus;
use crate::team::TeamMember;

/// Direct percentage-share policy: marks mirror each member's share of the
/// team's hours, with a flat bonus above 35% and a flat penalty below 15%.
#[derive(Debug, Clone)]
pub struct SharePolicy {
    pub marks: MarksLadder,
}

impl Default for SharePolicy {
    fn default() -> Self {
        SharePolicy {
            marks: MarksLadder::default_marks(),
        }
    }
}

impl GradingPolicy for SharePolicy {
    fn name(&self) -> &'static str {
        "share"
    }

    fn grade(&self, members: &[TeamMember], config: &GradingConfig) -> Vec<GradeResult> {
        let total_marks = config.total_marks();

        let mut results: Vec<GradeResult> = members
            .iter()
            .map(|m| {
                let mut marks = m.percentage as f64 / 100.0 * total_marks;
                if m.percentage > 35 {
                    marks += 5.0;
                }
                if m.percentage < 15 {
                    marks -= 10.0;
                }
                let marks = marks.clamp(0.0, total_marks).round() as u32;

                let (grade, remark) = self.marks.pick(marks);
                let reward_amount = if total_marks > 0.0 {
                    (marks as f64 / total_marks * config.max_reward() * 10.0).round() / 10.0
                } else {
                    0.0
                };

                GradeResult {
                    member: m.member.clone(),
                    score: marks,
                    grade: grade.to_string(),
                    badge: None,
                    feedback: remark.to_string(),
                    reward_amount,
                    breakdown: vec![],
                    reward_status: RewardStatus::Pending,
                    tx_ref: None,
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::MemberId;

    fn member(id: &str, percentage: u32) -> TeamMember {
        TeamMember {
            member: MemberId::new(id),
            total_hours: percentage as f64,
            contributions: 1,
            percentage,
        }
    }

    fn grade(members: &[TeamMember]) -> Vec<GradeResult> {
        SharePolicy::default().grade(members, &GradingConfig::default())
    }

    fn find<'a>(results: &'a [GradeResult], id: &str) -> &'a GradeResult {
        results.iter().find(|r| r.member == MemberId::new(id)).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        // A at 80% gets the >35 bonus; B at 20% gets neither bonus nor penalty
        let members = vec![member("A", 80), member("B", 20)];
        let results = grade(&members);

        let a = find(&results, "A");
        assert_eq!(a.score, 85);
        assert_eq!(a.grade, "A");

        let b = find(&results, "B");
        assert_eq!(b.score, 20);
        assert_eq!(b.grade, "D");
    }

    #[test]
    fn test_penalty_below_fifteen_percent() {
        let members = vec![member("a", 10), member("b", 90)];
        let results = grade(&members);
        // 10 - 10 penalty = 0
        assert_eq!(find(&results, "a").score, 0);
        assert_eq!(find(&results, "a").grade, "F");
    }

    #[test]
    fn test_penalty_clamps_at_zero() {
        let members = vec![member("a", 5), member("b", 95)];
        let results = grade(&members);
        assert_eq!(find(&results, "a").score, 0);
    }

    #[test]
    fn test_bonus_clamps_at_ceiling() {
        let members = vec![member("a", 100)];
        let results = grade(&members);
        // 100 + 5 bonus clamps back to 100
        assert_eq!(results[0].score, 100);
        assert_eq!(results[0].grade, "A+");
    }

    #[test]
    fn test_boundary_percentages_get_no_adjustment() {
        // 35 is not > 35; 15 is not < 15
        let members = vec![member("a", 35), member("b", 15), member("c", 50)];
        let results = grade(&members);
        assert_eq!(find(&results, "a").score, 35);
        assert_eq!(find(&results, "b").score, 15);
    }

    #[test]
    fn test_custom_total_marks() {
        let config = GradingConfig {
            total_marks: Some(50.0),
            ..GradingConfig::default()
        };
        let members = vec![member("a", 80), member("b", 20)];
        let results = SharePolicy::default().grade(&members, &config);
        // 80% of 50 = 40, plus bonus 5 = 45, within ceiling
        assert_eq!(find(&results, "a").score, 45);
        // 20% of 50 = 10
        assert_eq!(find(&results, "b").score, 10);
        for r in &results {
            assert!(r.score as f64 <= 50.0);
        }
    }

    #[test]
    fn test_no_badge_or_breakdown() {
        let results = grade(&[member("a", 50)]);
        assert!(results[0].badge.is_none());
        assert!(results[0].breakdown.is_empty());
        assert!(!results[0].feedback.is_empty());
    }

    #[test]
    fn test_sorted_descending_by_marks() {
        let members = vec![member("low", 10), member("high", 60), member("mid", 30)];
        let results = grade(&members);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].member, MemberId::new("high"));
    }

    #[test]
    fn test_empty_team() {
        assert!(grade(&[]).is_empty());
    }

    #[test]
    fn test_both_policies_share_io_shape() {
        // The point of the policy trait: identical input through either
        // policy, comparable output
        let members = vec![member("a", 80), member("b", 20)];
        let config = GradingConfig::default();
        let policies: Vec<Box<dyn GradingPolicy>> = vec![
            Box::new(super::super::WeightedPolicy::default()),
            Box::new(SharePolicy::default()),
        ];
        for policy in &policies {
            let results = policy.grade(&members, &config);
            assert_eq!(results.len(), 2);
            assert!(results.iter().all(|r| r.reward_amount >= 0.0));
        }
    }
}
