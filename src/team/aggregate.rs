use super::member::{MemberId, TeamMember};
use crate::store::Contribution;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Reduce the contribution log into per-member statistics.
///
/// Pure and idempotent: safe to call on every change to the log. Output
/// order is unspecified; callers that need determinism sort explicitly.
///
/// # Errors
///
/// Negative hours or an empty member identity in the input is a programmer
/// error (the log rejects both on append) and fails fast here as well.
pub fn aggregate(contributions: &[Contribution]) -> Result<Vec<TeamMember>> {
    let mut groups: HashMap<&MemberId, (f64, u32)> = HashMap::new();

    for c in contributions {
        if c.hours < 0.0 {
            bail!("invalid contribution {}: negative hours {}", c.id, c.hours);
        }
        if c.member.as_str().trim().is_empty() {
            bail!("invalid contribution {}: empty member identity", c.id);
        }
        let entry = groups.entry(&c.member).or_insert((0.0, 0));
        entry.0 += c.hours;
        entry.1 += 1;
    }

    let total_hours: f64 = groups.values().map(|(h, _)| h).sum();

    Ok(groups
        .into_iter()
        .map(|(member, (hours, count))| TeamMember {
            member: member.clone(),
            total_hours: hours,
            contributions: count,
            percentage: if total_hours > 0.0 {
                (hours / total_hours * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect())
}

/// All known member identities, for task assignment pickers.
pub fn roster(members: &[TeamMember]) -> Vec<MemberId> {
    members.iter().map(|m| m.member.clone()).collect()
}

/// Dashboard-level totals across the whole team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub total_contributions: usize,
    pub total_hours: f64,
    pub team_size: usize,
}

pub fn stats(members: &[TeamMember]) -> TeamStats {
    TeamStats {
        total_contributions: members.iter().map(|m| m.contributions as usize).sum(),
        total_hours: members.iter().map(|m| m.total_hours).sum(),
        team_size: members.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contribution(id: u64, member: &str, hours: f64) -> Contribution {
        Contribution {
            id,
            member: MemberId::new(member),
            task: "task".to_string(),
            hours,
            logged_at: Utc::now(),
            links: vec![],
            files: vec![],
        }
    }

    fn find<'a>(members: &'a [TeamMember], id: &str) -> &'a TeamMember {
        members
            .iter()
            .find(|m| m.member == MemberId::new(id))
            .expect("member present")
    }

    #[test]
    fn test_empty_log_yields_no_members() {
        assert!(aggregate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_reference_scenario() {
        // A: 5h + 3h, B: 2h
        let contributions = vec![
            contribution(0, "A", 5.0),
            contribution(1, "A", 3.0),
            contribution(2, "B", 2.0),
        ];
        let members = aggregate(&contributions).unwrap();
        assert_eq!(members.len(), 2);

        let a = find(&members, "A");
        assert_eq!(a.total_hours, 8.0);
        assert_eq!(a.contributions, 2);
        assert_eq!(a.percentage, 80);

        let b = find(&members, "B");
        assert_eq!(b.total_hours, 2.0);
        assert_eq!(b.contributions, 1);
        assert_eq!(b.percentage, 20);
    }

    #[test]
    fn test_hours_conservation() {
        let contributions = vec![
            contribution(0, "A", 1.5),
            contribution(1, "B", 2.25),
            contribution(2, "C", 0.75),
            contribution(3, "A", 4.0),
        ];
        let members = aggregate(&contributions).unwrap();
        let member_total: f64 = members.iter().map(|m| m.total_hours).sum();
        let raw_total: f64 = contributions.iter().map(|c| c.hours).sum();
        assert_eq!(member_total, raw_total);
    }

    #[test]
    fn test_zero_total_hours_gives_zero_percentages() {
        let contributions = vec![contribution(0, "A", 0.0), contribution(1, "B", 0.0)];
        let members = aggregate(&contributions).unwrap();
        assert!(members.iter().all(|m| m.percentage == 0));
    }

    #[test]
    fn test_percentage_bounds() {
        let contributions = vec![
            contribution(0, "A", 0.1),
            contribution(1, "B", 99.9),
            contribution(2, "C", 0.0),
        ];
        let members = aggregate(&contributions).unwrap();
        for m in &members {
            assert!(m.percentage <= 100);
        }
    }

    #[test]
    fn test_percentage_rounding_is_half_up() {
        // 1h of 8h total = 12.5% -> rounds to 13
        let contributions = vec![contribution(0, "A", 1.0), contribution(1, "B", 7.0)];
        let members = aggregate(&contributions).unwrap();
        assert_eq!(find(&members, "A").percentage, 13);
        assert_eq!(find(&members, "B").percentage, 88);
    }

    #[test]
    fn test_negative_hours_fail_fast() {
        let contributions = vec![contribution(0, "A", -2.0)];
        assert!(aggregate(&contributions).is_err());
    }

    #[test]
    fn test_case_sensitive_identities_are_distinct() {
        let contributions = vec![contribution(0, "Alice", 1.0), contribution(1, "alice", 1.0)];
        let members = aggregate(&contributions).unwrap();
        assert_eq!(members.len(), 2);
    }

    #[test]
    fn test_stats_totals() {
        let contributions = vec![
            contribution(0, "A", 5.0),
            contribution(1, "A", 3.0),
            contribution(2, "B", 2.0),
        ];
        let members = aggregate(&contributions).unwrap();
        let s = stats(&members);
        assert_eq!(s.total_contributions, 3);
        assert_eq!(s.total_hours, 10.0);
        assert_eq!(s.team_size, 2);
    }

    #[test]
    fn test_roster_lists_every_member() {
        let contributions = vec![contribution(0, "A", 1.0), contribution(1, "B", 1.0)];
        let members = aggregate(&contributions).unwrap();
        let mut names = roster(&members);
        names.sort();
        assert_eq!(names, vec![MemberId::new("A"), MemberId::new("B")]);
    }
}
