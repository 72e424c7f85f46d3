use serde::{Deserialize, Serialize};

/// Selects which grading algorithm runs over the team statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Multi-factor weighted score (hours, entries, consistency, share)
    Weighted,
    /// Direct percentage-of-team-hours score with bonus/penalty
    Share,
}

impl Default for PolicyKind {
    fn default() -> Self {
        PolicyKind::Weighted
    }
}

/// Grading configuration.
///
/// Each field is optional; absent fields fall back to the reference values.
///
/// Example YAML:
/// ```yaml
/// grading:
///   policy: weighted
///   max_reward: 5.0
///   total_marks: 100
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GradingConfig {
    /// Which policy to run (default: weighted)
    #[serde(default)]
    pub policy: Option<PolicyKind>,

    /// Reward ceiling in reward units; a perfect score earns this much
    /// (default: 5.0)
    #[serde(default)]
    pub max_reward: Option<f64>,

    /// Marks ceiling for the share policy (default: 100)
    #[serde(default)]
    pub total_marks: Option<f64>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            policy: Some(PolicyKind::Weighted),
            max_reward: Some(5.0),
            total_marks: Some(100.0),
        }
    }
}

impl GradingConfig {
    pub fn policy(&self) -> PolicyKind {
        self.policy.unwrap_or_default()
    }

    pub fn max_reward(&self) -> f64 {
        self.max_reward.unwrap_or(5.0)
    }

    pub fn total_marks(&self) -> f64 {
        self.total_marks.unwrap_or(100.0)
    }
}
