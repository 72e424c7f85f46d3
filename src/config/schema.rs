use crate::grading::GradingConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Project display name
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub grading: Option<GradingConfig>,

    #[serde(default)]
    pub reward: Option<RewardConfig>,
}

/// Reward dispatch settings.
///
/// Example YAML:
/// ```yaml
/// reward:
///   dispatch_delay: "500ms"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RewardConfig {
    /// Minimum spacing between consecutive dispatches in a bulk send,
    /// as a humantime string (default: "500ms")
    #[serde(default)]
    pub dispatch_delay: Option<String>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            dispatch_delay: Some("500ms".to_string()),
        }
    }
}

impl RewardConfig {
    pub fn dispatch_delay(&self) -> Result<Duration> {
        match &self.dispatch_delay {
            None => Ok(Duration::from_millis(500)),
            Some(s) => humantime::parse_duration(s)
                .with_context(|| format!("reward.dispatch_delay: invalid duration '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::PolicyKind;

    #[test]
    fn test_default_dispatch_delay() {
        let config = RewardConfig::default();
        assert_eq!(config.dispatch_delay().unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_missing_delay_falls_back() {
        let config = RewardConfig { dispatch_delay: None };
        assert_eq!(config.dispatch_delay().unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_custom_delay_parse() {
        let config = RewardConfig {
            dispatch_delay: Some("2s".to_string()),
        };
        assert_eq!(config.dispatch_delay().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_delay_errors() {
        let config = RewardConfig {
            dispatch_delay: Some("soon".to_string()),
        };
        assert!(config.dispatch_delay().is_err());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
project: Capstone
grading:
  policy: share
  total_marks: 100
reward:
  dispatch_delay: "1s"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.project.as_deref(), Some("Capstone"));
        assert_eq!(config.grading.unwrap().policy(), PolicyKind::Share);
        assert_eq!(
            config.reward.unwrap().dispatch_delay().unwrap(),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.project.is_none());
        assert!(config.grading.is_none());
        assert!(config.reward.is_none());
    }
}
