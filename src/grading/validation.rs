use super::config::GradingConfig;

/// Validate grading configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_grading(config: &GradingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(max_reward) = config.max_reward {
        if max_reward < 0.0 {
            errors.push("grading.max_reward: must be non-negative".to_string());
        }
    }

    if let Some(total_marks) = config.total_marks {
        if total_marks <= 0.0 {
            errors.push("grading.total_marks: must be positive".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
