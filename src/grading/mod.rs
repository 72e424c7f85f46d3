pub mod config;
mod ladder;
mod result;
mod share;
mod validation;
mod weighted;

pub use config::{GradingConfig, PolicyKind};
pub use ladder::{Band, Ladder, MarkBand, MarksLadder};
pub use result::{GradeResult, GradingSummary, ScoreComponent};
pub use share::SharePolicy;
pub use validation::validate_grading;
pub use weighted::WeightedPolicy;

use crate::team::TeamMember;

/// A named, swappable grading algorithm. Both policies take the same team
/// statistics and produce the same result shape, so callers can run either
/// over identical input and compare.
pub trait GradingPolicy {
    fn name(&self) -> &'static str;

    /// Compute ranked results for the whole team. Pure: identical input
    /// yields identical output, including ordering.
    fn grade(&self, members: &[TeamMember], config: &GradingConfig) -> Vec<GradeResult>;
}

/// Instantiate the policy selected by configuration.
pub fn policy_for(kind: PolicyKind) -> Box<dyn GradingPolicy> {
    match kind {
        PolicyKind::Weighted => Box::new(WeightedPolicy::default()),
        PolicyKind::Share => Box::new(SharePolicy::default()),
    }
}
