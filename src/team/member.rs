use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque member identity (wallet address or guest label).
///
/// Equality is exact, case-sensitive string match. There is no registry or
/// normalization behind this type; two spellings of the same person are two
/// members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        MemberId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for display: long wallet-style addresses become
    /// "NXGH4F2K...AB3M", short names pass through unchanged.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 20 {
            format!(
                "{}...{}",
                chars[..10].iter().collect::<String>(),
                chars[chars.len() - 6..].iter().collect::<String>()
            )
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId::new(s)
    }
}

/// Per-member statistics derived from the contribution log. A pure
/// projection: recomputed from scratch on every change, never mutated in
/// place, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub member: MemberId,
    pub total_hours: f64,
    /// Number of logged entries
    pub contributions: u32,
    /// Share of the team's total hours, rounded to the nearest percent.
    /// Zero when the team has no hours at all.
    pub percentage: u32,
}
