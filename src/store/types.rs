use crate::team::MemberId;
use anyhow::{bail, Result};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged unit of work. Immutable once appended to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u64,
    pub member: MemberId,
    /// Free-text description of what was worked on
    pub task: String,
    /// Hours spent. Zero is valid (e.g. a link-only proof entry)
    pub hours: f64,
    pub logged_at: DateTime<Utc>,
    /// Proof links (PRs, documents, deployed demos)
    #[serde(default)]
    pub links: Vec<String>,
    /// Inline proof files attached to this entry
    #[serde(default)]
    pub files: Vec<ProofFile>,
}

/// Proof file attached to a contribution. Content is carried as a base64
/// payload; how it got encoded is the uploader's concern, not ours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub content: String,
}

impl ProofFile {
    /// Decode the inline payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.content)
            .map_err(|e| anyhow::anyhow!("invalid proof file payload for '{}': {}", self.name, e))
    }
}

/// Fields supplied by the contribution form; id and timestamp are assigned
/// by the log on append.
#[derive(Debug, Clone)]
pub struct ContributionDraft {
    pub member: MemberId,
    pub task: String,
    pub hours: f64,
    pub links: Vec<String>,
    pub files: Vec<ProofFile>,
}

/// Append-only contribution store. Entries are never edited or removed;
/// all statistics are recomputed from the full list on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionLog {
    pub version: u32,
    /// Next id to assign. Monotonic, so ids stay unique across restarts.
    pub next_id: u64,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

impl Default for ContributionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionLog {
    /// Create a new empty log with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            next_id: 0,
            contributions: Vec::new(),
        }
    }

    /// Append a contribution, assigning a fresh id and timestamp.
    ///
    /// # Errors
    ///
    /// Fails fast on invalid proof-of-work data: empty member identity,
    /// empty task description, or negative hours. Zero hours is accepted.
    pub fn log(&mut self, draft: ContributionDraft) -> Result<&Contribution> {
        if draft.member.as_str().trim().is_empty() {
            bail!("contribution rejected: member identity must not be empty");
        }
        if draft.task.trim().is_empty() {
            bail!("contribution rejected: task description must not be empty");
        }
        if draft.hours < 0.0 {
            bail!("contribution rejected: hours must be non-negative, got {}", draft.hours);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.contributions.push(Contribution {
            id,
            member: draft.member,
            task: draft.task,
            hours: draft.hours,
            logged_at: Utc::now(),
            links: draft.links,
            files: draft.files,
        });
        Ok(self.contributions.last().expect("just pushed"))
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}
