mod storage;
mod types;

pub use storage::{get_store_path, load_log, save_log};
pub use types::{Contribution, ContributionDraft, ContributionLog, ProofFile};
