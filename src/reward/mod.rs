mod queue;
mod status;

pub use queue::{send_all, send_one, DispatchOutcome, DispatchSummary, RewardDispatcher};
pub use status::{begin_send, mark_failed, mark_sent, RewardStatus};
