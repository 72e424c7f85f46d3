use crate::grading::GradeResult;
use anyhow::{bail, Result};
use std::fmt;

/// Per-result reward lifecycle. Legal transitions:
///
/// ```text
/// pending -> sending -> sent
///                    -> failed -> sending (manual retry)
/// ```
///
/// `Sent` is terminal. Every dispatch passes through `Sending`; there is no
/// shortcut from `Pending` to a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardStatus {
    Pending,
    Sending,
    Sent,
    Failed,
}

impl fmt::Display for RewardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardStatus::Pending => write!(f, "pending"),
            RewardStatus::Sending => write!(f, "sending"),
            RewardStatus::Sent => write!(f, "sent"),
            RewardStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Move a result into `Sending`. Allowed from `Pending` and, as the manual
/// retry path, from `Failed`.
pub fn begin_send(result: &mut GradeResult) -> Result<()> {
    match result.reward_status {
        RewardStatus::Pending | RewardStatus::Failed => {
            result.reward_status = RewardStatus::Sending;
            Ok(())
        }
        status => bail!(
            "cannot start dispatch for {}: status is {}",
            result.member,
            status
        ),
    }
}

/// Record a successful dispatch. Only legal while `Sending`.
pub fn mark_sent(result: &mut GradeResult, tx_ref: String) -> Result<()> {
    match result.reward_status {
        RewardStatus::Sending => {
            result.reward_status = RewardStatus::Sent;
            result.tx_ref = Some(tx_ref);
            Ok(())
        }
        status => bail!(
            "cannot record sent for {}: status is {}, not sending",
            result.member,
            status
        ),
    }
}

/// Record a failed dispatch. Only legal while `Sending`. The result stays
/// retryable; `tx_ref` is never set on failure.
pub fn mark_failed(result: &mut GradeResult) -> Result<()> {
    match result.reward_status {
        RewardStatus::Sending => {
            result.reward_status = RewardStatus::Failed;
            Ok(())
        }
        status => bail!(
            "cannot record failure for {}: status is {}, not sending",
            result.member,
            status
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::MemberId;

    fn result() -> GradeResult {
        GradeResult {
            member: MemberId::new("alice"),
            score: 90,
            grade: "A".to_string(),
            badge: None,
            feedback: String::new(),
            reward_amount: 4.5,
            breakdown: vec![],
            reward_status: RewardStatus::Pending,
            tx_ref: None,
        }
    }

    #[test]
    fn test_happy_path() {
        let mut r = result();
        begin_send(&mut r).unwrap();
        assert_eq!(r.reward_status, RewardStatus::Sending);
        mark_sent(&mut r, "TX1".to_string()).unwrap();
        assert_eq!(r.reward_status, RewardStatus::Sent);
        assert_eq!(r.tx_ref.as_deref(), Some("TX1"));
    }

    #[test]
    fn test_cannot_skip_sending() {
        let mut r = result();
        assert!(mark_sent(&mut r, "TX1".to_string()).is_err());
        assert!(mark_failed(&mut r).is_err());
        assert_eq!(r.reward_status, RewardStatus::Pending);
        assert!(r.tx_ref.is_none());
    }

    #[test]
    fn test_sent_is_terminal() {
        let mut r = result();
        begin_send(&mut r).unwrap();
        mark_sent(&mut r, "TX1".to_string()).unwrap();
        assert!(begin_send(&mut r).is_err());
        assert!(mark_failed(&mut r).is_err());
        assert_eq!(r.reward_status, RewardStatus::Sent);
    }

    #[test]
    fn test_failed_is_retryable() {
        let mut r = result();
        begin_send(&mut r).unwrap();
        mark_failed(&mut r).unwrap();
        assert_eq!(r.reward_status, RewardStatus::Failed);
        assert!(r.tx_ref.is_none());

        begin_send(&mut r).unwrap();
        mark_sent(&mut r, "TX2".to_string()).unwrap();
        assert_eq!(r.reward_status, RewardStatus::Sent);
    }

    #[test]
    fn test_cannot_begin_while_sending() {
        let mut r = result();
        begin_send(&mut r).unwrap();
        assert!(begin_send(&mut r).is_err());
    }
}
