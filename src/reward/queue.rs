use super::status::{begin_send, mark_failed, mark_sent, RewardStatus};
use crate::grading::GradeResult;
use crate::role::Role;
use crate::team::MemberId;
use anyhow::{bail, Result};
use std::time::Duration;

/// External payment collaborator. The engine hands over recipient, amount,
/// and memo; the dispatcher answers with a transaction reference or an
/// error. Transport details never cross this boundary.
#[allow(async_fn_in_trait)]
pub trait RewardDispatcher {
    async fn dispatch(&self, recipient: &MemberId, amount: f64, memo: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Failed,
}

/// Counts from a bulk dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Dispatch the reward for a single result.
///
/// Leader-only. Refuses zero-amount rewards and results that are already
/// `Sending` or `Sent`. A dispatcher failure is recorded on the result as
/// `Failed` and returned as an outcome, never as an error: retrying is the
/// caller's decision.
pub async fn send_one<D: RewardDispatcher>(
    result: &mut GradeResult,
    dispatcher: &D,
    role: Role,
) -> Result<DispatchOutcome> {
    if !role.is_leader() {
        bail!("only the team leader can dispatch rewards");
    }
    if result.reward_amount <= 0.0 {
        bail!("no reward to dispatch for {}", result.member);
    }

    begin_send(result)?;

    let memo = result.reward_memo();
    match dispatcher
        .dispatch(&result.member, result.reward_amount, &memo)
        .await
    {
        Ok(tx_ref) => {
            mark_sent(result, tx_ref)?;
            Ok(DispatchOutcome::Sent)
        }
        Err(_) => {
            mark_failed(result)?;
            Ok(DispatchOutcome::Failed)
        }
    }
}

/// Dispatch every pending reward, one member at a time, in the ranked order
/// of `results`.
///
/// Strictly sequential with a spacing delay between dispatches so the
/// downstream payment system never sees dependent transactions out of
/// order. One failure does not stop the run; the loop finishes only once
/// every pending entry has reached `Sent` or `Failed`.
pub async fn send_all<D: RewardDispatcher>(
    results: &mut [GradeResult],
    dispatcher: &D,
    role: Role,
    delay: Duration,
) -> Result<DispatchSummary> {
    if !role.is_leader() {
        bail!("only the team leader can dispatch rewards");
    }

    let mut summary = DispatchSummary::default();
    let mut first = true;

    for result in results.iter_mut() {
        if result.reward_status != RewardStatus::Pending || result.reward_amount <= 0.0 {
            summary.skipped += 1;
            continue;
        }

        if !first && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        first = false;

        match send_one(result, dispatcher, role).await? {
            DispatchOutcome::Sent => summary.sent += 1,
            DispatchOutcome::Failed => summary.failed += 1,
        }
    }

    Ok(summary)
}
