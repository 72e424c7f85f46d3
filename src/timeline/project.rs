use super::task::{Task, TaskDraft, TaskStatus};
use crate::role::Role;
use anyhow::{anyhow, bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The project timeline: a named date range plus its tasks.
///
/// Task ids come from a monotonic counter so they stay unique even after
/// deletions. Derived values (progress, overdue set, per-status counts) are
/// recomputed from the task list on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub version: u32,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub next_id: u64,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Create a new empty timeline with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            project_name: String::new(),
            start_date: None,
            end_date: None,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Create a task from a draft. Leader-only. An invalid draft performs
    /// no mutation. Returns the assigned id.
    pub fn add_task(&mut self, draft: TaskDraft, role: Role) -> Result<u64> {
        if !role.is_leader() {
            bail!("only the team leader can create tasks");
        }
        let task = self.task_from_draft(draft, self.next_id)?;

        let id = task.id;
        self.next_id += 1;
        self.tasks.push(task);
        Ok(id)
    }

    /// Replace every field of an existing task, preserving its id.
    /// Leader-only; the leader may set status directly here.
    pub fn edit_task(&mut self, id: u64, draft: TaskDraft, role: Role) -> Result<()> {
        if !role.is_leader() {
            bail!("only the team leader can edit tasks");
        }
        let task = self.task_from_draft(draft, id)?;

        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("no task with id {}", id))?;
        *slot = task;
        Ok(())
    }

    /// Remove a task permanently. Leader-only; no tombstone is kept and the
    /// id is never reused.
    pub fn delete_task(&mut self, id: u64, role: Role) -> Result<()> {
        if !role.is_leader() {
            bail!("only the team leader can delete tasks");
        }
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            bail!("no task with id {}", id);
        }
        Ok(())
    }

    /// Advance a task's status exactly one step in the cycle. Any member
    /// may do this; all other fields are untouched.
    pub fn cycle_status(&mut self, id: u64) -> Result<TaskStatus> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("no task with id {}", id))?;
        task.status = task.status.cycled();
        Ok(task.status)
    }

    /// Percent of tasks done, rounded; 0 for an empty timeline.
    pub fn progress(&self) -> u32 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.count_status(TaskStatus::Done);
        (done as f64 / self.tasks.len() as f64 * 100.0).round() as u32
    }

    pub fn count_status(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Tasks past their due date and not yet done.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_overdue(today)).collect()
    }

    pub fn total_estimated_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.estimated_hours).sum()
    }

    /// Days until the project end date; negative when past it. None when no
    /// end date is set.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.end_date.map(|end| (end - today).num_days())
    }

    fn task_from_draft(&self, draft: TaskDraft, id: u64) -> Result<Task> {
        draft
            .validate()
            .map_err(|errors| anyhow!("invalid task: {}", errors.join(", ")))?;
        Ok(Task {
            id,
            title: draft.title,
            description: draft.description,
            assigned_to: draft.assigned_to,
            due_date: draft.due_date.expect("validated"),
            estimated_hours: draft.estimated_hours,
            status: draft.status,
            priority: draft.priority,
        })
    }
}
