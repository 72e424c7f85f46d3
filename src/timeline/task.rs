use crate::team::MemberId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-state task lifecycle. Anyone can advance a task exactly one step
/// with `cycled`; only the leader may set a status directly through edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The next status in the todo -> in-progress -> done -> todo cycle.
    pub fn cycled(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A timeline task. Created, edited, and deleted only by the team leader;
/// any member may cycle its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub assigned_to: MemberId,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl Task {
    /// Overdue means the due date is strictly in the past and the task is
    /// not done.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && self.status != TaskStatus::Done
    }
}

/// Form fields for creating or editing a task; the timeline assigns ids.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_to: MemberId,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub status: TaskStatus,
    pub priority: Priority,
}

impl TaskDraft {
    /// Validate required fields. Returns all problems at once so a form can
    /// show every error; an invalid draft must never be stored.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("task.title: must not be empty".to_string());
        }
        if self.assigned_to.as_str().trim().is_empty() {
            errors.push("task.assigned_to: a member must be assigned".to_string());
        }
        if self.due_date.is_none() {
            errors.push("task.due_date: a due date is required".to_string());
        }
        if self.estimated_hours < 0.0 {
            errors.push("task.estimated_hours: must be non-negative".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn valid_draft() -> TaskDraft {
        TaskDraft {
            title: "Design API".to_string(),
            description: String::new(),
            assigned_to: MemberId::new("alice"),
            due_date: Some(date("2026-09-15")),
            estimated_hours: 4.0,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_status_cycle_order() {
        assert_eq!(TaskStatus::Todo.cycled(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.cycled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.cycled(), TaskStatus::Todo);
    }

    #[test]
    fn test_cycling_three_times_is_identity() {
        for start in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(start.cycled().cycled().cycled(), start);
        }
    }

    #[test]
    fn test_overdue() {
        let mut task = Task {
            id: 1,
            title: "t".to_string(),
            description: String::new(),
            assigned_to: MemberId::new("alice"),
            due_date: date("2026-08-01"),
            estimated_hours: 1.0,
            status: TaskStatus::InProgress,
            priority: Priority::High,
        };
        let today = date("2026-08-28");
        assert!(task.is_overdue(today));

        // Done tasks are never overdue
        task.status = TaskStatus::Done;
        assert!(!task.is_overdue(today));

        // Due today is not overdue (strictly past)
        task.status = TaskStatus::Todo;
        task.due_date = today;
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_draft_collects_all_errors() {
        let draft = TaskDraft {
            title: "  ".to_string(),
            description: String::new(),
            assigned_to: MemberId::new(""),
            due_date: None,
            estimated_hours: -1.0,
            status: TaskStatus::Todo,
            priority: Priority::Low,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_draft_requires_due_date() {
        let mut draft = valid_draft();
        draft.due_date = None;
        let errors = draft.validate().unwrap_err();
        assert!(errors[0].contains("due_date"));
    }
}
