//! Server-rendered page handlers.
//!
//! Page lookups reach archived projects by id; only the listings hide them.
//! In-page buttons (archive, task update, task delete) post to endpoints that
//! answer with a small `{"success": ...}` JSON body instead of redirecting.

pub mod project;
pub mod task;

use serde::Serialize;
use tasktrack_core::validation::FieldErrors;
use tasktrack_db::models::status::TaskStatus;
use tasktrack_db::models::task::Task;

/// JSON acknowledgement for in-page actions.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: None,
        }
    }

    pub fn rejected(errors: FieldErrors) -> Self {
        Self {
            success: false,
            errors: Some(errors),
        }
    }
}

/// A status option for `<select>` inputs.
#[derive(Debug, Serialize)]
pub struct StatusChoice {
    pub code: &'static str,
    pub label: &'static str,
}

pub fn status_choices() -> Vec<StatusChoice> {
    TaskStatus::ALL
        .into_iter()
        .map(|s| StatusChoice {
            code: s.as_str(),
            label: s.label(),
        })
        .collect()
}

/// A task as shown in page listings, with its human-readable status.
#[derive(Debug, Serialize)]
pub struct TaskRow<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub status_label: &'static str,
}

pub fn task_rows(tasks: &[Task]) -> Vec<TaskRow<'_>> {
    tasks
        .iter()
        .map(|task| TaskRow {
            task,
            status_label: task.status.label(),
        })
        .collect()
}
