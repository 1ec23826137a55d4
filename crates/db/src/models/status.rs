//! Task status enum mapping to the `task_status` PostgreSQL enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a task sits in its workflow.
///
/// A flat enumeration: any status may be replaced by any other at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "task_status", rename_all = "UPPERCASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    Wip,
    OnHold,
    Done,
}

impl TaskStatus {
    /// Every status, in display order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::Wip,
        TaskStatus::OnHold,
        TaskStatus::Done,
    ];

    /// Stored and serialized code.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Wip => "WIP",
            TaskStatus::OnHold => "ONHOLD",
            TaskStatus::Done => "DONE",
        }
    }

    /// Human-readable label shown on pages.
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::Wip => "Work In Progress",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
