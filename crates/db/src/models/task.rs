//! Task entity model and DTOs.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;
use tasktrack_core::types::DbId;

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
///
/// Serializes as `id`, `name`, `description`, `project`, `status`; the
/// foreign key column is exposed under the name `project`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub name: Option<String>,
    pub description: String,
    #[serde(rename = "project")]
    pub project_id: DbId,
    pub status: TaskStatus,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(""))
    }
}

/// DTO for creating a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTask {
    pub name: Option<String>,
    pub description: String,
    pub project_id: DbId,
    /// Defaults to `TODO` if omitted.
    pub status: Option<TaskStatus>,
}

/// DTO for a partial task update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}
