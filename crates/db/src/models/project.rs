//! Project entity model and DTOs.

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;
use tasktrack_core::types::{Date, DbId};

/// A project row from the `projects` table.
///
/// The serialized form is the flat API representation: exactly `id`, `name`,
/// `description`, `client`, `start_date`, `end_date`, `is_deleted`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub client: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_deleted: bool,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub client: String,
    /// Defaults to the current date if omitted.
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Defaults to `false` if omitted.
    pub is_deleted: Option<bool>,
}

/// DTO for updating an existing project.
///
/// `end_date` is written as given (`None` clears it); `start_date` keeps the
/// stored value when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProject {
    pub name: String,
    pub description: String,
    pub client: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl From<CreateProject> for UpdateProject {
    fn from(input: CreateProject) -> Self {
        Self {
            name: input.name,
            description: input.description,
            client: input.client,
            start_date: input.start_date,
            end_date: input.end_date,
        }
    }
}
