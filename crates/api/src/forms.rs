//! Form validation for the server-rendered page flows.
//!
//! Forms are deserialized from `application/x-www-form-urlencoded` bodies with
//! every field as an optional string, then cleaned into the repository DTOs.
//! Blank inputs count as missing. Failures are reported as [`FieldErrors`]
//! sorted by field name.

use serde::{Deserialize, Serialize};
use tasktrack_core::types::DbId;
use tasktrack_core::validation::{
    clean_date, empty_string_as_none, invalid_choice, FieldErrors, DATE_FORMAT,
};
use tasktrack_db::models::project::{CreateProject, Project};
use tasktrack_db::models::status::TaskStatus;
use tasktrack_db::models::task::{CreateTask, UpdateTask};
use validator::Validate;

/// Project create/edit form. Also the field set of the project JSON payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProjectForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "This field is required."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(required(message = "This field is required."))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(
        required(message = "This field is required."),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    pub client: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<String>,
}

impl ProjectForm {
    /// Validate and convert into a create DTO. `is_deleted` is left unset.
    pub fn clean(&self) -> Result<CreateProject, FieldErrors> {
        let mut errors = validation_errors(self);

        let mut date_errors = FieldErrors::new();
        let start_date = clean_date("start_date", self.start_date.as_deref(), &mut date_errors);
        let end_date = clean_date("end_date", self.end_date.as_deref(), &mut date_errors);
        errors.merge(date_errors);

        match (&self.name, &self.description, &self.client) {
            (Some(name), Some(description), Some(client)) if errors.is_empty() => {
                Ok(CreateProject {
                    name: name.clone(),
                    description: description.clone(),
                    client: client.clone(),
                    start_date,
                    end_date,
                    is_deleted: None,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        Self {
            name: Some(project.name.clone()),
            description: Some(project.description.clone()),
            client: Some(project.client.clone()),
            start_date: Some(project.start_date.format(DATE_FORMAT).to_string()),
            end_date: project
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

/// Add-task form. `project` is accepted but overridden by the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TaskForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(required(message = "This field is required."))]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub project: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
}

impl TaskForm {
    /// Validate and convert into a create DTO attached to `project_id`,
    /// whatever the submitted `project` field says.
    pub fn clean_for_project(&self, project_id: DbId) -> Result<CreateTask, FieldErrors> {
        let mut errors = validation_errors(self);

        let mut status_errors = FieldErrors::new();
        let status = clean_status(self.status.as_deref(), &mut status_errors);
        errors.merge(status_errors);

        match &self.description {
            Some(description) if errors.is_empty() => Ok(CreateTask {
                name: self.name.clone(),
                description: description.clone(),
                project_id,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Partial task update submitted from the project task list.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskUpdateForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
}

impl TaskUpdateForm {
    /// Fields left out (or blank) stay `None` and keep their stored value.
    pub fn clean(&self) -> Result<UpdateTask, FieldErrors> {
        let mut errors = validation_errors(self);

        let mut status_errors = FieldErrors::new();
        let status = clean_status(self.status.as_deref(), &mut status_errors);
        errors.merge(status_errors);

        errors.into_result(UpdateTask {
            name: self.name.clone(),
            description: self.description.clone(),
            status,
        })
    }
}

/// Parse an optional status code, recording an invalid-choice error.
pub fn clean_status(value: Option<&str>, errors: &mut FieldErrors) -> Option<TaskStatus> {
    let raw = value?;
    match raw.parse::<TaskStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.push("status", invalid_choice(raw));
            None
        }
    }
}

fn validation_errors(input: &impl Validate) -> FieldErrors {
    match input.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}
