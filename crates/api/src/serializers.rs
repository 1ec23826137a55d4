//! JSON payloads accepted by the API handlers.
//!
//! Payloads share the form field rules (see [`crate::forms`]) so a request
//! rejected on a page is rejected the same way over the API. The read-only
//! `id` field is ignored on input.

use serde::Deserialize;
use sqlx::PgPool;
use tasktrack_core::types::DbId;
use tasktrack_core::validation::{empty_string_as_none, FieldErrors};
use tasktrack_db::models::project::CreateProject;
use tasktrack_db::models::task::CreateTask;
use tasktrack_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::forms::{clean_status, ProjectForm};

/// Body of `POST /api-projects/` and `PUT /api-projects/{id}/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPayload {
    #[serde(flatten)]
    pub fields: ProjectForm,
    pub is_deleted: Option<bool>,
}

impl ProjectPayload {
    pub fn clean(&self) -> Result<CreateProject, FieldErrors> {
        let mut input = self.fields.clean()?;
        input.is_deleted = self.is_deleted;
        Ok(input)
    }
}

/// Body of `POST /api-tasks/` and `PUT /api-tasks/{id}/`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskPayload {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(required(message = "This field is required."))]
    pub description: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub project: Option<DbId>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
}

impl TaskPayload {
    /// Validate fields, then check the referenced project row exists.
    ///
    /// Archived projects still count as existing.
    pub async fn clean(&self, pool: &PgPool) -> AppResult<CreateTask> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => e.into(),
        };

        let mut extra = FieldErrors::new();
        let status = clean_status(self.status.as_deref(), &mut extra);
        if let Some(project_id) = self.project {
            if ProjectRepo::find_by_id_include_archived(pool, project_id)
                .await?
                .is_none()
            {
                extra.push("project", missing_pk(project_id));
            }
        }
        errors.merge(extra);

        match (&self.description, self.project) {
            (Some(description), Some(project_id)) if errors.is_empty() => Ok(CreateTask {
                name: self.name.clone(),
                description: description.clone(),
                project_id,
                status,
            }),
            _ => Err(errors.into()),
        }
    }
}

fn missing_pk(id: DbId) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tasktrack_core::validation::REQUIRED;

    #[test]
    fn project_payload_reads_flat_fields() {
        let payload: ProjectPayload = serde_json::from_value(json!({
            "id": 99,
            "name": "Alpha",
            "description": "d",
            "client": "Acme",
            "is_deleted": true,
        }))
        .unwrap();
        let input = payload.clean().unwrap();
        assert_eq!(input.name, "Alpha");
        assert_eq!(input.is_deleted, Some(true));
        assert_eq!(input.start_date, None);
    }

    #[test]
    fn project_payload_blank_name_is_required() {
        let payload: ProjectPayload = serde_json::from_value(json!({
            "name": "",
            "description": "d",
            "client": "Acme",
        }))
        .unwrap();
        let errors = payload.clean().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("name"), Some(REQUIRED));
    }

    #[test]
    fn project_payload_rejects_bad_end_date() {
        let payload: ProjectPayload = serde_json::from_value(json!({
            "name": "Alpha",
            "description": "d",
            "client": "Acme",
            "end_date": "2024-13-01",
        }))
        .unwrap();
        let errors = payload.clean().unwrap_err();
        assert_eq!(errors.message_for("end_date"), Some("Enter a valid date."));
    }

    #[test]
    fn task_payload_type_errors_fail_deserialization() {
        let result = serde_json::from_value::<TaskPayload>(json!({
            "description": "d",
            "project": "seven",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_pk_message() {
        assert_eq!(missing_pk(42), "Invalid pk \"42\" - object does not exist.");
    }
}
