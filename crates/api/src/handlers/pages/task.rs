//! Page handlers for tasks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use tasktrack_core::types::DbId;
use tasktrack_core::validation::FieldErrors;
use tasktrack_db::models::project::Project;
use tasktrack_db::repositories::TaskRepo;
use tera::Context;

use super::project::load_project;
use super::{status_choices, task_rows, Ack};
use crate::error::{AppError, PageResult};
use crate::forms::{TaskForm, TaskUpdateForm};
use crate::state::AppState;
use crate::templates::{PROJECT_TASKS, TASK_FORM};

fn render_form(
    state: &AppState,
    project: &Project,
    form: &TaskForm,
    errors: &FieldErrors,
) -> PageResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("project", project);
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("statuses", &status_choices());
    Ok(state.templates.render(TASK_FORM, &ctx)?)
}

/// GET /project/{id}/tasks/
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> PageResult<Html<String>> {
    let project = load_project(&state, project_id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;

    let mut ctx = Context::new();
    ctx.insert("project", &project);
    ctx.insert("tasks", &task_rows(&tasks));
    ctx.insert("statuses", &status_choices());
    Ok(state.templates.render(PROJECT_TASKS, &ctx)?)
}

/// GET /project/{id}/add_task/
pub async fn new_form(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> PageResult<Html<String>> {
    let project = load_project(&state, project_id).await?;
    render_form(&state, &project, &TaskForm::default(), &FieldErrors::new())
}

/// POST /project/{id}/add_task/
///
/// The task is attached to the project in the path; a `project` field in the
/// body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Form(form): Form<TaskForm>,
) -> PageResult<Response> {
    let project = load_project(&state, project_id).await?;

    let input = match form.clean_for_project(project.id) {
        Ok(input) => input,
        Err(errors) => {
            let page = render_form(&state, &project, &form, &errors)?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id, "Task created");
    Ok(Redirect::to(&format!("/project/{project_id}/tasks/")).into_response())
}

/// POST /tasks/update/{id}/
///
/// Partial update: only non-blank fields overwrite stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<TaskUpdateForm>,
) -> PageResult<Response> {
    if TaskRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::not_found("Task", id).into());
    }

    let input = match form.clean() {
        Ok(input) => input,
        Err(errors) => {
            return Ok((StatusCode::BAD_REQUEST, Json(Ack::rejected(errors))).into_response());
        }
    };

    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = task.id, status = %task.status, "Task updated");
    Ok(Json(Ack::ok()).into_response())
}

/// POST /tasks/delete/{id}/ and POST /task/{id}/delete/
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> PageResult<Json<Ack>> {
    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Task", id).into());
    }
    tracing::info!(task_id = id, "Task deleted");
    Ok(Json(Ack::ok()))
}
