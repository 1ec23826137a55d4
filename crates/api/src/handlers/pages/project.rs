//! Page handlers for projects.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use chrono::Utc;
use tasktrack_core::types::DbId;
use tasktrack_core::validation::FieldErrors;
use tasktrack_db::models::project::Project;
use tasktrack_db::repositories::{ProjectRepo, TaskRepo};
use tera::Context;

use super::{task_rows, Ack};
use crate::error::{AppError, PageResult};
use crate::forms::ProjectForm;
use crate::state::AppState;
use crate::templates::{PROJECT_DETAIL, PROJECT_FORM, PROJECT_LIST};

/// Look up a project by id, archived or not.
pub(super) async fn load_project(state: &AppState, id: DbId) -> PageResult<Project> {
    ProjectRepo::find_by_id_include_archived(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id).into())
}

fn render_form(
    state: &AppState,
    title: &str,
    action: &str,
    form: &ProjectForm,
    errors: &FieldErrors,
) -> PageResult<Html<String>> {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx.insert("action", action);
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    Ok(state.templates.render(PROJECT_FORM, &ctx)?)
}

/// GET / and GET /projects/
///
/// Active projects: not archived and not past their end date.
pub async fn list(State(state): State<AppState>) -> PageResult<Html<String>> {
    let today = Utc::now().date_naive();
    let projects = ProjectRepo::list_active(&state.pool, today).await?;

    let mut ctx = Context::new();
    ctx.insert("projects", &projects);
    Ok(state.templates.render(PROJECT_LIST, &ctx)?)
}

/// GET /projects/new/
pub async fn new_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    render_form(
        &state,
        "New project",
        "/projects/new/",
        &ProjectForm::default(),
        &FieldErrors::new(),
    )
}

/// POST /projects/new/
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> PageResult<Response> {
    let input = match form.clean() {
        Ok(input) => input,
        Err(errors) => {
            let page = render_form(&state, "New project", "/projects/new/", &form, &errors)?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project, "Project created");
    Ok(Redirect::to("/").into_response())
}

/// GET /projects/{id}/
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Html<String>> {
    let project = load_project(&state, id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, id).await?;

    let mut ctx = Context::new();
    ctx.insert("project", &project);
    ctx.insert("tasks", &task_rows(&tasks));
    Ok(state.templates.render(PROJECT_DETAIL, &ctx)?)
}

/// GET /projects/{id}/edit/
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Html<String>> {
    let project = load_project(&state, id).await?;
    render_form(
        &state,
        &format!("Edit {project}"),
        &format!("/projects/{id}/edit/"),
        &ProjectForm::from(&project),
        &FieldErrors::new(),
    )
}

/// POST /projects/{id}/edit/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ProjectForm>,
) -> PageResult<Response> {
    let project = load_project(&state, id).await?;

    let input = match form.clean() {
        Ok(input) => input,
        Err(errors) => {
            let page = render_form(
                &state,
                &format!("Edit {project}"),
                &format!("/projects/{id}/edit/"),
                &form,
                &errors,
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    ProjectRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Redirect::to("/").into_response())
}

/// POST /project/{id}/delete/
///
/// Archives the project. Its tasks are kept.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> PageResult<Json<Ack>> {
    load_project(&state, id).await?;
    if ProjectRepo::archive(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project archived");
    }
    Ok(Json(Ack::ok()))
}
