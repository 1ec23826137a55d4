//! Handlers for the `/api-projects/` resource.

use axum::extract::State;
use tasktrack_core::types::DbId;
use tasktrack_db::models::project::Project;
use tasktrack_db::models::task::Task;
use tasktrack_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::{ArchiveFilter, PageParams};
use crate::response::{ApiResponse, Paginated};
use crate::serializers::ProjectPayload;
use crate::state::AppState;

/// GET /api-projects/
///
/// Live projects, or archived ones with `?deleted=true`.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
    ApiQuery(filter): ApiQuery<ArchiveFilter>,
) -> AppResult<ApiResponse<Paginated<Project>>> {
    let query = params.to_query()?;
    let count = ProjectRepo::count(&state.pool, filter.deleted).await?;
    let req = query.resolve(count)?;

    let projects =
        ProjectRepo::list_page(&state.pool, filter.deleted, req.limit(), req.offset()).await?;
    let filters: &[(&str, &str)] = if filter.deleted {
        &[("deleted", "true")]
    } else {
        &[]
    };

    Ok(ApiResponse::ok(
        "Projects retrieved successfully",
        Paginated::new(projects, count, &req, "/api-projects/", filters),
    ))
}

/// POST /api-projects/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProjectPayload>,
) -> AppResult<ApiResponse<Project>> {
    let input = payload.clean()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project, "Project created");
    Ok(ApiResponse::created("Project created successfully", project))
}

/// GET /api-projects/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(ApiResponse::ok("Project retrieved successfully", project))
}

/// PUT /api-projects/{id}/
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(payload): ApiJson<ProjectPayload>,
) -> AppResult<ApiResponse<Project>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    let input = payload.clean()?;
    let project = ProjectRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(ApiResponse::ok("Project updated successfully", project))
}

/// DELETE /api-projects/{id}/delete/
///
/// Archives the project; the row and its tasks stay in storage.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !ProjectRepo::archive(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(project_id = id, "Project archived");
    Ok(ApiResponse::deleted("Project deleted successfully"))
}

/// POST /api-projects/{id}/restore/
pub async fn restore(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<Project>> {
    if !ProjectRepo::restore(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project restored");
    Ok(ApiResponse::ok("Project restored successfully", project))
}

/// GET /api-projects/{id}/tasks/
///
/// A missing project yields an empty page rather than a 404.
pub async fn tasks(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<ApiResponse<Paginated<Task>>> {
    let query = params.to_query()?;
    let count = TaskRepo::count_by_project(&state.pool, id).await?;
    let req = query.resolve(count)?;

    let tasks = TaskRepo::list_by_project_page(&state.pool, id, req.limit(), req.offset()).await?;
    tracing::debug!(project_id = id, count, "Listing project tasks");

    Ok(ApiResponse::ok(
        "Tasks retrieved successfully",
        Paginated::new(tasks, count, &req, &format!("/api-projects/{id}/tasks/"), &[]),
    ))
}
