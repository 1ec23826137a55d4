//! Handlers for the `/api-tasks/` resource.

use axum::extract::State;
use tasktrack_core::types::DbId;
use tasktrack_db::models::task::Task;
use tasktrack_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::PageParams;
use crate::response::{ApiResponse, Paginated};
use crate::serializers::TaskPayload;
use crate::state::AppState;

/// GET /api-tasks/
///
/// Tasks of archived projects are left out.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<ApiResponse<Paginated<Task>>> {
    let query = params.to_query()?;
    let count = TaskRepo::count_live(&state.pool).await?;
    let req = query.resolve(count)?;

    let tasks = TaskRepo::list_live_page(&state.pool, req.limit(), req.offset()).await?;
    Ok(ApiResponse::ok(
        "Tasks retrieved successfully",
        Paginated::new(tasks, count, &req, "/api-tasks/", &[]),
    ))
}

/// POST /api-tasks/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> AppResult<ApiResponse<Task>> {
    let input = payload.clean(&state.pool).await?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok(ApiResponse::created("Task created successfully", task))
}

/// GET /api-tasks/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(ApiResponse::ok("Task retrieved successfully", task))
}

/// PUT /api-tasks/{id}/
///
/// `description` and `project` are required. An omitted `name` or `status`
/// keeps its stored value.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> AppResult<ApiResponse<Task>> {
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;

    let input = payload.clean(&state.pool).await?;
    let task = TaskRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, status = %task.status, "Task updated");
    Ok(ApiResponse::ok("Task updated successfully", task))
}

/// DELETE /api-tasks/{id}/delete/
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<ApiResponse<()>> {
    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Task", id));
    }
    tracing::info!(task_id = id, "Task deleted");
    Ok(ApiResponse::deleted("Task deleted successfully"))
}
