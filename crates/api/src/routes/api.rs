//! Route definitions for the JSON API.

use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;

use crate::error::AppError;
use crate::handlers::api::{project, task};
use crate::state::AppState;

/// JSON API routes, mounted at the root.
///
/// ```text
/// GET    /api-projects/                 -> project::list
/// POST   /api-projects/                 -> project::create
/// GET    /api-projects/{id}/            -> project::get_by_id
/// PUT    /api-projects/{id}/            -> project::update
/// DELETE /api-projects/{id}/delete/     -> project::delete
/// POST   /api-projects/{id}/restore/    -> project::restore
/// GET    /api-projects/{id}/tasks/      -> project::tasks
///
/// GET    /api-tasks/                    -> task::list
/// POST   /api-tasks/                    -> task::create
/// GET    /api-tasks/{id}/               -> task::get_by_id
/// PUT    /api-tasks/{id}/               -> task::update
/// DELETE /api-tasks/{id}/delete/        -> task::delete
/// ```
///
/// Any other method on these paths gets an enveloped 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api-projects/", get(project::list).post(project::create))
        .route(
            "/api-projects/{id}/",
            get(project::get_by_id).put(project::update),
        )
        .route("/api-projects/{id}/delete/", delete(project::delete))
        .route("/api-projects/{id}/restore/", post(project::restore))
        .route("/api-projects/{id}/tasks/", get(project::tasks))
        .route("/api-tasks/", get(task::list).post(task::create))
        .route("/api-tasks/{id}/", get(task::get_by_id).put(task::update))
        .route("/api-tasks/{id}/delete/", delete(task::delete))
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
