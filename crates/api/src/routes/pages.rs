//! Route definitions for the server-rendered pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages::{project, task};
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET  /                          -> project::list
/// GET  /projects/                 -> project::list
/// GET  /projects/new/             -> project::new_form
/// POST /projects/new/             -> project::create
/// GET  /projects/{id}/            -> project::detail
/// GET  /projects/{id}/edit/       -> project::edit_form
/// POST /projects/{id}/edit/       -> project::update
/// POST /project/{id}/delete/      -> project::delete
///
/// GET  /project/{id}/tasks/       -> task::list
/// GET  /project/{id}/add_task/    -> task::new_form
/// POST /project/{id}/add_task/    -> task::create
/// POST /tasks/update/{id}/        -> task::update
/// POST /tasks/delete/{id}/        -> task::delete
/// POST /task/{id}/delete/         -> task::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/projects/", get(project::list))
        .route("/projects/new/", get(project::new_form).post(project::create))
        .route("/projects/{id}/", get(project::detail))
        .route(
            "/projects/{id}/edit/",
            get(project::edit_form).post(project::update),
        )
        .route("/project/{id}/delete/", post(project::delete))
        .route("/project/{id}/tasks/", get(task::list))
        .route(
            "/project/{id}/add_task/",
            get(task::new_form).post(task::create),
        )
        .route("/tasks/update/{id}/", post(task::update))
        .route("/tasks/delete/{id}/", post(task::delete))
        .route("/task/{id}/delete/", post(task::delete))
}
