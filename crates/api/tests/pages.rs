//! Integration tests for the server-rendered page flows.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, create_project, create_task, delete, get, location, post_form,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Project list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_lists_only_active_projects(pool: PgPool) {
    create_project(&pool, "Visible Project").await;
    let archived = create_project(&pool, "Archived Project").await;
    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api-projects/{archived}/delete/")).await;

    sqlx::query(
        "INSERT INTO projects (name, description, client, end_date)
         VALUES ('Finished Project', 'd', 'c', CURRENT_DATE - 1)",
    )
    .execute(&pool)
    .await
    .unwrap();

    for uri in ["/", "/projects/"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Visible Project"));
        assert!(!html.contains("Archived Project"));
        assert!(!html.contains("Finished Project"));
    }
}

// ---------------------------------------------------------------------------
// Project create / edit / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_redirects_home(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/projects/new/",
        "name=Alpha&description=d&client=Acme&start_date=&end_date=",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE name = 'Alpha'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_project_form_rerenders_with_errors(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/projects/new/", "name=Alpha&description=&client=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains("value=\"Alpha\""));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_project_form_and_submit(pool: PgPool) {
    let id = create_project(&pool, "Before").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/projects/{id}/edit/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("value=\"Before\""));

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/projects/{id}/edit/"),
        "name=After&description=d2&client=Globex",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let name: String = sqlx::query_scalar("SELECT name FROM projects WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "After");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_page_archives(pool: PgPool) {
    let id = create_project(&pool, "Doomed").await;
    let task = create_task(&pool, id, "Survivor").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/project/{id}/delete/"), "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"success": true}));

    let is_deleted: bool = sqlx::query_scalar("SELECT is_deleted FROM projects WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(is_deleted);

    // Tasks survive the archive.
    let app = common::build_test_app(pool.clone());
    assert_eq!(
        get(app, &format!("/api-tasks/{task}/")).await.status(),
        StatusCode::OK
    );

    // Archived projects stay reachable by id on pages.
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app, &format!("/projects/{id}/")).await.status(),
        StatusCode::OK
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_project_pages_return_404(pool: PgPool) {
    for uri in [
        "/projects/999999/",
        "/projects/999999/edit/",
        "/project/999999/tasks/",
        "/project/999999/add_task/",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let app = common::build_test_app(pool);
    let response = post_form(app, "/project/999999/delete/", "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_task_forces_path_project(pool: PgPool) {
    let target = create_project(&pool, "Target").await;
    let other = create_project(&pool, "Other").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/project/{target}/add_task/"),
        &format!("name=Write&description=docs&project={other}&status=WIP"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/project/{target}/tasks/"));

    let project_id: i64 = sqlx::query_scalar("SELECT project_id FROM tasks WHERE name = 'Write'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(project_id, target);

    let app = common::build_test_app(pool);
    let html = body_text(get(app, &format!("/project/{target}/tasks/")).await).await;
    assert!(html.contains("docs"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_task_without_description_rerenders(pool: PgPool) {
    let project = create_project(&pool, "P").await;
    let app = common::build_test_app(pool);
    let response = post_form(app, &format!("/project/{project}/add_task/"), "name=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("This field is required."));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_task_update_keeps_blank_fields(pool: PgPool) {
    let project = create_project(&pool, "P").await;
    let task = create_task(&pool, project, "Keep Me").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/tasks/update/{task}/"),
        "name=&description=&status=DONE",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"success": true}));

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api-tasks/{task}/")).await).await;
    assert_eq!(json["data"]["name"], "Keep Me");
    assert_eq!(json["data"]["description"], "t");
    assert_eq!(json["data"]["status"], "DONE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_update_with_bad_status_returns_400(pool: PgPool) {
    let project = create_project(&pool, "P").await;
    let task = create_task(&pool, project, "T").await;

    let app = common::build_test_app(pool);
    let response = post_form(app, &format!("/tasks/update/{task}/"), "status=SOON").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "status");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_delete_routes(pool: PgPool) {
    let project = create_project(&pool, "P").await;
    let first = create_task(&pool, project, "one").await;
    let second = create_task(&pool, project, "two").await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/tasks/delete/{first}/"), "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/task/{second}/delete/"), "").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/tasks/delete/{first}/"), "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
