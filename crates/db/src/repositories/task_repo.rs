//! Repository for the `tasks` table.

use sqlx::PgPool;
use tasktrack_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, project_id, status";

/// Same columns qualified for queries that join `projects`.
const JOINED_COLUMNS: &str = "t.id, t.name, t.description, t.project_id, t.status";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `TODO`.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (name, description, project_id, status)
             VALUES ($1, $2, $3, COALESCE($4, 'TODO'::task_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.project_id)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a task by ID, regardless of its project's archive flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tasks belonging to a project, in storage order.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Count tasks whose project is not archived.
    pub async fn count_live(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks t
             JOIN projects p ON p.id = t.project_id
             WHERE p.is_deleted = FALSE",
        )
        .fetch_one(pool)
        .await
    }

    /// One page of tasks whose project is not archived.
    pub async fn list_live_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM tasks t
             JOIN projects p ON p.id = t.project_id
             WHERE p.is_deleted = FALSE
             ORDER BY t.id LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_project_page(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a task's description and project.
    ///
    /// `name` and `status` are optional on input; a `None` keeps the stored
    /// value. Returns `None` if no row exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                name = COALESCE($2, name),
                description = $3,
                project_id = $4,
                status = COALESCE($5, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.project_id)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a task. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
