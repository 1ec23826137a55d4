//! Repository for the `projects` table.

use sqlx::PgPool;
use tasktrack_core::types::{Date, DbId};

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, client, start_date, end_date, is_deleted";

/// Provides CRUD and archive operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `start_date` defaults to today and `is_deleted` to `false`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, client, start_date, end_date, is_deleted)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE), $5, COALESCE($6, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.client)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_deleted)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID. Excludes archived rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, including archived rows.
    pub async fn find_by_id_include_archived(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ongoing projects: not archived and not yet ended as of `today`.
    pub async fn list_active(pool: &PgPool, today: Date) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE is_deleted = FALSE AND (end_date IS NULL OR end_date > $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(today)
            .fetch_all(pool)
            .await
    }

    /// Count projects that are (or are not) archived.
    pub async fn count(pool: &PgPool, archived: bool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE is_deleted = $1")
            .bind(archived)
            .fetch_one(pool)
            .await
    }

    /// One page of projects that are (or are not) archived, in storage order.
    pub async fn list_page(
        pool: &PgPool,
        archived: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE is_deleted = $1
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(archived)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a project's editable fields.
    ///
    /// `start_date` keeps its stored value when `None`. Archived rows can be
    /// updated too. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                description = $3,
                client = $4,
                start_date = COALESCE($5, start_date),
                end_date = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.client)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Archive (soft-delete) a project. Returns `true` if a live row was archived.
    ///
    /// Tasks are left untouched.
    pub async fn archive(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET is_deleted = TRUE WHERE id = $1 AND is_deleted = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore an archived project. Returns `true` if a row was restored.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET is_deleted = FALSE WHERE id = $1 AND is_deleted = TRUE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project and, by cascade, its tasks.
    /// Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
