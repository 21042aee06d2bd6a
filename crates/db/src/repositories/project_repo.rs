//! Repository for the `projects` table.

use sqlx::PgPool;
use taskman_core::types::DbId;

use crate::error::RepoError;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_date, due_date, status";

/// Provides CRUD operations for projects.
///
/// Constructed once around a pool handle and shared by cloning; the pool
/// itself is reference counted.
#[derive(Debug, Clone)]
pub struct ProjectRepo {
    pool: PgPool,
}

impl ProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `not_started`.
    /// `created_date` is assigned by the store.
    pub async fn create(&self, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, due_date, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .bind(input.status.unwrap_or_default())
            .fetch_one(&self.pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// Merge `input` onto the stored project and write the result back.
    ///
    /// Absent fields keep their stored values; explicitly null fields are
    /// rejected with a validation error before anything is written.
    /// `id` and `created_date` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, RepoError> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let values = input.merge_onto(&current)?;
        tracing::debug!(project_id = id, empty = input.is_empty(), "Writing merged project");

        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                due_date = $4,
                status = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&values.title)
            .bind(&values.description)
            .bind(values.due_date)
            .bind(values.status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    /// Permanently delete a project by ID.
    ///
    /// Returns the deleted ID, or `None` if no such row existed.
    pub async fn delete(&self, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("DELETE FROM projects WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
