//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskman_core::types::DbId;

use crate::models::task::{CreateTask, Task};

const COLUMNS: &str = "id, title, status";

/// Provides create and read operations for tasks.
#[derive(Debug, Clone)]
pub struct TaskRepo {
    pool: PgPool,
}

impl TaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new task, returning the created row.
    pub async fn create(&self, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, status) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(input.status.unwrap_or_default())
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List all tasks in insertion order.
    pub async fn list(&self) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .fetch_all(&self.pool)
            .await
    }
}
