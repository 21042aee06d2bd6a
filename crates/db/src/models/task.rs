//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskman_core::types::DbId;
use validator::Validate;

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub status: TaskStatus,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    /// Defaults to `not_started` if omitted.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}
