//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskman_core::error::CoreError;
use taskman_db::models::task::{CreateTask, Task};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{PositiveId, ValidatedJson};
use crate::state::AppState;

/// Request body for task creation: `{"new_task": {...}}`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewTaskBody {
    #[validate(nested)]
    pub new_task: CreateTask,
}

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<NewTaskBody>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = state
        .tasks
        .create(&body.new_task)
        .await
        .map_err(|err| AppError::store_rejection("Invalid creation params.", err))?;
    tracing::info!(task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> AppResult<Json<Task>> {
    let task = state
        .tasks
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}
