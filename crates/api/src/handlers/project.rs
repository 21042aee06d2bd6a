//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskman_core::error::CoreError;
use taskman_core::types::DbId;
use taskman_db::error::RepoError;
use taskman_db::models::project::{CreateProject, Project, UpdateProject};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, PositiveId, ValidatedJson};
use crate::state::AppState;

/// Request body for project creation: `{"new_project": {...}}`.
#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectBody {
    #[validate(nested)]
    pub new_project: CreateProject,
}

/// Request body for a partial update: `{"project_update": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ProjectUpdateBody {
    pub project_update: UpdateProject,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list().await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<NewProjectBody>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state
        .projects
        .create(&body.new_project)
        .await
        .map_err(|err| AppError::store_rejection("Invalid creation params.", err))?;
    tracing::info!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
    AppJson(body): AppJson<ProjectUpdateBody>,
) -> AppResult<Json<Project>> {
    let project = state
        .projects
        .update(id, &body.project_update)
        .await
        .map_err(|err| match err {
            RepoError::Store(err) => AppError::store_rejection("Invalid update params.", err),
            other => other.into(),
        })?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Responds with the deleted id.
pub async fn delete(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> AppResult<Json<DbId>> {
    let deleted = state.projects.delete(id).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = deleted, "Project deleted");
    Ok(Json(deleted))
}
