//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// ```text
/// GET    /tasks/        -> list
/// POST   /tasks/        -> create
/// GET    /tasks/{id}/   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(task::list).post(task::create);
    let member = get(task::get_by_id);

    Router::new()
        .route("/tasks", collection.clone())
        .route("/tasks/", collection)
        .route("/tasks/{id}", member.clone())
        .route("/tasks/{id}/", member)
}
