pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list, create
/// /projects/{id}            get, update, delete
///
/// /tasks                    list, create
/// /tasks/{id}               get
/// ```
///
/// Every path is also served with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(task::router())
}
