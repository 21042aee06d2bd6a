//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes for `/projects`, with and without a trailing slash.
///
/// ```text
/// GET    /projects/        -> list
/// POST   /projects/        -> create
/// GET    /projects/{id}/   -> get_by_id
/// PUT    /projects/{id}/   -> update
/// DELETE /projects/{id}/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(project::list).post(project::create);
    let member = get(project::get_by_id)
        .put(project::update)
        .delete(project::delete);

    Router::new()
        .route("/projects", collection.clone())
        .route("/projects/", collection)
        .route("/projects/{id}", member.clone())
        .route("/projects/{id}/", member)
}
