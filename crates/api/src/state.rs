use taskman_db::repositories::{ProjectRepo, TaskRepo};
use taskman_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Repositories are built once here and handed to handlers explicitly.
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, read directly only by `/health`.
    pub pool: DbPool,
    pub projects: ProjectRepo,
    pub tasks: TaskRepo,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            projects: ProjectRepo::new(pool.clone()),
            tasks: TaskRepo::new(pool.clone()),
            pool,
        }
    }

    /// `true` when the store answers a trivial query.
    pub async fn store_reachable(&self) -> bool {
        taskman_db::health_check(&self.pool).await.is_ok()
    }
}
