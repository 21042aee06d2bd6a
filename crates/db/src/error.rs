use taskman_core::error::CoreError;

/// Failure of a repository operation that does more than one statement.
///
/// Single-statement operations return [`sqlx::Error`] directly.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The merged record broke a domain rule; nothing was written.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store rejected or failed the statement.
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}
