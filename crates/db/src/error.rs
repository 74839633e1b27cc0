use mcquiz_core::error::CoreError;

/// Failure of a save contract: either the entity was rejected by a domain
/// rule before anything was written, or the database failed.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
