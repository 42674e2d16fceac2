//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ArcadeService` when progress cannot be written.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArcadeError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
