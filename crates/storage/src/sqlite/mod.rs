use std::sync::Arc;
use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::repository::{SessionStore, Storage};

mod migrate;
mod session_repo;

/// `SQLite`-backed session store.
///
/// Every connection opens a new sitting: rows written by earlier sittings are
/// purged on connect, so progress never carries over even when the database
/// is a file.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
    sitting: Uuid,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// In-memory databases exist per connection, so the pool must hold exactly one forever.
fn is_memory_url(database_url: &str) -> bool {
    database_url == "sqlite::memory:" || database_url.contains("mode=memory")
}

impl SqliteSessionStore {
    /// Connect to `SQLite` using the given URL and start a fresh sitting.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection, migrations, or the purge of
    /// earlier sittings fail.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let memory = is_memory_url(database_url);
        let options = if memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = options
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    if !memory {
                        sqlx::query("PRAGMA journal_mode = WAL;")
                            .execute(&mut *conn)
                            .await?;
                    }
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;

        migrate::run_migrations(&pool).await?;

        let sitting = Uuid::new_v4();
        let purged = sqlx::query("DELETE FROM session_entries WHERE sitting_id <> ?1")
            .bind(sitting.to_string())
            .execute(&pool)
            .await?
            .rows_affected();
        debug!(%sitting, purged, "opened sqlite session store");

        Ok(Self { pool, sitting })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Identifier of the sitting this store reads and writes.
    #[must_use]
    pub fn sitting(&self) -> Uuid {
        self.sitting
    }
}

impl Storage {
    /// Build a `Storage` backed by `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if connection or migrations cannot be
    /// completed.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let store = SqliteSessionStore::connect(database_url).await?;
        let session: Arc<dyn SessionStore> = Arc::new(store);
        Ok(Self { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteSessionStore>();
    }

    #[test]
    fn detects_memory_urls() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://arcade?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite:///tmp/arcade.sqlite3"));
    }
}
