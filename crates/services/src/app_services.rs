use std::sync::Arc;
use std::time::Duration;

use arcade_core::ArcadeContent;
use storage::repository::Storage;

use crate::Clock;
use crate::arcade_service::ArcadeService;
use crate::error::AppServicesError;

/// Assembles the app-facing arcade service on top of a storage backend.
#[derive(Clone)]
pub struct AppServices {
    arcade: Arc<ArcadeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        flip_back_delay: Duration,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, flip_back_delay))
    }

    /// Build services over an existing storage backend with the built-in content.
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, flip_back_delay: Duration) -> Self {
        let arcade = ArcadeService::new(
            clock,
            ArcadeContent::builtin(),
            Arc::clone(&storage.session),
        )
        .with_flip_back_delay(flip_back_delay);
        Self {
            arcade: Arc::new(arcade),
        }
    }

    #[must_use]
    pub fn arcade(&self) -> Arc<ArcadeService> {
        Arc::clone(&self.arcade)
    }
}
