use std::sync::Arc;

use arcade_core::model::ProgressState;
use storage::repository::SessionStore;
use tracing::{debug, warn};

use crate::error::ArcadeError;

/// Key the progress record is stored under.
pub const STORAGE_KEY: &str = "valentineArcade_session_v1";

/// JSON codec for `ProgressState` on top of a `SessionStore`.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn SessionStore>,
    key: String,
}

impl ProgressStore {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_owned(),
        }
    }

    /// Load the stored record, falling back to a fresh state on any failure.
    pub async fn load(&self) -> ProgressState {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored progress, starting fresh");
                return ProgressState::default();
            }
            Err(err) => {
                warn!(error = %err, "progress read failed, starting fresh");
                return ProgressState::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(error = %err, "stored progress is unreadable, starting fresh");
            ProgressState::default()
        })
    }

    /// Write the record.
    ///
    /// # Errors
    ///
    /// Returns `ArcadeError` if encoding or the store write fails.
    pub async fn save(&self, state: &ProgressState) -> Result<(), ArcadeError> {
        let raw = serde_json::to_string(state)?;
        self.store.put(&self.key, &raw).await?;
        Ok(())
    }
}
