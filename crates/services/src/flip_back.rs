use std::time::Duration;

use arcade_core::games::FlipBack;
use arcade_core::model::RoundId;
use chrono::{DateTime, Utc};

/// A mismatch flip-back waiting for its delay to pass.
///
/// Resolving it after the memory game restarted is a no-op: the token is bound
/// to the round that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledFlipBack {
    token: FlipBack,
    due_at: DateTime<Utc>,
    delay: Duration,
}

impl ScheduledFlipBack {
    #[must_use]
    pub fn new(token: FlipBack, due_at: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            token,
            due_at,
            delay,
        }
    }

    #[must_use]
    pub fn token(&self) -> FlipBack {
        self.token
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.token.round()
    }

    #[must_use]
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep until the flip-back is due.
    pub async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
