use std::sync::Arc;
use std::time::Duration;

use arcade_core::ArcadeContent;
use arcade_core::deck::{SecureIdSource, build_deck};
use arcade_core::games::{FlipOutcome, GuessReply, IgnoreReason, MemoryGame, note_text};
use arcade_core::model::{CardId, RoundId};
use storage::repository::SessionStore;
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ArcadeError;
use crate::flip_back::ScheduledFlipBack;
use crate::progress_store::ProgressStore;
use crate::session::{ArcadeSession, MemoryBoard};

/// Pause before a mismatched pair turns back over.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_millis(800);

/// Result of flipping one memory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipResult {
    pub outcome: FlipOutcome,
    /// Present on a mismatch; resolve it once its delay has elapsed.
    pub flip_back: Option<ScheduledFlipBack>,
}

impl FlipResult {
    fn ignored_board() -> Self {
        Self {
            outcome: FlipOutcome::Ignored(IgnoreReason::UnknownCard),
            flip_back: None,
        }
    }
}

/// Drives every mini-game against an `ArcadeSession` and persists progress
/// after each change.
#[derive(Clone)]
pub struct ArcadeService {
    clock: Clock,
    content: Arc<ArcadeContent>,
    progress: ProgressStore,
    flip_back_delay: Duration,
}

impl ArcadeService {
    #[must_use]
    pub fn new(clock: Clock, content: ArcadeContent, store: Arc<dyn SessionStore>) -> Self {
        Self {
            clock,
            content: Arc::new(content),
            progress: ProgressStore::new(store),
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
        }
    }

    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    #[must_use]
    pub fn content(&self) -> &ArcadeContent {
        &self.content
    }

    /// Load this sitting's progress and deal the first memory round.
    ///
    /// Never fails: unreadable progress starts fresh, and a failed initial
    /// write is only logged.
    pub async fn start_session(&self) -> ArcadeSession {
        let progress = self.progress.load().await;
        let session = ArcadeSession {
            progress,
            memory: self.deal(RoundId::new(1)),
        };
        if let Err(err) = self.progress.save(&session.progress).await {
            warn!(error = %err, "initial progress write failed");
        }
        session
    }

    async fn persist(&self, session: &ArcadeSession) -> Result<(), ArcadeError> {
        self.progress.save(&session.progress).await
    }

    fn deal(&self, round: RoundId) -> MemoryBoard {
        let deck = build_deck(
            &self.content.photo_pairs,
            &mut SecureIdSource::new(),
            &mut rand::rng(),
        );
        match deck.and_then(|deck| MemoryGame::new(round, deck)) {
            Ok(game) => {
                debug!(%round, cards = game.cards().len(), "dealt memory round");
                MemoryBoard::Ready(game)
            }
            Err(err) => {
                debug!(%round, error = %err, "memory board unavailable");
                MemoryBoard::Unavailable { round }
            }
        }
    }

    // ─── Love Notes ────────────────────────────────────────────────────────────

    /// Reveal the current note. Returns `false` if it was already showing.
    ///
    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn reveal_note(&self, session: &mut ArcadeSession) -> Result<bool, ArcadeError> {
        let changed = session.progress.notes_cycler(&self.content.notes).reveal();
        if !changed {
            return Ok(false);
        }
        self.persist(session).await?;
        Ok(true)
    }

    /// Move to the next note, hidden.
    ///
    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn next_note(&self, session: &mut ArcadeSession) -> Result<(), ArcadeError> {
        session.progress.notes_cycler(&self.content.notes).advance();
        self.persist(session).await
    }

    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn reset_notes(&self, session: &mut ArcadeSession) -> Result<(), ArcadeError> {
        session.progress.notes_cycler(&self.content.notes).reset();
        self.persist(session).await
    }

    #[must_use]
    pub fn note_text(&self, session: &ArcadeSession) -> String {
        note_text(&self.content.notes, &session.progress.notes).to_owned()
    }

    // ─── Memory Match ──────────────────────────────────────────────────────────

    /// Flip one card of the current round.
    ///
    /// Progress is only written when the flip completes the game.
    ///
    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn flip_card(
        &self,
        session: &mut ArcadeSession,
        id: CardId,
    ) -> Result<FlipResult, ArcadeError> {
        let Some(game) = session.memory.game_mut() else {
            return Ok(FlipResult::ignored_board());
        };

        let outcome = game.flip(id);
        let flip_back = match outcome {
            FlipOutcome::Mismatched(token) => Some(ScheduledFlipBack::new(
                token,
                self.clock.after(self.flip_back_delay),
                self.flip_back_delay,
            )),
            _ => None,
        };

        if let FlipOutcome::Matched {
            completed: true, ..
        } = outcome
        {
            debug!(round = %game.round(), "memory round completed");
            session.progress.set_memory_complete(true);
            self.persist(session).await?;
        }

        Ok(FlipResult { outcome, flip_back })
    }

    /// Apply a due flip-back. Returns `false` if it belonged to an earlier round.
    pub fn resolve_flip_back(
        &self,
        session: &mut ArcadeSession,
        scheduled: &ScheduledFlipBack,
    ) -> bool {
        let resolved = session
            .memory
            .game_mut()
            .is_some_and(|game| game.resolve_flip_back(scheduled.token()));
        if !resolved {
            debug!(round = %scheduled.round(), "dropped stale flip-back");
        }
        resolved
    }

    /// Throw the current round away, clear the memory flag and deal a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn restart_memory(&self, session: &mut ArcadeSession) -> Result<(), ArcadeError> {
        let round = session.memory.round().next();
        session.progress.set_memory_complete(false);
        session.memory = self.deal(round);
        self.persist(session).await
    }

    // ─── Guess ─────────────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn submit_guess(
        &self,
        session: &mut ArcadeSession,
    ) -> Result<GuessReply, ArcadeError> {
        let reply = session
            .progress
            .guess_counter(&self.content.guess_responses)
            .submit();
        self.persist(session).await?;
        Ok(reply)
    }

    /// # Errors
    ///
    /// Returns `ArcadeError` if the progress write fails.
    pub async fn reset_guess(&self, session: &mut ArcadeSession) -> Result<(), ArcadeError> {
        session
            .progress
            .guess_counter(&self.content.guess_responses)
            .reset();
        self.persist(session).await
    }

    #[must_use]
    pub fn guess_text(&self, session: &ArcadeSession) -> Option<String> {
        session
            .progress
            .guess
            .response()
            .and_then(|idx| self.content.guess_responses.get(idx))
            .cloned()
    }
}
