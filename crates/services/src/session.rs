use arcade_core::games::MemoryGame;
use arcade_core::model::{ProgressState, RoundId};

/// Memory screen state: a live round, or nothing to play with.
#[derive(Debug, Clone)]
pub enum MemoryBoard {
    /// No photo pairs are configured.
    Unavailable { round: RoundId },
    Ready(MemoryGame),
}

impl MemoryBoard {
    #[must_use]
    pub fn round(&self) -> RoundId {
        match self {
            MemoryBoard::Unavailable { round } => *round,
            MemoryBoard::Ready(game) => game.round(),
        }
    }

    #[must_use]
    pub fn game(&self) -> Option<&MemoryGame> {
        match self {
            MemoryBoard::Ready(game) => Some(game),
            MemoryBoard::Unavailable { .. } => None,
        }
    }

    pub(crate) fn game_mut(&mut self) -> Option<&mut MemoryGame> {
        match self {
            MemoryBoard::Ready(game) => Some(game),
            MemoryBoard::Unavailable { .. } => None,
        }
    }
}

/// Everything one sitting mutates: persisted progress plus the live memory round.
///
/// Owned by the top-level controller and passed by `&mut` to `ArcadeService`.
#[derive(Debug, Clone)]
pub struct ArcadeSession {
    pub(crate) progress: ProgressState,
    pub(crate) memory: MemoryBoard,
}

impl ArcadeSession {
    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn memory(&self) -> &MemoryBoard {
        &self.memory
    }

    #[must_use]
    pub fn all_complete(&self) -> bool {
        self.progress.all_complete()
    }
}
