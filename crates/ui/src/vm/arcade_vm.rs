use arcade_core::model::{CardId, MiniGame, ProgressState};
use services::{ArcadeService, ArcadeSession, MemoryBoard};

/// One completion badge on the home screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub id: &'static str,
    pub label: &'static str,
    pub done: bool,
}

impl BadgeVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.done {
            "badge text-bg-success"
        } else {
            "badge text-bg-secondary"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesVm {
    pub text: String,
    pub can_reveal: bool,
    pub revealed_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileVm {
    pub id: CardId,
    pub face_up: bool,
    pub matched: bool,
    pub image: String,
    pub alt: String,
}

impl TileVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.face_up, self.matched) {
            (_, true) => "card-tile matched",
            (true, false) => "card-tile",
            (false, false) => "card-tile face-down",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryVm {
    Unavailable,
    Board {
        tiles: Vec<TileVm>,
        locked: bool,
        won: bool,
        match_count: usize,
        pair_count: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessVm {
    pub count: u32,
    pub response: Option<String>,
}

/// Render-ready snapshot of the whole arcade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcadeVm {
    pub badges: Vec<BadgeVm>,
    pub final_badge: BadgeVm,
    pub final_unlocked: bool,
    pub notes: NotesVm,
    pub memory: MemoryVm,
    pub guess: GuessVm,
}

fn badge_id(game: MiniGame) -> &'static str {
    match game {
        MiniGame::Notes => "badgeNotes",
        MiniGame::Memory => "badgeMemory",
        MiniGame::Guess => "badgeGuess",
    }
}

fn map_badges(progress: &ProgressState) -> Vec<BadgeVm> {
    MiniGame::ALL
        .into_iter()
        .map(|game| BadgeVm {
            id: badge_id(game),
            label: game.label(),
            done: progress.completed.get(game),
        })
        .collect()
}

fn map_memory(board: &MemoryBoard) -> MemoryVm {
    let Some(game) = board.game() else {
        return MemoryVm::Unavailable;
    };
    let tiles = game
        .cards()
        .iter()
        .map(|card| TileVm {
            id: card.id(),
            face_up: game.is_face_up(card.id()),
            matched: game.is_matched(card.id()),
            image: card.image().to_owned(),
            alt: card.alt().to_owned(),
        })
        .collect();

    MemoryVm::Board {
        tiles,
        locked: game.is_locked(),
        won: game.is_complete(),
        match_count: game.match_count(),
        pair_count: game.pair_count(),
    }
}

impl ArcadeVm {
    #[must_use]
    pub fn capture(arcade: &ArcadeService, session: &ArcadeSession) -> Self {
        let progress = session.progress();
        let all_done = progress.all_complete();

        Self {
            badges: map_badges(progress),
            final_badge: BadgeVm {
                id: "badgeFinal",
                label: "Final",
                done: all_done,
            },
            final_unlocked: all_done,
            notes: NotesVm {
                text: arcade.note_text(session),
                can_reveal: !progress.notes.is_revealed(),
                revealed_count: progress.notes.revealed_count(),
            },
            memory: map_memory(session.memory()),
            guess: GuessVm {
                count: progress.guess.count(),
                response: arcade.guess_text(session),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arcade_core::ArcadeContent;
    use arcade_core::games::HIDDEN_NOTE_TEXT;
    use services::Clock;
    use storage::repository::InMemorySessionStore;

    use super::*;

    fn arcade(content: ArcadeContent) -> ArcadeService {
        ArcadeService::new(
            Clock::default(),
            content,
            Arc::new(InMemorySessionStore::new()),
        )
    }

    #[tokio::test]
    async fn fresh_session_has_hidden_note_and_sixteen_face_down_tiles() {
        let arcade = arcade(ArcadeContent::builtin());
        let session = arcade.start_session().await;
        let vm = ArcadeVm::capture(&arcade, &session);

        assert_eq!(vm.notes.text, HIDDEN_NOTE_TEXT);
        assert!(vm.notes.can_reveal);
        assert!(!vm.final_unlocked);
        assert!(vm.badges.iter().all(|b| b.class() == "badge text-bg-secondary"));
        let MemoryVm::Board { tiles, won, .. } = vm.memory else {
            panic!("expected a board");
        };
        assert_eq!(tiles.len(), 16);
        assert!(!won);
        assert!(tiles.iter().all(|t| t.class() == "card-tile face-down"));
    }

    #[tokio::test]
    async fn flipped_tile_is_face_up() {
        let arcade = arcade(ArcadeContent::builtin());
        let mut session = arcade.start_session().await;
        let first = session.memory().game().unwrap().cards()[0].id();
        arcade.flip_card(&mut session, first).await.unwrap();

        let vm = ArcadeVm::capture(&arcade, &session);
        let MemoryVm::Board { tiles, .. } = vm.memory else {
            panic!("expected a board");
        };
        let tile = tiles.iter().find(|t| t.id == first).unwrap();
        assert_eq!(tile.class(), "card-tile");
    }

    #[tokio::test]
    async fn no_pairs_maps_to_unavailable() {
        let arcade = arcade(ArcadeContent::builtin().with_photo_pairs(Vec::new()));
        let session = arcade.start_session().await;
        let vm = ArcadeVm::capture(&arcade, &session);
        assert_eq!(vm.memory, MemoryVm::Unavailable);
    }

    #[tokio::test]
    async fn guess_badge_turns_green_after_three_guesses() {
        let arcade = arcade(ArcadeContent::builtin());
        let mut session = arcade.start_session().await;
        for _ in 0..3 {
            arcade.submit_guess(&mut session).await.unwrap();
        }

        let vm = ArcadeVm::capture(&arcade, &session);
        let guess = vm.badges.iter().find(|b| b.id == "badgeGuess").unwrap();
        assert!(guess.done);
        assert_eq!(vm.guess.count, 3);
        assert!(vm.guess.response.is_some());
        assert!(!vm.final_badge.done);
    }
}
