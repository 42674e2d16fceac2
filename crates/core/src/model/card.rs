use serde::{Deserialize, Serialize};

use crate::model::ids::{CardId, MatchId};

//
// ─── PHOTO PAIRS ───────────────────────────────────────────────────────────────
//

/// Two photos that belong together, plus a label used for alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPair {
    pub label: String,
    pub a: String,
    pub b: String,
}

impl PhotoPair {
    pub fn new(label: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            a: a.into(),
            b: b.into(),
        }
    }
}

//
// ─── CARDS ─────────────────────────────────────────────────────────────────────
//

/// Which photo of its pair a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    A,
    B,
}

/// One face-down tile of the memory grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    match_id: MatchId,
    image: String,
    alt: String,
}

impl Card {
    /// Build the card showing `side` of `pair`.
    #[must_use]
    pub fn from_pair(id: CardId, match_id: MatchId, pair: &PhotoPair, side: CardSide) -> Self {
        let (image, tag) = match side {
            CardSide::A => (&pair.a, "A"),
            CardSide::B => (&pair.b, "B"),
        };
        Self {
            id,
            match_id,
            image: image.clone(),
            alt: format!("Photo {tag} - {}", pair.label),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }
}
