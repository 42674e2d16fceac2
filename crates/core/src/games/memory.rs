use std::collections::HashSet;

use crate::error::DeckError;
use crate::model::{Card, CardId, MatchId, RoundId};

/// Why a flip was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Locked,
    AlreadyMatched,
    AlreadyFlipped,
    UnknownCard,
}

/// Token for a pending mismatch flip-back, bound to the round that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipBack {
    round: RoundId,
}

impl FlipBack {
    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }
}

/// Result of a single `flip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored(IgnoreReason),
    /// First card of a pair is now face up.
    Revealed,
    Matched { pair: MatchId, completed: bool },
    /// The two face-up cards differ; the board stays locked until the flip-back resolves.
    Mismatched(FlipBack),
}

/// Card-matching state machine for one round.
#[derive(Debug, Clone)]
pub struct MemoryGame {
    round: RoundId,
    deck: Vec<Card>,
    pair_count: usize,
    flipped: Vec<CardId>,
    matched: HashSet<CardId>,
    match_count: usize,
    locked: bool,
}

impl MemoryGame {
    /// Start a round over an already shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::NoPairs` for an empty deck.
    pub fn new(round: RoundId, deck: Vec<Card>) -> Result<Self, DeckError> {
        if deck.is_empty() {
            return Err(DeckError::NoPairs);
        }
        let pair_count = deck
            .iter()
            .map(Card::match_id)
            .collect::<HashSet<_>>()
            .len();

        Ok(Self {
            round,
            deck,
            pair_count,
            flipped: Vec::with_capacity(2),
            matched: HashSet::new(),
            match_count: 0,
            locked: false,
        })
    }

    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if self.locked {
            return FlipOutcome::Ignored(IgnoreReason::Locked);
        }
        if self.matched.contains(&id) {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if self.flipped.contains(&id) {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped);
        }
        if self.card(id).is_none() {
            return FlipOutcome::Ignored(IgnoreReason::UnknownCard);
        }

        self.flipped.push(id);
        let &[first, second] = self.flipped.as_slice() else {
            return FlipOutcome::Revealed;
        };

        // Both ids were checked against the deck above.
        let (Some(a), Some(b)) = (self.card(first), self.card(second)) else {
            self.flipped.clear();
            return FlipOutcome::Ignored(IgnoreReason::UnknownCard);
        };

        if a.match_id() == b.match_id() {
            let pair = a.match_id();
            self.matched.insert(first);
            self.matched.insert(second);
            self.flipped.clear();
            self.match_count += 1;
            FlipOutcome::Matched {
                pair,
                completed: self.is_complete(),
            }
        } else {
            self.locked = true;
            FlipOutcome::Mismatched(FlipBack { round: self.round })
        }
    }

    /// Turn the mismatched pair back over and unlock.
    ///
    /// Returns `false` without touching the board when the token belongs to
    /// another round or nothing is pending.
    pub fn resolve_flip_back(&mut self, token: FlipBack) -> bool {
        if token.round != self.round || !self.locked {
            return false;
        }
        self.flipped.clear();
        self.locked = false;
        true
    }

    #[must_use]
    pub fn round(&self) -> RoundId {
        self.round
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.is_matched(id) || self.flipped.contains(&id)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.match_count == self.pair_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardSide, PhotoPair};

    /// Deck laid out unshuffled: pair n occupies ids 2n and 2n+1.
    fn ordered_deck(pairs: u32) -> Vec<Card> {
        (0..pairs)
            .flat_map(|n| {
                let pair = PhotoPair::new(format!("P{n}"), format!("{n}a"), format!("{n}b"));
                let match_id = MatchId::new(n);
                [
                    Card::from_pair(CardId::new(u64::from(2 * n)), match_id, &pair, CardSide::A),
                    Card::from_pair(
                        CardId::new(u64::from(2 * n + 1)),
                        match_id,
                        &pair,
                        CardSide::B,
                    ),
                ]
            })
            .collect()
    }

    fn game(pairs: u32) -> MemoryGame {
        MemoryGame::new(RoundId::new(1), ordered_deck(pairs)).unwrap()
    }

    fn id(n: u64) -> CardId {
        CardId::new(n)
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = MemoryGame::new(RoundId::new(1), Vec::new()).unwrap_err();
        assert_eq!(err, DeckError::NoPairs);
    }

    #[test]
    fn matching_pair_moves_to_matched() {
        let mut game = game(2);
        assert_eq!(game.flip(id(0)), FlipOutcome::Revealed);
        let outcome = game.flip(id(1));

        assert_eq!(
            outcome,
            FlipOutcome::Matched {
                pair: MatchId::new(0),
                completed: false
            }
        );
        assert!(game.is_matched(id(0)));
        assert!(game.is_matched(id(1)));
        assert!(game.flipped().is_empty());
        assert_eq!(game.match_count(), 1);
    }

    #[test]
    fn matched_card_cannot_be_flipped_again() {
        let mut game = game(2);
        game.flip(id(0));
        game.flip(id(1));

        assert_eq!(
            game.flip(id(0)),
            FlipOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert!(game.flipped().is_empty());
    }

    #[test]
    fn same_card_twice_is_ignored() {
        let mut game = game(2);
        game.flip(id(0));
        assert_eq!(
            game.flip(id(0)),
            FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped)
        );
        assert_eq!(game.flipped(), &[id(0)]);
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut game = game(1);
        assert_eq!(
            game.flip(id(99)),
            FlipOutcome::Ignored(IgnoreReason::UnknownCard)
        );
        assert!(game.flipped().is_empty());
    }

    #[test]
    fn mismatch_locks_until_flip_back() {
        let mut game = game(2);
        game.flip(id(0));
        let FlipOutcome::Mismatched(token) = game.flip(id(2)) else {
            panic!("expected mismatch");
        };

        assert!(game.is_locked());
        assert_eq!(game.flip(id(3)), FlipOutcome::Ignored(IgnoreReason::Locked));
        assert_eq!(game.flipped().len(), 2);

        assert!(game.resolve_flip_back(token));
        assert!(!game.is_locked());
        assert!(game.flipped().is_empty());
        assert_eq!(game.matched_count(), 0);
        assert!(!game.resolve_flip_back(token));
    }

    #[test]
    fn stale_flip_back_from_other_round_is_noop() {
        let mut old = game(2);
        old.flip(id(0));
        let FlipOutcome::Mismatched(token) = old.flip(id(2)) else {
            panic!("expected mismatch");
        };

        let mut fresh = MemoryGame::new(RoundId::new(2), ordered_deck(2)).unwrap();
        fresh.flip(id(1));
        fresh.flip(id(3));
        assert!(fresh.is_locked());

        assert!(!fresh.resolve_flip_back(token));
        assert!(fresh.is_locked());
        assert_eq!(fresh.flipped().len(), 2);
    }

    #[test]
    fn flipped_never_exceeds_two() {
        let mut game = game(4);
        let script = [0, 2, 4, 0, 1, 5, 6, 3, 7, 2, 3, 4, 5, 6, 7, 1];
        for n in script {
            if let FlipOutcome::Mismatched(token) = game.flip(id(n)) {
                assert!(game.flipped().len() <= 2);
                game.flip(id((n + 1) % 8));
                assert!(game.flipped().len() <= 2);
                game.resolve_flip_back(token);
            }
            assert!(game.flipped().len() <= 2);
        }
    }

    #[test]
    fn completion_only_when_all_pairs_matched() {
        let mut game = game(8);
        assert_eq!(game.cards().len(), 16);

        for n in 0..8_u64 {
            assert!(!game.is_complete());
            game.flip(id(2 * n));
            let outcome = game.flip(id(2 * n + 1));
            let expect_done = n == 7;
            assert_eq!(
                outcome,
                FlipOutcome::Matched {
                    pair: MatchId::new(n as u32),
                    completed: expect_done
                }
            );
        }
        assert!(game.is_complete());
        assert_eq!(game.match_count(), 8);
    }
}
