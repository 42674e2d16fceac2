//! Memory deck construction: unique card ids and a uniform shuffle.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng, TryRngCore};
use tracing::warn;

use crate::error::DeckError;
use crate::model::{Card, CardId, CardSide, MatchId, PhotoPair};

/// Source of card identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> CardId;
}

/// Draws ids from the operating system's CSPRNG.
///
/// If the OS source fails, switches for good to a time-seeded `StdRng`,
/// which is weaker but keeps collisions unlikely.
#[derive(Debug, Default)]
pub struct SecureIdSource {
    fallback: Option<StdRng>,
}

impl SecureIdSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fallback_rng() -> StdRng {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Fold the 128-bit reading so both halves contribute.
        let seed = (nanos as u64) ^ ((nanos >> 64) as u64) ^ u64::from(std::process::id());
        StdRng::seed_from_u64(seed)
    }
}

impl IdSource for SecureIdSource {
    fn next_id(&mut self) -> CardId {
        if let Some(rng) = self.fallback.as_mut() {
            return CardId::new(rng.next_u64());
        }
        match OsRng.try_next_u64() {
            Ok(value) => CardId::new(value),
            Err(err) => {
                warn!(error = %err, "os random source unavailable, using seeded fallback");
                let rng = self.fallback.insert(Self::fallback_rng());
                CardId::new(rng.next_u64())
            }
        }
    }
}

/// Two cards per pair, each with a distinct id, shuffled with `rng`.
///
/// # Errors
///
/// Returns `DeckError::NoPairs` when `pairs` is empty.
pub fn build_deck<R: Rng + ?Sized>(
    pairs: &[PhotoPair],
    ids: &mut dyn IdSource,
    rng: &mut R,
) -> Result<Vec<Card>, DeckError> {
    if pairs.is_empty() {
        return Err(DeckError::NoPairs);
    }

    let mut seen = HashSet::with_capacity(pairs.len() * 2);
    let mut fresh_id = || loop {
        let id = ids.next_id();
        if seen.insert(id) {
            return id;
        }
    };

    let mut deck = Vec::with_capacity(pairs.len() * 2);
    for (idx, pair) in pairs.iter().enumerate() {
        let match_id = MatchId::new(u32::try_from(idx).unwrap_or(u32::MAX));
        deck.push(Card::from_pair(fresh_id(), match_id, pair, CardSide::A));
        deck.push(Card::from_pair(fresh_id(), match_id, pair, CardSide::B));
    }

    // Fisher-Yates.
    deck.shuffle(rng);
    Ok(deck)
}
