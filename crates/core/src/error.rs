use thiserror::Error;

/// Errors raised while assembling a memory deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("no photo pairs configured")]
    NoPairs,
}
