//! Error types for game operations.

use thiserror::Error;

use crate::game::Side;

/// Errors that can occur while preparing a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck cannot be dealt into two equal piles.
    #[error("cannot split a deck of {len} cards into two equal piles")]
    InvalidDeckSize {
        /// Number of cards in the rejected deck.
        len: usize,
    },
}

/// Errors that can occur while resolving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A pile has no card to play.
    #[error("the {0} pile is empty")]
    EmptyPile(Side),
    /// The configured number of rounds has already been played.
    #[error("round limit reached")]
    RoundLimitReached,
    /// Invalid game state for playing a round.
    #[error("invalid game state for playing a round")]
    InvalidState,
}

/// Errors returned by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck could not be dealt.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The round could not be played.
    #[error(transparent)]
    Round(#[from] RoundError),
}
