//! Game state types.

use core::fmt;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No cards have been dealt for the current game yet.
    NotDealt,
    /// Piles are dealt and rounds can be played.
    InProgress,
    /// No more rounds can be played; the game is waiting to be ended.
    Finished,
}

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Computer => f.write_str("computer"),
        }
    }
}
