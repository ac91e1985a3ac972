//! Round result types.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::game::Side;

/// What happened in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The side with the higher front card took both cards.
    Capture {
        /// The side that took the cards.
        winner: Side,
    },
    /// Both front cards had the same rank; each went to the back of its own
    /// pile.
    Standoff,
}

impl RoundOutcome {
    /// Returns the capturing side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Capture { winner } => Some(winner),
            Self::Standoff => None,
        }
    }
}

/// Summary of a dealt round, as shown to the players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The round number (1 for the first round of a game).
    pub round: u32,
    /// The player's card for this round.
    pub player_card: Card,
    /// The computer's card for this round.
    pub computer_card: Card,
    /// Image key of the player's card.
    pub player_image_key: String,
    /// Image key of the computer's card.
    pub computer_image_key: String,
    /// How the round was resolved.
    pub outcome: RoundOutcome,
    /// Cards in the player's pile after the round.
    pub player_count: usize,
    /// Cards in the computer's pile after the round.
    pub computer_count: usize,
}
