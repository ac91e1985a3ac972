use core::sync::atomic::Ordering;

use crate::card::Card;
use crate::error::{GameError, RoundError};
use crate::result::{RoundOutcome, RoundReport};
use crate::round::play_one_round;

use super::{Game, GameState, Side};

impl Game {
    /// Plays one round between the two front cards.
    ///
    /// Returns the cards that were played and how the round went. Once the
    /// round limit is used up or a pile runs out, the game moves to
    /// [`GameState::Finished`].
    fn resolve_round(&self) -> Result<(Card, Card, RoundOutcome), RoundError> {
        if self.state() == GameState::NotDealt {
            return Err(RoundError::InvalidState);
        }

        if self.options.round_limit_reached(self.rounds_played()) {
            self.finish();
            return Err(RoundError::RoundLimitReached);
        }

        let mut player = self.player_pile.lock();
        let mut computer = self.computer_pile.lock();

        let played = player.front().copied().zip(computer.front().copied());
        let Some((player_card, computer_card)) = played else {
            let side = if player.is_empty() {
                Side::Player
            } else {
                Side::Computer
            };
            drop(player);
            drop(computer);
            self.finish();
            return Err(RoundError::EmptyPile(side));
        };

        let outcome = play_one_round(&mut player, &mut computer)?;
        let exhausted = player.is_empty() || computer.is_empty();
        drop(player);
        drop(computer);

        let rounds = self.rounds_played.fetch_add(1, Ordering::SeqCst) + 1;
        if exhausted || self.options.round_limit_reached(rounds) {
            self.finish();
        }

        Ok((player_card, computer_card, outcome))
    }

    /// Plays one round without reporting the cards.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No cards have been dealt for the current game
    /// - The round limit has been reached
    /// - Either pile is empty
    pub fn play_round(&self) -> Result<RoundOutcome, RoundError> {
        self.resolve_round().map(|(_, _, outcome)| outcome)
    }

    /// Deals the next round, dealing a fresh game first if needed.
    ///
    /// Returns both cards that were played, their image keys, and the pile
    /// sizes after the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round limit has been reached or either pile is
    /// empty. The piles are left untouched in that case.
    pub fn deal_next_round(&self) -> Result<RoundReport, GameError> {
        if self.state() == GameState::NotDealt {
            self.start_new_game()?;
        }

        let (player_card, computer_card, outcome) = self.resolve_round()?;

        Ok(RoundReport {
            round: self.rounds_played(),
            player_card,
            computer_card,
            player_image_key: player_card.image_key(),
            computer_image_key: computer_card.image_key(),
            outcome,
            player_count: self.player_count(),
            computer_count: self.computer_count(),
        })
    }
}
