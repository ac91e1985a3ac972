//! Game session and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck;
use crate::error::GameError;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::options::GameOptions;
use crate::pile::Pile;

mod round;
pub mod state;

pub use state::{GameState, Side};

/// A single player-versus-computer session.
///
/// The session owns both piles, the round counter, and its random number
/// generator. Finished games are recorded into a [`Leaderboard`] that the
/// caller owns, after which the session is ready for the next game.
pub struct Game {
    /// The player's pile.
    pub player_pile: Mutex<Pile>,
    /// The computer's pile.
    pub computer_pile: Mutex<Pile>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Rounds played in the current game.
    rounds_played: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// No cards are dealt until [`Game::start_new_game`] or
    /// [`Game::deal_next_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotDealt);
    /// assert_eq!(game.rounds_played(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            player_pile: Mutex::new(Pile::new()),
            computer_pile: Mutex::new(Pile::new()),
            options,
            state: Mutex::new(GameState::NotDealt),
            rounds_played: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Shuffles a fresh deck and deals it into the two piles.
    ///
    /// Any game in progress is discarded without being recorded. Returns the
    /// player's and the computer's piles, front card first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be split.
    pub fn start_new_game(&self) -> Result<(Vec<Card>, Vec<Card>), GameError> {
        let shuffled = deck::shuffled_deck(&mut *self.rng.lock());
        let (player, computer) = deck::split_into_two_piles(&shuffled)?;
        let dealt = (player.to_vec(), computer.to_vec());

        *self.player_pile.lock() = player;
        *self.computer_pile.lock() = computer;
        self.rounds_played.store(0, Ordering::SeqCst);
        *self.state.lock() = GameState::InProgress;

        Ok(dealt)
    }

    /// Records the current game on `leaderboard` and resets the session.
    ///
    /// The leaderboard numbers the entry; it records the rounds played and
    /// the size of each pile. Ending a game before anything was dealt records
    /// a draw with no rounds. Afterwards both piles are empty and the round
    /// counter is zero.
    pub fn end_game(&self, leaderboard: &Leaderboard) -> LeaderboardEntry {
        let entry = leaderboard.record_next_game(
            self.rounds_played(),
            self.player_count(),
            self.computer_count(),
        );

        self.clear_game();

        entry
    }

    /// Empties both piles and returns to the `NotDealt` state.
    fn clear_game(&self) {
        self.player_pile.lock().clear();
        self.computer_pile.lock().clear();
        self.rounds_played.store(0, Ordering::SeqCst);
        *self.state.lock() = GameState::NotDealt;
    }

    /// Marks the current game as unable to continue.
    fn finish(&self) {
        *self.state.lock() = GameState::Finished;
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of rounds played in the current game.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the number of cards in the player's pile.
    pub fn player_count(&self) -> usize {
        self.player_pile.lock().len()
    }

    /// Returns the number of cards in the computer's pile.
    pub fn computer_count(&self) -> usize {
        self.computer_pile.lock().len()
    }

    /// Returns the next card each side would play.
    pub fn front_cards(&self) -> (Option<Card>, Option<Card>) {
        let player = self.player_pile.lock().front().copied();
        let computer = self.computer_pile.lock().front().copied();
        (player, computer)
    }

    /// Returns a copy of the player's pile, front card first.
    pub fn player_cards(&self) -> Vec<Card> {
        self.player_pile.lock().to_vec()
    }

    /// Returns a copy of the computer's pile, front card first.
    pub fn computer_cards(&self) -> Vec<Card> {
        self.computer_pile.lock().to_vec()
    }
}
