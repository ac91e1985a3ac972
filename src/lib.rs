//! A War-style card comparison game engine with optional `no_std` support.
//!
//! A shuffled 52-card deck is dealt alternately into a player pile and a
//! computer pile. Each round compares the two front cards: the higher rank
//! takes both cards to the back of its pile, and equal ranks send each card
//! to the back of its own pile. Finished games are kept on a [`Leaderboard`].
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, Leaderboard};
//!
//! let leaderboard = Leaderboard::new();
//! let game = Game::new(GameOptions::default(), 42);
//!
//! let report = game.deal_next_round().unwrap();
//! assert_eq!(report.round, 1);
//! assert_eq!(report.player_count + report.computer_count, 52);
//!
//! let entry = game.end_game(&leaderboard);
//! assert_eq!(entry.game_number(), 1);
//! assert_eq!(leaderboard.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod leaderboard;
pub mod options;
pub mod pile;
pub mod result;
pub mod round;
mod sync;

// Re-export main types
pub use card::{CARD_BACK_IMAGE_KEY, Card, DECK_SIZE, Rank, Suit};
pub use deck::{ordered_deck, shuffle, shuffled_deck, split_into_two_piles};
pub use error::{DeckError, GameError, RoundError};
pub use game::{Game, GameState, Side};
pub use leaderboard::{Leaderboard, LeaderboardEntry, Winner};
pub use options::{DEFAULT_MAX_ROUNDS, GameOptions};
pub use pile::Pile;
pub use result::{RoundOutcome, RoundReport};
pub use round::play_one_round;
