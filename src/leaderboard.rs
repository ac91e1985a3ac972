//! Leaderboard of finished games.

use alloc::vec::Vec;
use core::fmt;

use crate::sync::Mutex;

/// Who finished a game with more cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// Both sides finished with the same number of cards.
    Draw,
    /// The player finished with more cards.
    PlayerWins,
    /// The computer finished with more cards.
    ComputerWins,
}

impl Winner {
    /// Decides the winner from the cards each side has left.
    #[must_use]
    pub const fn from_counts(player_cards: usize, computer_cards: usize) -> Self {
        if player_cards > computer_cards {
            Self::PlayerWins
        } else if player_cards < computer_cards {
            Self::ComputerWins
        } else {
            Self::Draw
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Draw => "Draw",
            Self::PlayerWins => "Player wins",
            Self::ComputerWins => "Computer wins",
        };
        f.write_str(text)
    }
}

/// Summary of one finished game. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    game_number: u32,
    rounds_played: u32,
    player_cards_remaining: usize,
    computer_cards_remaining: usize,
    winner: Winner,
}

impl LeaderboardEntry {
    /// Creates an entry, deciding the winner from the remaining card counts.
    #[must_use]
    pub const fn new(
        game_number: u32,
        rounds_played: u32,
        player_cards_remaining: usize,
        computer_cards_remaining: usize,
    ) -> Self {
        Self {
            game_number,
            rounds_played,
            player_cards_remaining,
            computer_cards_remaining,
            winner: Winner::from_counts(player_cards_remaining, computer_cards_remaining),
        }
    }

    /// Returns the game number (1 for the first game).
    #[must_use]
    pub const fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the player's card count at the end of the game.
    #[must_use]
    pub const fn player_cards_remaining(&self) -> usize {
        self.player_cards_remaining
    }

    /// Returns the computer's card count at the end of the game.
    #[must_use]
    pub const fn computer_cards_remaining(&self) -> usize {
        self.computer_cards_remaining
    }

    /// Returns the result of the game.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.winner
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game Number: {}", self.game_number)?;
        writeln!(f, "Rounds Played: {}", self.rounds_played)?;
        writeln!(f, "Player Ending Cards: {}", self.player_cards_remaining)?;
        writeln!(f, "Computer Ending Cards: {}", self.computer_cards_remaining)?;
        write!(f, "Game Result: {}", self.winner)
    }
}

/// Append-only log of finished games, oldest first.
///
/// A leaderboard outlives individual game sessions and can be shared between
/// them by reference.
pub struct Leaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Records a finished game and returns the stored entry.
    pub fn record_game(
        &self,
        game_number: u32,
        rounds_played: u32,
        player_cards_remaining: usize,
        computer_cards_remaining: usize,
    ) -> LeaderboardEntry {
        let entry = LeaderboardEntry::new(
            game_number,
            rounds_played,
            player_cards_remaining,
            computer_cards_remaining,
        );
        self.entries.lock().push(entry);
        entry
    }

    /// Records a finished game under the next game number and returns the
    /// stored entry.
    ///
    /// The number is assigned while the log is locked, so games ended by
    /// different sessions are numbered 1, 2, 3, ... in the order they are
    /// recorded.
    pub fn record_next_game(
        &self,
        rounds_played: u32,
        player_cards_remaining: usize,
        computer_cards_remaining: usize,
    ) -> LeaderboardEntry {
        let mut entries = self.entries.lock();
        let entry = LeaderboardEntry::new(
            entries.len() as u32 + 1,
            rounds_played,
            player_cards_remaining,
            computer_cards_remaining,
        );
        entries.push(entry);
        drop(entries);
        entry
    }

    /// Returns all entries, oldest first.
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        self.entries.lock().clone()
    }

    /// Returns the most recently recorded entry.
    pub fn latest(&self) -> Option<LeaderboardEntry> {
        self.entries.lock().last().copied()
    }

    /// Returns the number [`Leaderboard::record_next_game`] will assign next.
    pub fn next_game_number(&self) -> u32 {
        self.len() as u32 + 1
    }

    /// Returns the number of recorded games.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns whether no games have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}
