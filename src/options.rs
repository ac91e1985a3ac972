//! Game configuration options.

/// Number of rounds in a game unless configured otherwise.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Configuration options for a game session.
///
/// The deck and the round rules are fixed; only the length of a game can be
/// changed:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_max_rounds(26);
/// assert_eq!(options.max_rounds, 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Rounds that can be dealt before the game must be ended.
    /// 0 removes the limit, so a game runs until a pile is exhausted.
    pub max_rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameOptions {
    /// Sets the number of rounds per game.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(0);
    /// assert_eq!(options.max_rounds, 0);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Returns whether `rounds_played` has used up the round limit.
    #[must_use]
    pub const fn round_limit_reached(&self, rounds_played: u32) -> bool {
        self.max_rounds != 0 && rounds_played >= self.max_rounds
    }
}
