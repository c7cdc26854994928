//! Game configuration options.

use crate::board::MAX_SCORE;
use crate::round::Seat;

/// Seed used when no seed is given and no entropy source is available.
pub const DEFAULT_SEED: u64 = 0x00C0_FFEE_0121;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_max_score(61)
///     .with_seed(42)
///     .with_first_dealer(Seat::Second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Score needed to win.
    pub max_score: u32,
    /// Seed for the game's random number generator.
    ///
    /// `None` picks a fresh seed when the game is created.
    pub seed: Option<u64>,
    /// Seat that deals the first round. `None` cuts for deal.
    pub first_dealer: Option<Seat>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_score: MAX_SCORE,
            seed: None,
            first_dealer: None,
        }
    }
}

impl GameOptions {
    /// Sets the score needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_score(61);
    /// assert_eq!(options.max_score, 61);
    /// ```
    #[must_use]
    pub const fn with_max_score(mut self, max_score: u32) -> Self {
        self.max_score = max_score;
        self
    }

    /// Sets the seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(7);
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seat that deals first.
    #[must_use]
    pub const fn with_first_dealer(mut self, seat: Seat) -> Self {
        self.first_dealer = Some(seat);
        self
    }
}

/// Returns `seed`, or a fresh one from the thread generator.
#[cfg(feature = "std")]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    use rand::Rng;

    seed.unwrap_or_else(|| rand::rng().random())
}

/// Returns `seed`, or [`DEFAULT_SEED`] when no entropy source is available.
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or(DEFAULT_SEED)
}
