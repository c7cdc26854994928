//! Round state types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    /// The first player.
    First,
    /// The second player.
    Second,
}

impl Seat {
    /// Both seats, first seat first.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Index of the seat in per-seat arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Cutting the deck and dealing six cards each.
    Dealing,
    /// Collecting two discards from each player.
    CribCollection,
    /// Turning the starter card.
    CutStarter,
    /// Playing cards to the table.
    Pegging,
    /// Counting the non-dealer's hand, then the dealer's.
    HandScoring,
    /// Counting the crib for the dealer.
    CribScoring,
    /// The round is over.
    Done,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A seat reached the winning score; the rest of the round was skipped.
    Won {
        /// The winning seat.
        seat: Seat,
        /// The phase during which the winning peg happened.
        phase: RoundPhase,
    },
    /// All hands and the crib were counted without a winner.
    Completed,
}

impl RoundOutcome {
    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match self {
            Self::Won { seat, .. } => Some(*seat),
            Self::Completed => None,
        }
    }
}
