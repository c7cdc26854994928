//! The peg board.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PegError;
use crate::round::Seat;

/// Score needed to win a standard game.
pub const MAX_SCORE: u32 = 121;

/// The two pegs of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pegs {
    /// Current score.
    pub front: u32,
    /// Score before the most recent peg.
    pub rear: u32,
}

/// Tracks the score of both seats.
///
/// ```
/// use cribrs::{Board, Seat};
///
/// let mut board = Board::new(121);
/// assert_eq!(board.peg(Seat::First, 5), Ok(None));
/// assert_eq!(board.score(Seat::First), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    max_score: u32,
    pegs: [Pegs; 2],
}

impl Board {
    /// Creates an empty board for a game played to `max_score`.
    #[must_use]
    pub const fn new(max_score: u32) -> Self {
        Self {
            max_score,
            pegs: [Pegs { front: 0, rear: 0 }; 2],
        }
    }

    /// Adds points for a seat.
    ///
    /// The front peg never passes the maximum score. Returns the seat when
    /// this peg reaches the maximum score.
    ///
    /// # Errors
    ///
    /// Returns [`PegError::ZeroPoints`] if `points` is zero.
    pub fn peg(&mut self, seat: Seat, points: u32) -> Result<Option<Seat>, PegError> {
        if points == 0 {
            return Err(PegError::ZeroPoints);
        }

        let pegs = &mut self.pegs[seat.index()];
        pegs.rear = pegs.front;
        pegs.front = pegs.front.saturating_add(points).min(self.max_score);
        debug!(?seat, points, score = pegs.front, "pegged");

        Ok((pegs.front >= self.max_score).then_some(seat))
    }

    /// Returns the current score of a seat.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.pegs[seat.index()].front
    }

    /// Returns the score a seat had before its last peg.
    #[must_use]
    pub const fn rear(&self, seat: Seat) -> u32 {
        self.pegs[seat.index()].rear
    }

    /// Returns both pegs of a seat.
    #[must_use]
    pub const fn pegs(&self, seat: Seat) -> Pegs {
        self.pegs[seat.index()]
    }

    /// Returns the scores of both seats, first seat first.
    #[must_use]
    pub const fn scores(&self) -> [u32; 2] {
        [self.pegs[0].front, self.pegs[1].front]
    }

    /// Returns the score needed to win.
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    /// Returns the seat that has reached the maximum score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|seat| self.score(*seat) >= self.max_score)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MAX_SCORE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[PEGS]")?;
        for seat in Seat::ALL {
            let pegs = self.pegs(seat);
            write!(f, " {seat}: front {}, rear {};", pegs.front, pegs.rear)?;
        }
        Ok(())
    }
}
