use tracing::debug;

use crate::board::Board;
use crate::error::RoundError;
use crate::history::RoundEvent;
use crate::score::score_hand_breakdown;

use super::{Round, Seat};

impl Round {
    /// Counts a seat's kept hand with the starter.
    pub(super) fn count_hand(
        &mut self,
        seat: Seat,
        board: &mut Board,
    ) -> Result<Option<Seat>, RoundError> {
        let breakdown =
            score_hand_breakdown(&self.kept[seat.index()], self.history.starter, false);
        let points: u32 = breakdown.iter().map(|score| score.points).sum();
        debug!(%seat, points, "hand counted");

        self.history.hand_scores[seat.index()] = Some(points);
        self.history.record(RoundEvent::HandCounted {
            seat,
            points,
            breakdown,
        });
        if points == 0 {
            return Ok(None);
        }
        Ok(board.peg(seat, points)?)
    }

    /// Counts the crib for the dealer.
    pub(super) fn count_crib(&mut self, board: &mut Board) -> Result<Option<Seat>, RoundError> {
        let breakdown = score_hand_breakdown(&self.history.crib, self.history.starter, true);
        let points: u32 = breakdown.iter().map(|score| score.points).sum();
        debug!(seat = %self.dealer, points, "crib counted");

        self.history.crib_score = Some(points);
        self.history.record(RoundEvent::CribCounted {
            seat: self.dealer,
            points,
            breakdown,
        });
        if points == 0 {
            return Ok(None);
        }
        Ok(board.peg(self.dealer, points)?)
    }
}
