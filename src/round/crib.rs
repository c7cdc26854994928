use tracing::debug;

use crate::board::Board;
use crate::card::Card;
use crate::error::{IllegalCardChoice, RoundError};
use crate::player::{CRIB_DISCARDS, Player};

use super::Round;

/// Checks that `discards` are two distinct cards taken from `hand`.
fn validate_discards(hand: &[Card], discards: &[Card]) -> Result<(), IllegalCardChoice> {
    if discards.len() != CRIB_DISCARDS {
        return Err(IllegalCardChoice::WrongCount {
            expected: CRIB_DISCARDS,
            actual: discards.len(),
        });
    }
    for (i, card) in discards.iter().enumerate() {
        if discards[..i].contains(card) {
            return Err(IllegalCardChoice::DuplicateCard(*card));
        }
        if !hand.contains(card) {
            return Err(IllegalCardChoice::NotInHand(*card));
        }
    }
    Ok(())
}

impl Round {
    /// Collects two discards from the non-dealer, then two from the dealer.
    pub(super) fn collect_crib(
        &mut self,
        players: &mut [&mut (dyn Player + '_); 2],
        board: &Board,
    ) -> Result<(), RoundError> {
        for seat in [self.dealer.other(), self.dealer] {
            let player = &mut players[seat.index()];
            let hand = &mut self.hands[seat.index()];
            let discards = player.select_crib_cards(
                hand,
                seat == self.dealer,
                board.score(seat),
                board.score(seat.other()),
            );
            validate_discards(hand, &discards)
                .map_err(|reason| RoundError::IllegalCardChoice { seat, reason })?;

            debug!(player = player.name(), ?discards, "discarded to crib");
            hand.retain(|card| !discards.contains(card));
            self.history.crib.extend(discards);
        }
        debug_assert_eq!(self.history.crib.len(), 2 * CRIB_DISCARDS, "crib must hold four cards");

        self.kept = self.hands.clone();
        Ok(())
    }
}
