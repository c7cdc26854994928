use alloc::vec::Vec;

use tracing::debug;

use crate::board::Board;
use crate::card::Card;
use crate::error::{IllegalCardChoice, RoundError};
use crate::history::RoundEvent;
use crate::player::{Player, is_playable};
use crate::score::{PEG_LIMIT, score_play};

use super::{Round, Seat};

/// The cards played since the count last reset.
#[derive(Debug, Clone, Default)]
struct Sequence {
    cards: Vec<Card>,
    count: u32,
    said_go: [bool; 2],
    last_player: Option<Seat>,
}

/// What happens next in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The seat must choose a card or say go.
    Ask(Seat),
    /// Nobody can play; the seat that played last takes the go point.
    Close(Seat),
    /// Both hands are empty.
    Finished,
    /// Nobody can play, nothing was played, and cards remain.
    Stalled,
}

impl Sequence {
    fn is_eligible(&self, seat: Seat, hands: &[Vec<Card>; 2]) -> bool {
        !self.said_go[seat.index()] && !hands[seat.index()].is_empty()
    }

    fn next_step(&self, turn: Seat, hands: &[Vec<Card>; 2]) -> Step {
        if self.is_eligible(turn, hands) {
            return Step::Ask(turn);
        }
        if self.is_eligible(turn.other(), hands) {
            return Step::Ask(turn.other());
        }
        match self.last_player {
            Some(seat) => Step::Close(seat),
            None if hands.iter().all(Vec::is_empty) => Step::Finished,
            None => Step::Stalled,
        }
    }

    fn play(mut self, seat: Seat, card: Card) -> Self {
        self.count += u32::from(card.value());
        debug_assert!(self.count <= PEG_LIMIT, "count passed {PEG_LIMIT}");
        self.cards.push(card);
        self.last_player = Some(seat);
        self
    }

    const fn said_go(mut self, seat: Seat) -> Self {
        self.said_go[seat.index()] = true;
        self
    }
}

impl Round {
    /// Runs pegging until both hands are empty or someone wins.
    pub(super) fn peg(
        &mut self,
        players: &mut [&mut (dyn Player + '_); 2],
        board: &mut Board,
    ) -> Result<Option<Seat>, RoundError> {
        let mut sequence = Sequence::default();
        let mut turn = self.dealer.other();

        loop {
            match sequence.next_step(turn, &self.hands) {
                Step::Finished => return Ok(None),
                Step::Stalled => {
                    return Err(RoundError::IllegalCardChoice {
                        seat: turn,
                        reason: IllegalCardChoice::NoCardPlayed,
                    });
                }
                Step::Close(seat) => {
                    debug!(%seat, count = sequence.count, "go point");
                    self.history.record(RoundEvent::GoPoint {
                        seat,
                        count: sequence.count,
                    });
                    if let Some(winner) = board.peg(seat, 1)? {
                        return Ok(Some(winner));
                    }
                    sequence = Sequence::default();
                    turn = seat;
                }
                Step::Ask(seat) => {
                    let hand = &self.hands[seat.index()];
                    let choice = players[seat.index()]
                        .select_card_to_play(hand, &sequence.cards, sequence.count, self.crib())
                        .filter(|card| hand.contains(card) && is_playable(card, sequence.count));

                    let Some(card) = choice else {
                        debug!(%seat, count = sequence.count, "go");
                        self.history.record(RoundEvent::Go {
                            seat,
                            count: sequence.count,
                        });
                        sequence = sequence.said_go(seat);
                        turn = seat.other();
                        continue;
                    };

                    self.hands[seat.index()].retain(|held| *held != card);
                    self.history.table.push(card);
                    sequence = sequence.play(seat, card);
                    debug!(%seat, %card, count = sequence.count, "played");
                    self.history.record(RoundEvent::Played {
                        seat,
                        card,
                        count: sequence.count,
                    });

                    let score = score_play(&sequence.cards);
                    if score.points > 0 {
                        self.history.record(RoundEvent::Scored {
                            seat,
                            points: score.points,
                            reason: score.description,
                        });
                        if let Some(winner) = board.peg(seat, score.points)? {
                            return Ok(Some(winner));
                        }
                    }

                    if sequence.count == PEG_LIMIT {
                        sequence = Sequence::default();
                        turn = seat;
                    } else {
                        turn = seat.other();
                    }
                }
            }
        }
    }
}
