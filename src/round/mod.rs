//! A single round of cribbage.
//!
//! A [`Round`] is played exactly once. It deals from its own deck, asks both
//! players for their discards, turns the starter, runs pegging and finally
//! counts both hands and the crib. Any peg that reaches the winning score
//! ends the round immediately.

use alloc::vec::Vec;

use tracing::debug;

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::history::{RoundEvent, RoundHistory};
use crate::player::Player;

mod crib;
mod pegging;
mod show;
pub mod state;

pub use state::{RoundOutcome, RoundPhase, Seat};

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 6;

/// Points the dealer pegs when the starter is a jack.
pub const HEELS_POINTS: u32 = 2;

/// One deal, from the cut to the crib count.
#[derive(Debug, Clone)]
pub struct Round {
    dealer: Seat,
    deck: Deck,
    cut_point: Option<usize>,
    phase: RoundPhase,
    hands: [Vec<Card>; 2],
    kept: [Vec<Card>; 2],
    history: RoundHistory,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Board, FirstCardPlayer, Round, Seat};
    ///
    /// let mut board = Board::default();
    /// let mut first = FirstCardPlayer::new("first");
    /// let mut second = FirstCardPlayer::new("second");
    ///
    /// let mut round = Round::new(Seat::First, 7);
    /// round.play([&mut first, &mut second], &mut board).unwrap();
    /// assert_eq!(round.history().cards_dealt[0].len(), 6);
    /// ```
    #[must_use]
    pub fn new(dealer: Seat, seed: u64) -> Self {
        Self::with_deck(dealer, Deck::new(seed))
    }

    /// Creates a round that deals from `deck` as given.
    #[must_use]
    pub fn with_deck(dealer: Seat, deck: Deck) -> Self {
        Self {
            dealer,
            history: RoundHistory::new(dealer, deck.seed()),
            deck,
            cut_point: None,
            phase: RoundPhase::Dealing,
            hands: [Vec::new(), Vec::new()],
            kept: [Vec::new(), Vec::new()],
            outcome: None,
        }
    }

    /// Fixes the cut point instead of drawing it from the deck's generator.
    ///
    /// A cut point of `0` leaves the deck order untouched.
    #[must_use]
    pub const fn with_cut_point(mut self, cut_point: usize) -> Self {
        self.cut_point = Some(cut_point);
        self
    }

    /// Plays the round to completion, pegging onto `board`.
    ///
    /// `players` is indexed by seat.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RoundComplete`] if the round was already played,
    /// [`RoundError::NotEnoughCards`] if the deck runs out, and
    /// [`RoundError::IllegalCardChoice`] if a player breaks the discard
    /// contract or play stalls.
    pub fn play(
        &mut self,
        mut players: [&mut (dyn Player + '_); 2],
        board: &mut Board,
    ) -> Result<RoundOutcome, RoundError> {
        if self.phase != RoundPhase::Dealing {
            return Err(RoundError::RoundComplete);
        }
        self.history.score_at_start = board.scores();
        debug!(dealer = %self.dealer, scores = ?board.scores(), "round started");

        let result = self.run(&mut players, board);
        if let Ok(outcome) = result {
            if let Some(seat) = outcome.winner() {
                self.history.record(RoundEvent::Won { seat });
            }
            self.outcome = Some(outcome);
        }
        self.enter(RoundPhase::Done);
        result
    }

    fn run(
        &mut self,
        players: &mut [&mut (dyn Player + '_); 2],
        board: &mut Board,
    ) -> Result<RoundOutcome, RoundError> {
        self.deal()?;

        self.enter(RoundPhase::CribCollection);
        self.collect_crib(players, board)?;

        self.enter(RoundPhase::CutStarter);
        if let Some(seat) = self.cut_starter(board)? {
            return Ok(self.won(seat));
        }

        self.enter(RoundPhase::Pegging);
        if let Some(seat) = self.peg(players, board)? {
            return Ok(self.won(seat));
        }
        self.history.score_after_pegging = Some(board.scores());

        self.enter(RoundPhase::HandScoring);
        for seat in [self.dealer.other(), self.dealer] {
            if let Some(winner) = self.count_hand(seat, board)? {
                return Ok(self.won(winner));
            }
        }

        self.enter(RoundPhase::CribScoring);
        if let Some(seat) = self.count_crib(board)? {
            return Ok(self.won(seat));
        }
        self.history.score_after_hands = Some(board.scores());

        Ok(RoundOutcome::Completed)
    }

    fn enter(&mut self, phase: RoundPhase) {
        debug!(?phase, "round phase");
        self.phase = phase;
    }

    const fn won(&self, seat: Seat) -> RoundOutcome {
        RoundOutcome::Won {
            seat,
            phase: self.phase,
        }
    }

    /// Cuts the deck and deals six cards each, non-dealer first.
    fn deal(&mut self) -> Result<(), RoundError> {
        let cut = self.deck.cut(self.cut_point);
        debug!(cut, "deck cut");

        let order = [self.dealer.other(), self.dealer];
        for _ in 0..HAND_SIZE {
            for seat in order {
                let card = self.deck.draw().ok_or(RoundError::NotEnoughCards)?;
                self.hands[seat.index()].push(card);
            }
        }
        self.history.cards_dealt = self.hands.clone();
        Ok(())
    }

    /// Turns the starter; a jack pegs heels for the dealer.
    fn cut_starter(&mut self, board: &mut Board) -> Result<Option<Seat>, RoundError> {
        let starter = self.deck.draw().ok_or(RoundError::NotEnoughCards)?;
        debug!(%starter, "starter");
        self.history.starter = Some(starter);

        if !starter.is_jack() {
            return Ok(None);
        }
        self.history.record(RoundEvent::Heels {
            seat: self.dealer,
            card: starter,
        });
        Ok(board.peg(self.dealer, HEELS_POINTS)?)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the cards a seat still holds.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Returns the four cards a seat kept after discarding.
    #[must_use]
    pub fn kept(&self, seat: Seat) -> &[Card] {
        &self.kept[seat.index()]
    }

    /// Returns the crib.
    #[must_use]
    pub fn crib(&self) -> &[Card] {
        &self.history.crib
    }

    /// Returns the starter, once cut.
    #[must_use]
    pub const fn starter(&self) -> Option<Card> {
        self.history.starter
    }

    /// Returns every card played so far, in order.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.history.table
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the round's history.
    #[must_use]
    pub const fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Consumes the round, returning its history.
    #[must_use]
    pub fn into_history(self) -> RoundHistory {
        self.history
    }

    /// Returns how the round ended, once played.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }
}
