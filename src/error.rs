//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;
use crate::round::Seat;

/// Errors that can occur when parsing a card code such as `"10h"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("card code is empty")]
    Empty,
    /// The input is not two or three ascii characters.
    #[error("card code must be two or three characters")]
    InvalidLength,
    /// The rank part is not one of a, 2-10, t, j, q, k.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit part is not one of h, d, c, s.
    #[error("invalid suit")]
    InvalidSuit,
    /// The suit was written before the rank.
    #[error("card is written rank then suit, got suit first")]
    SuitFirst,
}

/// Errors that can occur when pegging points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PegError {
    /// Zero points were pegged.
    #[error("must peg one or more points")]
    ZeroPoints,
}

/// A decision-maker returned a choice that breaks the decision contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalCardChoice {
    /// Wrong number of cards sent to the crib.
    #[error("expected {expected} cards, got {actual}")]
    WrongCount {
        /// Number of cards required.
        expected: usize,
        /// Number of cards returned.
        actual: usize,
    },
    /// The card is not part of the player's hand.
    #[error("{0} is not in the player's hand")]
    NotInHand(Card),
    /// The same card was selected more than once.
    #[error("{0} was selected more than once")]
    DuplicateCard(Card),
    /// Both players declined to play while still holding cards.
    #[error("no card was played in a sequence while cards remain")]
    NoCardPlayed,
}

/// Errors that end a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A player broke the decision contract.
    #[error("illegal card choice by {seat:?}: {reason}")]
    IllegalCardChoice {
        /// The seat that made the choice.
        seat: Seat,
        /// What was wrong with it.
        #[source]
        reason: IllegalCardChoice,
    },
    /// The deck ran out while dealing or cutting the starter.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// Points could not be pegged.
    #[error(transparent)]
    Peg(#[from] PegError),
    /// The round has already been played.
    #[error("round already played")]
    RoundComplete,
    /// A seat has already won the game.
    #[error("game is already over")]
    GameOver,
}
