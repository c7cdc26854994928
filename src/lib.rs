//! A two-player cribbage engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays rounds until a seat reaches
//! the winning score, a [`Round`] state machine covering the deal, crib,
//! starter, pegging and show, and pure scoring functions in [`score`].
//! Decisions are delegated to implementations of [`Player`].
//!
//! # Example
//!
//! ```
//! use cribrs::{BeginnerPlayer, Game, GameOptions, RandomPlayer};
//!
//! let options = GameOptions::default().with_seed(42);
//! let mut game = Game::new(
//!     [
//!         Box::new(BeginnerPlayer::new("beginner")),
//!         Box::new(RandomPlayer::new("random", 7)),
//!     ],
//!     options,
//! );
//! let result = game.start().unwrap();
//! assert!(result.rounds > 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod history;
pub mod options;
pub mod player;
pub mod round;
pub mod score;
pub mod stats;

// Re-export main types
pub use board::{Board, MAX_SCORE, Pegs};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{IllegalCardChoice, ParseCardError, PegError, RoundError};
pub use game::{Game, GameResult};
pub use history::{RoundEvent, RoundHistory};
pub use options::GameOptions;
pub use player::{BeginnerPlayer, FirstCardPlayer, Player, RandomPlayer, StatisticalPlayer};
pub use round::{Round, RoundOutcome, RoundPhase, Seat};
pub use score::{Rule, Score, score_hand, score_play};
pub use stats::{HandStats, StatsTable};
