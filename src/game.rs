//! A full game: rounds until a seat reaches the winning score.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::Board;
use crate::error::RoundError;
use crate::history::RoundHistory;
use crate::options::{GameOptions, resolve_seed};
use crate::player::Player;
use crate::round::{Round, RoundOutcome, Seat};

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Final scores, first seat first.
    pub scores: [u32; 2],
    /// The winning seat.
    pub winner: Seat,
    /// Number of rounds played.
    pub rounds: usize,
}

/// A two-player game of cribbage.
///
/// The game owns the board and both players, and derives every round's
/// seed from its own generator so that a seeded game replays exactly.
pub struct Game {
    players: [Box<dyn Player>; 2],
    board: Board,
    options: GameOptions,
    seed: u64,
    rng: ChaCha8Rng,
    next_dealer: Option<Seat>,
    history: Vec<RoundHistory>,
    failure: Option<RoundError>,
}

impl Game {
    /// Creates a new game.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{FirstCardPlayer, Game, GameOptions, RandomPlayer};
    ///
    /// let mut game = Game::new(
    ///     [
    ///         Box::new(RandomPlayer::new("random", 1)),
    ///         Box::new(FirstCardPlayer::new("first")),
    ///     ],
    ///     GameOptions::default().with_seed(42),
    /// );
    /// let result = game.start().unwrap();
    /// assert_eq!(result.scores[result.winner.index()], 121);
    /// ```
    #[must_use]
    pub fn new(players: [Box<dyn Player>; 2], options: GameOptions) -> Self {
        let seed = resolve_seed(options.seed);
        Self {
            players,
            board: Board::new(options.max_score),
            options,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_dealer: options.first_dealer,
            history: Vec::new(),
            failure: None,
        }
    }

    /// Plays one round with the next dealer.
    ///
    /// The round's history is kept even when the round fails. A failed round
    /// halts the game: the dealer does not advance and every later call
    /// returns the same error.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] once a seat has won, the error of an
    /// earlier failed round, or any error raised by the round itself.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        if let Some(error) = self.failure {
            return Err(error);
        }
        if self.board.winner().is_some() {
            return Err(RoundError::GameOver);
        }
        let dealer = match self.next_dealer {
            Some(seat) => seat,
            None => self.cut_for_deal(),
        };
        let mut round = Round::new(dealer, self.rng.random());

        let [first, second] = &mut self.players;
        let result = round.play([first.as_mut(), second.as_mut()], &mut self.board);
        self.history.push(round.into_history());

        match &result {
            Ok(_) => self.next_dealer = Some(dealer.other()),
            Err(error) => {
                warn!(%error, round = self.history.len(), "round failed, game halted");
                self.failure = Some(*error);
            }
        }
        result
    }

    /// Returns the error that halted the game, if a round failed.
    #[must_use]
    pub const fn failure(&self) -> Option<RoundError> {
        self.failure
    }

    /// Plays rounds until a seat reaches the winning score.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a round.
    pub fn start(&mut self) -> Result<GameResult, RoundError> {
        info!(
            first = self.players[0].name(),
            second = self.players[1].name(),
            seed = self.seed,
            "game started"
        );
        loop {
            if let Some(winner) = self.play_round()?.winner() {
                let result = GameResult {
                    scores: self.board.scores(),
                    winner,
                    rounds: self.history.len(),
                };
                info!(
                    winner = self.players[winner.index()].name(),
                    scores = ?result.scores,
                    rounds = result.rounds,
                    "game over"
                );
                return Ok(result);
            }
        }
    }

    fn cut_for_deal(&mut self) -> Seat {
        if self.rng.random() {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// Returns the peg board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the seed the game's generator started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the player in a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &dyn Player {
        self.players[seat.index()].as_ref()
    }

    /// Returns the history of every round played, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundHistory] {
        &self.history
    }

    /// Returns the winning seat, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.board.winner()
    }
}
