//! Decision interface used by the round engine, plus reference players.
//!
//! The engine never decides anything on a player's behalf: it asks a
//! [`Player`] for two crib cards and then, on each turn, for a card to play.
//! Choices that break the contract are handled by the engine (see
//! [`crate::round`]).

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{PEG_LIMIT, score_play};

mod beginner;
mod first_card;
mod random;
mod statistical;

pub use beginner::BeginnerPlayer;
pub use first_card::FirstCardPlayer;
pub use random::RandomPlayer;
pub use statistical::StatisticalPlayer;

/// Number of cards each player sends to the crib.
pub const CRIB_DISCARDS: usize = 2;

/// A decision-maker seated at the table.
///
/// # Example Implementation
///
/// ```rust
/// use cribrs::{Card, Player};
///
/// struct Lowest;
///
/// impl Player for Lowest {
///     fn name(&self) -> &str {
///         "lowest"
///     }
///
///     fn select_crib_cards(
///         &mut self,
///         hand: &[Card],
///         _dealer_is_self: bool,
///         _your_score: u32,
///         _opponent_score: u32,
///     ) -> Vec<Card> {
///         let mut sorted = hand.to_vec();
///         sorted.sort();
///         sorted.truncate(2);
///         sorted
///     }
///
///     fn select_card_to_play(
///         &mut self,
///         hand: &[Card],
///         _table: &[Card],
///         count: u32,
///         _crib: &[Card],
///     ) -> Option<Card> {
///         cribrs::player::playable_cards(hand, count).into_iter().min()
///     }
/// }
/// ```
pub trait Player {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Chooses the cards to send to the crib.
    ///
    /// Must return exactly [`CRIB_DISCARDS`] distinct cards from `hand`.
    fn select_crib_cards(
        &mut self,
        hand: &[Card],
        dealer_is_self: bool,
        your_score: u32,
        opponent_score: u32,
    ) -> Vec<Card>;

    /// Chooses a card to play, or `None` to say go.
    ///
    /// `table` holds the cards of the current sequence and `count` its
    /// running total. A card that is not in `hand` or that would take the
    /// count past 31 is treated as go.
    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        table: &[Card],
        count: u32,
        crib: &[Card],
    ) -> Option<Card>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_crib_cards(
        &mut self,
        hand: &[Card],
        dealer_is_self: bool,
        your_score: u32,
        opponent_score: u32,
    ) -> Vec<Card> {
        (**self).select_crib_cards(hand, dealer_is_self, your_score, opponent_score)
    }

    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        table: &[Card],
        count: u32,
        crib: &[Card],
    ) -> Option<Card> {
        (**self).select_card_to_play(hand, table, count, crib)
    }
}

/// Returns whether `card` can be played at `count` without passing 31.
#[must_use]
pub fn is_playable(card: &Card, count: u32) -> bool {
    count + u32::from(card.value()) <= PEG_LIMIT
}

/// Returns the cards of `hand` that can be played at `count`.
#[must_use]
pub fn playable_cards(hand: &[Card], count: u32) -> Vec<Card> {
    hand.iter()
        .filter(|card| is_playable(card, count))
        .copied()
        .collect()
}

/// Every way of splitting `hand` into kept cards and two discards.
pub(crate) fn discard_splits(hand: &[Card]) -> Vec<(Vec<Card>, [Card; 2])> {
    let mut splits = Vec::new();
    for first in 0..hand.len() {
        for second in first + 1..hand.len() {
            let kept = hand
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != first && *i != second)
                .map(|(_, card)| *card)
                .collect();
            splits.push((kept, [hand[first], hand[second]]));
        }
    }
    splits
}

/// Plays the card that pegs the most points right now, preferring the
/// highest card on ties.
pub(crate) fn greedy_play(hand: &[Card], table: &[Card], count: u32) -> Option<Card> {
    playable_cards(hand, count)
        .into_iter()
        .map(|card| {
            let mut sequence = table.to_vec();
            sequence.push(card);
            (score_play(&sequence).points, card.value(), card)
        })
        .max_by_key(|(points, value, _)| (*points, *value))
        .map(|(_, _, card)| card)
}
