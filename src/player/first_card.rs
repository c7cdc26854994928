use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

use super::{CRIB_DISCARDS, Player, playable_cards};

/// Discards its first two cards and always plays its first legal card.
///
/// Fully deterministic, which makes it useful for reproducible rounds.
#[derive(Debug, Clone)]
pub struct FirstCardPlayer {
    name: String,
}

impl FirstCardPlayer {
    /// Creates a player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstCardPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_crib_cards(
        &mut self,
        hand: &[Card],
        _dealer_is_self: bool,
        _your_score: u32,
        _opponent_score: u32,
    ) -> Vec<Card> {
        hand.iter().take(CRIB_DISCARDS).copied().collect()
    }

    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        _table: &[Card],
        count: u32,
        _crib: &[Card],
    ) -> Option<Card> {
        playable_cards(hand, count).first().copied()
    }
}
