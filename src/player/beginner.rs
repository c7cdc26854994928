use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::score::score_hand;

use super::{Player, discard_splits, greedy_play};

/// Keeps the four cards that count best on their own and pegs greedily.
///
/// Discards are judged by the kept hand's value without a starter, plus the
/// value of the discards when the crib is ours, minus it otherwise.
#[derive(Debug, Clone)]
pub struct BeginnerPlayer {
    name: String,
}

impl BeginnerPlayer {
    /// Creates a player.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for BeginnerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_crib_cards(
        &mut self,
        hand: &[Card],
        dealer_is_self: bool,
        _your_score: u32,
        _opponent_score: u32,
    ) -> Vec<Card> {
        let mut best: Option<(i64, [Card; 2])> = None;
        for (kept, discards) in discard_splits(hand) {
            let kept_score = i64::from(score_hand(&kept, None, false));
            let crib_score = i64::from(score_hand(&discards, None, true));
            let total = if dealer_is_self {
                kept_score + crib_score
            } else {
                kept_score - crib_score
            };
            if best.is_none_or(|(best_total, _)| total > best_total) {
                best = Some((total, discards));
            }
        }
        best.map(|(_, discards)| discards.to_vec())
            .unwrap_or_default()
    }

    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        table: &[Card],
        count: u32,
        _crib: &[Card],
    ) -> Option<Card> {
        greedy_play(hand, table, count)
    }
}
