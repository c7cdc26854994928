use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::score::score_hand;
use crate::stats::StatsTable;

use super::{Player, discard_splits, greedy_play};

/// Keeps the four cards with the best average score over every starter it
/// could still be cut.
///
/// The crib is valued by the discards' own count, added when the crib is
/// ours and subtracted otherwise. Pegging is greedy.
#[derive(Debug, Clone)]
pub struct StatisticalPlayer {
    name: String,
    table: StatsTable,
}

impl StatisticalPlayer {
    /// Creates a player with an empty statistics table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_table(name, StatsTable::new())
    }

    /// Creates a player backed by an existing table.
    #[must_use]
    pub fn with_table(name: impl Into<String>, table: StatsTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Returns the statistics gathered so far.
    #[must_use]
    pub const fn table(&self) -> &StatsTable {
        &self.table
    }
}

impl Player for StatisticalPlayer {
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
        let mut best: Option<(f64, [Card; 2])> = None;
        for (kept, discards) in discard_splits(hand) {
            let Some(stats) = self.table.hand_stats(&kept, &discards) else {
                continue;
            };
            let crib = f64::from(score_hand(&discards, None, true));
            let value = if dealer_is_self {
                stats.avg + crib
            } else {
                stats.avg - crib
            };
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, discards));
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
