//! Hand statistics over every possible starter.
//!
//! Statistics are keyed by a canonical hand key so that the same four cards
//! in any order share one entry.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;

#[cfg(feature = "std")]
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::full_deck;
use crate::score::score_hand;

#[cfg(feature = "std")]
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_hundredths(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

/// Uppercase code of a card, e.g. `TH` or `AS`.
#[must_use]
pub fn card_code(card: &Card) -> String {
    let mut code = String::with_capacity(2);
    code.push(card.rank.code());
    code.push(card.suit.letter());
    code
}

/// Canonical key for a set of cards.
///
/// Cards are sorted by rank, then by suit (clubs, diamonds, hearts, spades),
/// and their codes joined with `|`.
///
/// # Example
///
/// ```
/// use cribrs::card::build_hand;
/// use cribrs::stats::hand_key;
///
/// let hand = build_hand(&["7d", "5h", "6c", "2h"]).unwrap();
/// assert_eq!(hand_key(&hand), "2H|5H|6C|7D");
/// ```
#[must_use]
pub fn hand_key(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| (card.rank, card.suit));
    sorted.iter().map(card_code).collect::<Vec<_>>().join("|")
}

/// Minimum, average and maximum show score of a kept hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandStats {
    /// Lowest score over all starters.
    pub min: u32,
    /// Average score, rounded to two decimals.
    pub avg: f64,
    /// Highest score over all starters.
    pub max: u32,
}

/// Computes statistics for `kept` over every starter that is neither in
/// `kept` nor in `excluded`.
///
/// Returns `None` when no starter remains.
#[must_use]
pub fn exact_hand_stats(kept: &[Card], excluded: &[Card]) -> Option<HandStats> {
    let scores: Vec<u32> = full_deck()
        .into_iter()
        .filter(|card| !kept.contains(card) && !excluded.contains(card))
        .map(|starter| score_hand(kept, Some(starter), false))
        .collect();

    let min = scores.iter().copied().min()?;
    let max = scores.iter().copied().max()?;
    let total: u32 = scores.iter().sum();
    let count = u32::try_from(scores.len()).ok()?;

    Some(HandStats {
        min,
        avg: round_hundredths(f64::from(total) / f64::from(count)),
        max,
    })
}

/// In-memory cache of [`HandStats`] keyed by [`hand_key`].
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    entries: HashMap<String, HandStats>,
}

impl StatsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&HandStats> {
        self.entries.get(key)
    }

    /// Stores an entry, returning the previous one.
    pub fn insert(&mut self, key: String, stats: HandStats) -> Option<HandStats> {
        self.entries.insert(key, stats)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the statistics of a kept hand, computing and storing them on
    /// first use.
    ///
    /// Cards in `discarded` are never counted as starters. Entries are keyed
    /// by the kept hand, followed by `/` and the discards when there are any.
    pub fn hand_stats(&mut self, kept: &[Card], discarded: &[Card]) -> Option<HandStats> {
        let mut key = hand_key(kept);
        if !discarded.is_empty() {
            key.push('/');
            key.push_str(&hand_key(discarded));
        }
        if let Some(stats) = self.entries.get(&key) {
            return Some(*stats);
        }
        let stats = exact_hand_stats(kept, discarded)?;
        self.entries.insert(key, stats);
        Some(stats)
    }
}
