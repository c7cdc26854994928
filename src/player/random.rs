use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

use super::{CRIB_DISCARDS, Player, playable_cards};

/// Discards and plays uniformly at random from its own seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a player with its own generator seeded from `seed`.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rewinds the generator to its initial seed.
    pub fn reset_rng(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl Player for RandomPlayer {
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
        hand.choose_multiple(&mut self.rng, CRIB_DISCARDS)
            .copied()
            .collect()
    }

    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        _table: &[Card],
        count: u32,
        _crib: &[Card],
    ) -> Option<Card> {
        playable_cards(hand, count).choose(&mut self.rng).copied()
    }
}
