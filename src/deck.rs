//! The 52-card deck.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Returns the 52 cards of a standard deck in suit-major order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// An ordered deck of cards.
///
/// The "top" of the deck is the end of the underlying vector: [`Deck::draw`]
/// pops from the tail.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Deck;
    ///
    /// let a = Deck::new(7);
    /// let b = Deck::new(7);
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck holding exactly `cards`, in that order.
    ///
    /// The last card of `cards` is drawn first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Cuts the deck, moving the first `cut_point` cards to the end.
    ///
    /// With `None` the cut point is drawn from the deck's generator. Points
    /// beyond the deck length wrap around. Returns the cut point used.
    pub fn cut(&mut self, cut_point: Option<usize>) -> usize {
        let len = self.cards.len();
        if len == 0 {
            return 0;
        }
        let point = cut_point.unwrap_or_else(|| self.rng.random_range(0..len)) % len;
        self.cards.rotate_left(point);
        debug_assert_eq!(self.cards.len(), len, "cards lost in cut");
        point
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the seed the deck's generator started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
