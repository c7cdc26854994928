//! Card types and their text encoding.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCardError;

/// Card suit.
///
/// The declaration order (clubs, diamonds, hearts, spades) is the order used
/// when cards of equal rank are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the unicode symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '\u{2663}',
            Self::Diamonds => '\u{2666}',
            Self::Hearts => '\u{2665}',
            Self::Spades => '\u{2660}',
        }
    }

    /// Returns the uppercase letter of the suit (`C`, `D`, `H` or `S`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(letter: u8) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            b'c' => Some(Self::Clubs),
            b'd' => Some(Self::Diamonds),
            b'h' => Some(Self::Hearts),
            b's' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, from ace (low) to king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in a straight (ace = 1, king = 13).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Counting value of the rank: ace is 1, face cards are 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self as u8,
        }
    }

    /// Returns the rank for an ordinal in `1..=13`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal >= 1 && ordinal <= 13 {
            Some(Self::ALL[(ordinal - 1) as usize])
        } else {
            None
        }
    }

    /// Display symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Single character code, with ten written as `T`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
            other => (b'0' + other as u8) as char,
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "a" => Some(Self::Ace),
            "t" | "10" => Some(Self::Ten),
            "j" => Some(Self::Jack),
            "q" => Some(Self::Queen),
            "k" => Some(Self::King),
            _ => match text.as_bytes() {
                [digit @ b'2'..=b'9'] => Self::from_ordinal(digit - b'0'),
                _ => None,
            },
        }
    }
}

/// A playing card.
///
/// Cards compare by rank first. Equal ranks are ordered by suit so that two
/// distinct cards never compare as equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Counting value of the card (ace 1, faces 10).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is a jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        matches!(self.rank, Rank::Jack)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"ah"`, `"10d"`, `"QS"` and similar rank-then-suit codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if !text.is_ascii() || !(2..=3).contains(&text.len()) {
            return Err(ParseCardError::InvalidLength);
        }

        let lower = text.to_ascii_lowercase();
        let (rank_text, suit_text) = lower.split_at(lower.len() - 1);

        let Some(suit) = Suit::from_letter(suit_text.as_bytes()[0]) else {
            let (head, tail) = lower.split_at(1);
            if Suit::from_letter(head.as_bytes()[0]).is_some() && Rank::parse(tail).is_some() {
                return Err(ParseCardError::SuitFirst);
            }
            return Err(ParseCardError::InvalidSuit);
        };
        let rank = Rank::parse(rank_text).ok_or(ParseCardError::InvalidRank)?;

        Ok(Self::new(rank, suit))
    }
}

/// Builds a list of cards from text codes.
///
/// # Errors
///
/// Returns the first parse error encountered.
///
/// # Example
///
/// ```
/// use cribrs::card::build_hand;
///
/// let hand = build_hand(&["5s", "5c", "6d", "10h"]).unwrap();
/// assert_eq!(hand.len(), 4);
/// ```
pub fn build_hand(codes: &[&str]) -> Result<Vec<Card>, ParseCardError> {
    codes.iter().map(|code| code.parse()).collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
