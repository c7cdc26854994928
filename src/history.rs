//! Round history for display and debugging.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::round::{HEELS_POINTS, Seat};
use crate::score::Score;

/// Something that happened during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The starter was a jack; the dealer pegged [`HEELS_POINTS`].
    Heels {
        /// The dealer.
        seat: Seat,
        /// The starter card.
        card: Card,
    },
    /// A card was played to the table.
    Played {
        /// Who played it.
        seat: Seat,
        /// The card played.
        card: Card,
        /// Running count after the card.
        count: u32,
    },
    /// A player could not (or would not) play.
    Go {
        /// Who said go.
        seat: Seat,
        /// Running count at the time.
        count: u32,
    },
    /// Points scored by the card just played.
    Scored {
        /// Who scored.
        seat: Seat,
        /// Points pegged.
        points: u32,
        /// Why.
        reason: String,
    },
    /// One point for the last card of a sequence that did not reach 31.
    GoPoint {
        /// Who scored.
        seat: Seat,
        /// Running count when the sequence closed.
        count: u32,
    },
    /// A hand was counted in the show.
    HandCounted {
        /// Owner of the hand.
        seat: Seat,
        /// Total points.
        points: u32,
        /// Individual scores.
        breakdown: Vec<Score>,
    },
    /// The crib was counted for the dealer.
    CribCounted {
        /// The dealer.
        seat: Seat,
        /// Total points.
        points: u32,
        /// Individual scores.
        breakdown: Vec<Score>,
    },
    /// A seat reached the winning score.
    Won {
        /// The winner.
        seat: Seat,
    },
}

impl RoundEvent {
    /// Points pegged by this event, with the seat that pegged them.
    #[must_use]
    pub fn pegged(&self) -> Option<(Seat, u32)> {
        match self {
            Self::Heels { seat, .. } => Some((*seat, HEELS_POINTS)),
            Self::Scored { seat, points, .. }
            | Self::HandCounted { seat, points, .. }
            | Self::CribCounted { seat, points, .. } => Some((*seat, *points)),
            Self::GoPoint { seat, .. } => Some((*seat, 1)),
            Self::Played { .. } | Self::Go { .. } | Self::Won { .. } => None,
        }
    }
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heels { seat, card } => {
                write!(f, "dealer {seat} scores {HEELS_POINTS} for heels ({card})")
            }
            Self::Played { seat, card, count } => write!(f, "{seat} plays {card}, count {count}"),
            Self::Go { seat, count } => write!(f, "{seat} says go at {count}"),
            Self::Scored {
                seat,
                points,
                reason,
            } => write!(f, "{seat} scores {points} ({reason})"),
            Self::GoPoint { seat, count } => {
                write!(f, "{seat} scores 1 for last card at {count}")
            }
            Self::HandCounted { seat, points, .. } => write!(f, "{seat} counts {points} in hand"),
            Self::CribCounted { seat, points, .. } => write!(f, "{seat} counts {points} in crib"),
            Self::Won { seat } => write!(f, "{seat} wins"),
        }
    }
}

/// Everything recorded about one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundHistory {
    /// The dealer.
    pub dealer: Seat,
    /// Seed the round's deck was shuffled with.
    pub seed: u64,
    /// Six cards dealt to each seat.
    pub cards_dealt: [Vec<Card>; 2],
    /// The four crib cards.
    pub crib: Vec<Card>,
    /// The starter card, once cut.
    pub starter: Option<Card>,
    /// Every card played, in order, across all sequences.
    pub table: Vec<Card>,
    /// Scores when the round began.
    pub score_at_start: [u32; 2],
    /// Scores once pegging finished, if it finished.
    pub score_after_pegging: Option<[u32; 2]>,
    /// Scores once the show finished, if it finished.
    pub score_after_hands: Option<[u32; 2]>,
    /// Show value of each seat's hand, if counted.
    pub hand_scores: [Option<u32>; 2],
    /// Show value of the crib, if counted.
    pub crib_score: Option<u32>,
    /// Events in the order they happened.
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub(crate) const fn new(dealer: Seat, seed: u64) -> Self {
        Self {
            dealer,
            seed,
            cards_dealt: [Vec::new(), Vec::new()],
            crib: Vec::new(),
            starter: None,
            table: Vec::new(),
            score_at_start: [0; 2],
            score_after_pegging: None,
            score_after_hands: None,
            hand_scores: [None; 2],
            crib_score: None,
            events: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, event: RoundEvent) {
        self.events.push(event);
    }

    /// Total points pegged by a seat during the round.
    #[must_use]
    pub fn points(&self, seat: Seat) -> u32 {
        self.events
            .iter()
            .filter_map(RoundEvent::pegged)
            .filter(|(scorer, _)| *scorer == seat)
            .map(|(_, points)| points)
            .sum()
    }
}

struct Cards<'a>(&'a [Card]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for RoundHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round:")?;
        writeln!(f, "  score at start: {:?}", self.score_at_start)?;
        writeln!(f, "  dealer: {}", self.dealer)?;
        match self.starter {
            Some(card) => writeln!(f, "  starter: {card}")?,
            None => writeln!(f, "  starter: -")?,
        }
        writeln!(f, "  dealt:")?;
        for seat in Seat::ALL {
            writeln!(f, "    {seat}: {}", Cards(&self.cards_dealt[seat.index()]))?;
        }
        writeln!(f, "  crib: {}", Cards(&self.crib))?;
        writeln!(f, "  plays:")?;
        for event in &self.events {
            writeln!(f, "    {event}")?;
        }
        writeln!(f, "  hand scores: {:?}", self.hand_scores)?;
        writeln!(f, "  crib score: {:?}", self.crib_score)?;
        writeln!(f, "  score after pegging: {:?}", self.score_after_pegging)?;
        write!(f, "  score after hands: {:?}", self.score_after_hands)
    }
}
