//! Scoring rules for pegging and for the show.
//!
//! Every rule is a variant of [`Rule`] and shares one contract: it takes a
//! slice of cards and returns a [`Score`]. Rules never fail; a slice too short
//! for a rule simply scores zero. The aggregate scorers [`score_play`] and
//! [`score_hand`] evaluate a fixed list of rules and sum the results.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::card::{Card, Rank};

/// Highest running count allowed during pegging.
pub const PEG_LIMIT: u32 = 31;

/// Target of the fifteens rules.
pub const FIFTEEN: u32 = 15;

/// Points and a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Points earned.
    pub points: u32,
    /// Why the points were earned; empty when no points were earned.
    pub description: String,
}

impl Score {
    fn new(points: u32, description: String) -> Self {
        Self {
            points,
            description,
        }
    }

    /// A score of zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            points: 0,
            description: String::new(),
        }
    }

    /// Sums several scores, joining their descriptions.
    pub fn combine<I: IntoIterator<Item = Self>>(scores: I) -> Self {
        scores.into_iter().fold(Self::zero(), |mut total, score| {
            if score.points > 0 {
                if !total.description.is_empty() {
                    total.description.push_str(", ");
                }
                total.description.push_str(&score.description);
                total.points += score.points;
            }
            total
        })
    }
}

/// A single scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Two points for every distinct subset of cards summing to 15.
    Fifteens,
    /// Points when the running count equals the target exactly: 2 for 15,
    /// 1 for 31.
    ExactlyN(u32),
    /// Pair, pair royal or double pair royal at the end of the sequence.
    TrailingPairs,
    /// Every pair of equal ranks anywhere in the cards.
    Pairs,
    /// The longest run formed by the last cards of the sequence.
    TrailingRun,
    /// Every maximal run of three or more ranks, with duplicates scored as
    /// separate runs.
    Runs,
    /// Four or five cards of one suit.
    Flush {
        /// Whether the cards are a crib (all five cards must match).
        is_crib: bool,
        /// The starter card, if it has been cut.
        starter: Option<Card>,
    },
    /// One point for a jack of the starter's suit.
    Nobs {
        /// The starter card, if it has been cut.
        starter: Option<Card>,
    },
}

/// Rules applied after each card played during pegging.
pub const PLAY_RULES: [Rule; 4] = [
    Rule::ExactlyN(FIFTEEN),
    Rule::ExactlyN(PEG_LIMIT),
    Rule::TrailingPairs,
    Rule::TrailingRun,
];

/// Rules applied to a hand or crib at the end of a round.
#[must_use]
pub const fn hand_rules(starter: Option<Card>, is_crib: bool) -> [Rule; 5] {
    [
        Rule::Fifteens,
        Rule::Nobs { starter },
        Rule::Pairs,
        Rule::Runs,
        Rule::Flush { is_crib, starter },
    ]
}

impl Rule {
    /// Evaluates the rule against `cards`.
    ///
    /// For [`Rule::Flush`] and [`Rule::Nobs`] the cards are the hand without
    /// the starter; the starter is part of the rule itself.
    #[must_use]
    pub fn check(&self, cards: &[Card]) -> Score {
        match *self {
            Self::Fifteens => fifteens(cards),
            Self::ExactlyN(target) => exactly(cards, target),
            Self::TrailingPairs => trailing_pairs(cards),
            Self::Pairs => pairs(cards),
            Self::TrailingRun => trailing_run(cards),
            Self::Runs => runs(cards),
            Self::Flush { is_crib, starter } => flush(cards, starter, is_crib),
            Self::Nobs { starter } => nobs(cards, starter),
        }
    }

    /// Whether the rule is evaluated over the hand plus the starter.
    #[must_use]
    pub const fn includes_starter(&self) -> bool {
        !matches!(self, Self::Flush { .. } | Self::Nobs { .. })
    }
}

fn total_value(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.value())).sum()
}

const fn pair_points(same: u32) -> u32 {
    // n cards of a rank form n * (n - 1) / 2 pairs worth 2 each
    same * same.saturating_sub(1)
}

const fn pair_name(same: u32) -> &'static str {
    match same {
        2 => "Pair",
        3 => "Pair Royal",
        _ => "Double Pair Royal",
    }
}

fn fifteens(cards: &[Card]) -> Score {
    // ways[s] counts the subsets seen so far that sum to s
    let mut ways = [0_u32; FIFTEEN as usize + 1];
    ways[0] = 1;
    for card in cards {
        let value = usize::from(card.value());
        for sum in (value..ways.len()).rev() {
            ways[sum] += ways[sum - value];
        }
    }
    let count = ways[FIFTEEN as usize];
    if count == 0 {
        return Score::zero();
    }
    Score::new(count * 2, format!("{count} unique {FIFTEEN}-counts"))
}

fn exactly(cards: &[Card], target: u32) -> Score {
    if cards.is_empty() || total_value(cards) != target {
        return Score::zero();
    }
    let points = if target == PEG_LIMIT { 1 } else { 2 };
    Score::new(points, format!("{target} count"))
}

fn trailing_pairs(cards: &[Card]) -> Score {
    let Some(last) = cards.last() else {
        return Score::zero();
    };
    let same = cards
        .iter()
        .rev()
        .take(4)
        .take_while(|card| card.rank == last.rank)
        .count() as u32;
    if same < 2 {
        return Score::zero();
    }
    Score::new(
        pair_points(same),
        format!("{} ({})", pair_name(same), last.rank.symbol()),
    )
}

fn rank_counts(cards: &[Card]) -> [u32; 14] {
    let mut counts = [0_u32; 14];
    for card in cards {
        counts[usize::from(card.rank.ordinal())] += 1;
    }
    counts
}

fn pairs(cards: &[Card]) -> Score {
    let counts = rank_counts(cards);
    let mut points = 0;
    let mut parts = Vec::new();
    for (ordinal, &same) in counts.iter().enumerate() {
        if same < 2 {
            continue;
        }
        points += pair_points(same);
        let symbol = Rank::from_ordinal(ordinal as u8).map_or("?", Rank::symbol);
        parts.push(format!("{} ({symbol})", pair_name(same)));
    }
    if points == 0 {
        return Score::zero();
    }
    Score::new(points, parts.join(", "))
}

fn is_run(cards: &[Card]) -> bool {
    if cards.len() < 3 {
        return false;
    }
    let counts = rank_counts(cards);
    if counts.iter().any(|&same| same > 1) {
        return false;
    }
    let (min, max) = cards.iter().fold((u8::MAX, u8::MIN), |(lo, hi), card| {
        let ordinal = card.rank.ordinal();
        (lo.min(ordinal), hi.max(ordinal))
    });
    usize::from(max - min) + 1 == cards.len()
}

fn trailing_run(cards: &[Card]) -> Score {
    (0..cards.len())
        .map(|start| &cards[start..])
        .take_while(|window| window.len() >= 3)
        .find(|window| is_run(window))
        .map_or_else(Score::zero, |window| {
            let len = window.len() as u32;
            Score::new(len, format!("{len}-card straight"))
        })
}

fn runs(cards: &[Card]) -> Score {
    // A maximal run uses one card from each rank of a block of consecutive
    // ranks, so every block of three or more ranks scores its length once per
    // combination of duplicate cards.
    let counts = rank_counts(cards);
    let mut points = 0;
    let mut parts = Vec::new();
    let mut ordinal = 1;
    while ordinal < counts.len() {
        if counts[ordinal] == 0 {
            ordinal += 1;
            continue;
        }
        let start = ordinal;
        let mut combinations = 1;
        while ordinal < counts.len() && counts[ordinal] > 0 {
            combinations *= counts[ordinal];
            ordinal += 1;
        }
        let len = (ordinal - start) as u32;
        if len >= 3 {
            points += len * combinations;
            for _ in 0..combinations {
                parts.push(format!("{len}-card straight"));
            }
        }
    }
    if points == 0 {
        return Score::zero();
    }
    Score::new(points, parts.join(" "))
}

fn flush(cards: &[Card], starter: Option<Card>, is_crib: bool) -> Score {
    let Some(first) = cards.first() else {
        return Score::zero();
    };
    if cards.len() < 4 || cards.iter().any(|card| card.suit != first.suit) {
        return Score::zero();
    }
    let starter_matches = starter.is_some_and(|starter| starter.suit == first.suit);
    let points = if starter_matches {
        cards.len() as u32 + 1
    } else if is_crib {
        0
    } else {
        cards.len() as u32
    };
    if points == 0 {
        return Score::zero();
    }
    Score::new(points, format!("{points}-card flush"))
}

fn nobs(cards: &[Card], starter: Option<Card>) -> Score {
    let Some(starter) = starter else {
        return Score::zero();
    };
    let found = cards
        .iter()
        .any(|card| *card != starter && card.is_jack() && card.suit == starter.suit);
    if found {
        Score::new(1, String::from("Jack matches starter suit"))
    } else {
        Score::zero()
    }
}

fn evaluate(rules: &[Rule], hand: &[Card], with_starter: &[Card], context: &str) -> Vec<Score> {
    rules
        .iter()
        .map(|rule| rule.check(if rule.includes_starter() { with_starter } else { hand }))
        .filter(|score| score.points > 0)
        .inspect(|score| trace!(context = context, points = score.points, "{}", score.description))
        .collect()
}

/// Scores the most recent card of a pegging sequence, rule by rule.
///
/// `sequence` holds the cards of the open sequence, oldest first.
#[must_use]
pub fn score_play_breakdown(sequence: &[Card]) -> Vec<Score> {
    evaluate(&PLAY_RULES, sequence, sequence, "play")
}

/// Scores the most recent card of a pegging sequence.
///
/// # Example
///
/// ```
/// use cribrs::card::build_hand;
/// use cribrs::score::score_play;
///
/// let sequence = build_hand(&["7h", "8c"]).unwrap();
/// assert_eq!(score_play(&sequence).points, 2);
/// ```
#[must_use]
pub fn score_play(sequence: &[Card]) -> Score {
    Score::combine(score_play_breakdown(sequence))
}

/// Scores a hand or crib at the end of a round, rule by rule.
///
/// `hand` excludes the starter. Fifteens, pairs and runs are counted over
/// the hand plus the starter; flush and nobs receive the starter separately.
#[must_use]
pub fn score_hand_breakdown(hand: &[Card], starter: Option<Card>, is_crib: bool) -> Vec<Score> {
    let mut with_starter = hand.to_vec();
    with_starter.extend(starter);
    let context = if is_crib { "crib" } else { "hand" };
    evaluate(&hand_rules(starter, is_crib), hand, &with_starter, context)
}

/// Scores a hand or crib at the end of a round.
///
/// # Example
///
/// ```
/// use cribrs::card::build_hand;
/// use cribrs::score::score_hand;
///
/// let hand = build_hand(&["5s", "5c", "6d", "10h"]).unwrap();
/// let starter = "4s".parse().unwrap();
/// assert_eq!(score_hand(&hand, Some(starter), false), 16);
/// ```
#[must_use]
pub fn score_hand(hand: &[Card], starter: Option<Card>, is_crib: bool) -> u32 {
    score_hand_breakdown(hand, starter, is_crib)
        .iter()
        .map(|score| score.points)
        .sum()
}
