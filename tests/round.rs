//! Round state machine tests.

use cribrs::card::build_hand;
use cribrs::round::HEELS_POINTS;
use cribrs::{
    Board, Card, Deck, FirstCardPlayer, IllegalCardChoice, Player, RandomPlayer, Round,
    RoundError, RoundEvent, RoundHistory, RoundOutcome, RoundPhase, Seat,
};

fn cards(codes: &[&str]) -> Vec<Card> {
    build_hand(codes).unwrap()
}

/// Builds a deck that deals `non_dealer` and `dealer` alternately, non-dealer
/// first, then turns `starter`.
fn stacked_deck(non_dealer: &[&str], dealer: &[&str], starter: &str) -> Deck {
    let mut draws = Vec::new();
    for (a, b) in cards(non_dealer).into_iter().zip(cards(dealer)) {
        draws.push(a);
        draws.push(b);
    }
    draws.push(starter.parse().unwrap());
    draws.reverse();
    Deck::from_cards(draws, 0)
}

fn stacked_round(
    dealer: Seat,
    non_dealer_hand: &[&str],
    dealer_hand: &[&str],
    starter: &str,
) -> Round {
    Round::with_deck(dealer, stacked_deck(non_dealer_hand, dealer_hand, starter))
        .with_cut_point(0)
}

fn first_card_players() -> (FirstCardPlayer, FirstCardPlayer) {
    (FirstCardPlayer::new("first"), FirstCardPlayer::new("second"))
}

/// Returns a fixed set of discards and never plays.
struct FixedDiscards(Vec<Card>);

impl Player for FixedDiscards {
    fn name(&self) -> &str {
        "fixed"
    }

    fn select_crib_cards(&mut self, _: &[Card], _: bool, _: u32, _: u32) -> Vec<Card> {
        self.0.clone()
    }

    fn select_card_to_play(
        &mut self,
        _: &[Card],
        _: &[Card],
        _: u32,
        _: &[Card],
    ) -> Option<Card> {
        None
    }
}

/// Tries a card it does not hold once, then plays like [`FirstCardPlayer`].
struct OffHandOnce {
    inner: FirstCardPlayer,
    card: Option<Card>,
}

impl Player for OffHandOnce {
    fn name(&self) -> &str {
        "off-hand"
    }

    fn select_crib_cards(
        &mut self,
        hand: &[Card],
        dealer: bool,
        ours: u32,
        theirs: u32,
    ) -> Vec<Card> {
        self.inner.select_crib_cards(hand, dealer, ours, theirs)
    }

    fn select_card_to_play(
        &mut self,
        hand: &[Card],
        table: &[Card],
        count: u32,
        crib: &[Card],
    ) -> Option<Card> {
        self.card
            .take()
            .or_else(|| self.inner.select_card_to_play(hand, table, count, crib))
    }
}

// Dealer keeps four tens, non-dealer keeps four queens; jacks go to the crib.
const TENS: [&str; 6] = ["js", "jc", "10h", "10d", "10c", "10s"];
const QUEENS: [&str; 6] = ["jh", "jd", "qh", "qd", "qc", "qs"];

#[test]
fn plays_full_round_with_go_points() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let outcome = round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(outcome, RoundOutcome::Completed);
    assert_eq!(round.phase(), RoundPhase::Done);

    assert_eq!(round.kept(Seat::First), cards(&["10h", "10d", "10c", "10s"]));
    assert_eq!(round.kept(Seat::Second), cards(&["qh", "qd", "qc", "qs"]));
    assert_eq!(round.crib(), cards(&["jh", "jd", "js", "jc"]));
    assert_eq!(round.starter(), Some("kc".parse().unwrap()));

    // Second takes both go points and leads after each; first then plays out
    // its last two tens alone, pairing them and taking the last card.
    assert_eq!(
        round.table(),
        cards(&["qh", "10h", "qd", "qc", "10d", "qs", "10c", "10s"])
    );

    let history = round.history();
    assert_eq!(history.score_after_pegging, Some([3, 2]));
    assert_eq!(history.hand_scores, [Some(12), Some(12)]);
    // Four jacks and the jack of clubs matches the starter.
    assert_eq!(history.crib_score, Some(13));
    assert_eq!(history.score_after_hands, Some([28, 14]));
    assert_eq!(board.scores(), [28, 14]);
    assert_eq!(history.points(Seat::First), 28);
    assert_eq!(history.points(Seat::Second), 14);

    let go_points: Vec<Seat> = history
        .events
        .iter()
        .filter_map(|event| match event {
            RoundEvent::GoPoint { seat, .. } => Some(*seat),
            _ => None,
        })
        .collect();
    assert_eq!(go_points, vec![Seat::Second, Seat::Second, Seat::First]);
}

#[test]
fn thirty_one_scores_one_and_resets_count() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let dealer_hand = ["js", "jc", "10h", "ad", "10c", "10s"];
    let mut round = stacked_round(Seat::First, &QUEENS, &dealer_hand, "kc");

    round.play([&mut first, &mut second], &mut board).unwrap();

    // The ace makes 31, then its player leads the next sequence.
    assert_eq!(
        round.table(),
        cards(&["qh", "10h", "qd", "ad", "10c", "qc", "10s", "qs"])
    );
    let history = round.history();
    assert_eq!(history.score_after_pegging, Some([2, 1]));

    let ace: Card = "ad".parse().unwrap();
    let position = history
        .events
        .iter()
        .position(|event| matches!(event, RoundEvent::Played { card, .. } if *card == ace))
        .unwrap();
    assert_eq!(
        history.events[position],
        RoundEvent::Played {
            seat: Seat::First,
            card: ace,
            count: 31
        }
    );
    assert!(matches!(
        &history.events[position + 1],
        RoundEvent::Scored { seat: Seat::First, points: 1, .. }
    ));
    assert_eq!(
        history.events[position + 2],
        RoundEvent::Played {
            seat: Seat::First,
            card: "10c".parse().unwrap(),
            count: 10
        }
    );
}

#[test]
fn pegging_win_skips_the_show() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    board.peg(Seat::Second, 120).unwrap();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let outcome = round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Won {
            seat: Seat::Second,
            phase: RoundPhase::Pegging
        }
    );
    assert_eq!(round.table(), cards(&["qh", "10h", "qd"]));
    assert_eq!(board.score(Seat::Second), 121);

    let history = round.history();
    assert_eq!(history.score_after_pegging, None);
    assert_eq!(history.hand_scores, [None, None]);
    assert_eq!(history.crib_score, None);
    assert_eq!(history.events.last(), Some(&RoundEvent::Won { seat: Seat::Second }));
}

#[test]
fn heels_can_end_the_round() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    board.peg(Seat::First, 119).unwrap();
    let mut round = stacked_round(
        Seat::First,
        &["2d", "3d", "4d", "5d", "6d", "7d"],
        &["2c", "3c", "4c", "5c", "6c", "7c"],
        "jh",
    );

    let outcome = round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Won {
            seat: Seat::First,
            phase: RoundPhase::CutStarter
        }
    );
    assert!(round.table().is_empty());
    let history = round.history();
    assert_eq!(
        history.events[0],
        RoundEvent::Heels {
            seat: Seat::First,
            card: "jh".parse().unwrap()
        }
    );
    assert_eq!(history.events[0].pegged(), Some((Seat::First, HEELS_POINTS)));
    assert_eq!(history.points(Seat::First), HEELS_POINTS);
}

#[test]
fn show_win_stops_before_dealer_counts() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    // Pegging gives second 2 points; the queens then count 12.
    board.peg(Seat::Second, 110).unwrap();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let outcome = round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Won {
            seat: Seat::Second,
            phase: RoundPhase::HandScoring
        }
    );
    let history = round.history();
    assert_eq!(history.hand_scores, [None, Some(12)]);
    assert_eq!(history.crib_score, None);
}

#[test]
fn dealer_hand_win_skips_crib() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    // Pegging takes the dealer to 109; the tens then count 12.
    board.peg(Seat::First, 106).unwrap();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let outcome = round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Won {
            seat: Seat::First,
            phase: RoundPhase::HandScoring
        }
    );
    assert_eq!(board.scores(), [121, 14]);

    let history = round.history();
    assert_eq!(history.score_after_pegging, Some([109, 2]));
    assert_eq!(history.hand_scores, [Some(12), Some(12)]);
    assert_eq!(history.crib_score, None);
    assert_eq!(history.score_after_hands, None);
    assert!(
        !history
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::CribCounted { .. }))
    );
    assert_eq!(history.events.last(), Some(&RoundEvent::Won { seat: Seat::First }));
}

#[test]
fn last_card_thirty_one_scores_once() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let mut round = stacked_round(
        Seat::First,
        &["kh", "kd", "ah", "2h", "4h", "9h"],
        &["ks", "kc", "ac", "2c", "4c", "8c"],
        "qd",
    );

    round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        round.table(),
        cards(&["ah", "ac", "2h", "2c", "4h", "4c", "9h", "8c"])
    );

    // Three pairs and the 31; the last card earns nothing more.
    let history = round.history();
    assert_eq!(history.score_after_pegging, Some([7, 0]));
    assert!(
        !history
            .events
            .iter()
            .any(|event| matches!(event, RoundEvent::GoPoint { .. }))
    );

    let last_play = history
        .events
        .iter()
        .rposition(|event| matches!(event, RoundEvent::Played { .. }))
        .unwrap();
    assert_eq!(
        history.events[last_play],
        RoundEvent::Played {
            seat: Seat::First,
            card: "8c".parse().unwrap(),
            count: 31
        }
    );
    assert!(matches!(
        &history.events[last_play + 1],
        RoundEvent::Scored { seat: Seat::First, points: 1, .. }
    ));
    assert!(matches!(
        &history.events[last_play + 2],
        RoundEvent::HandCounted { seat: Seat::Second, .. }
    ));
}

#[test]
fn rejects_wrong_discard_count() {
    for discards in [cards(&["qh"]), cards(&["qh", "qd", "qc"])] {
        let mut first = FirstCardPlayer::new("first");
        let mut second = FixedDiscards(discards.clone());
        let mut board = Board::default();
        let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

        let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
        assert_eq!(
            error,
            RoundError::IllegalCardChoice {
                seat: Seat::Second,
                reason: IllegalCardChoice::WrongCount {
                    expected: 2,
                    actual: discards.len()
                }
            }
        );
        assert!(round.crib().is_empty());
        assert_eq!(round.starter(), None);
    }
}

#[test]
fn rejects_discard_not_in_hand() {
    let mut first = FirstCardPlayer::new("first");
    let mut second = FixedDiscards(cards(&["qh", "ah"]));
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
    assert_eq!(
        error,
        RoundError::IllegalCardChoice {
            seat: Seat::Second,
            reason: IllegalCardChoice::NotInHand("ah".parse().unwrap())
        }
    );
}

#[test]
fn rejects_duplicate_discard() {
    let mut first = FixedDiscards(cards(&["10h", "10h"]));
    let mut second = FirstCardPlayer::new("second");
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
    assert_eq!(
        error,
        RoundError::IllegalCardChoice {
            seat: Seat::First,
            reason: IllegalCardChoice::DuplicateCard("10h".parse().unwrap())
        }
    );
}

#[test]
fn stalled_pegging_fails_the_round() {
    let mut first = FixedDiscards(cards(&["js", "jc"]));
    let mut second = FixedDiscards(cards(&["jh", "jd"]));
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
    assert!(matches!(
        error,
        RoundError::IllegalCardChoice {
            reason: IllegalCardChoice::NoCardPlayed,
            ..
        }
    ));
}

#[test]
fn off_hand_card_counts_as_go() {
    let mut first = FirstCardPlayer::new("first");
    let mut second = OffHandOnce {
        inner: FirstCardPlayer::new("second"),
        card: Some("ah".parse().unwrap()),
    };
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    round.play([&mut first, &mut second], &mut board).unwrap();
    assert_eq!(
        round.history().events[0],
        RoundEvent::Go {
            seat: Seat::Second,
            count: 0
        }
    );
    assert_eq!(round.table().len(), 8);
}

#[test]
fn short_deck_is_an_error() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let mut draws = Vec::new();
    for (a, b) in cards(&QUEENS).into_iter().zip(cards(&TENS)) {
        draws.push(a);
        draws.push(b);
    }
    draws.reverse();
    let mut round = Round::with_deck(Seat::First, Deck::from_cards(draws, 0)).with_cut_point(0);

    let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
    assert_eq!(error, RoundError::NotEnoughCards);
}

#[test]
fn round_is_played_once() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");

    round.play([&mut first, &mut second], &mut board).unwrap();
    let error = round.play([&mut first, &mut second], &mut board).unwrap_err();
    assert_eq!(error, RoundError::RoundComplete);
}

#[test]
fn seeded_rounds_are_deterministic() {
    let play = || {
        let mut first = RandomPlayer::new("first", 3);
        let mut second = RandomPlayer::new("second", 4);
        let mut board = Board::default();
        let mut round = Round::new(Seat::Second, 99);
        round.play([&mut first, &mut second], &mut board).unwrap();
        (round.into_history(), board.scores())
    };

    let (a, a_scores) = play();
    let (b, b_scores) = play();
    assert_eq!(a, b);
    assert_eq!(a_scores, b_scores);
    assert_eq!(a.cards_dealt[0].len(), 6);
    assert_eq!(a.crib.len(), 4);
    assert_eq!(a.table.len(), 8);
}

#[test]
fn history_serializes_and_displays() {
    let (mut first, mut second) = first_card_players();
    let mut board = Board::default();
    let mut round = stacked_round(Seat::First, &QUEENS, &TENS, "kc");
    round.play([&mut first, &mut second], &mut board).unwrap();

    let history = round.history();
    let json = serde_json::to_string(history).unwrap();
    let decoded: RoundHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, history);

    let report = history.to_string();
    assert!(report.contains("dealer: first"));
    assert!(report.contains("score after hands: Some([28, 14])"));
}
