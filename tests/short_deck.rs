use poker_odds::cards::Rank;
use poker_odds::deck::Deck;
use poker_odds::equity::{calculate, EquityError, Odds, Options};
use poker_odds::evaluator::{evaluate, Category};
use poker_odds::hand::CardGroup;
use poker_odds::variants::{Variant, SHORT_DECK, STANDARD};

fn group(s: &str) -> CardGroup {
    s.parse().expect("valid cards")
}

fn short(iterations: u64) -> Options {
    Options::default().with_variant(Variant::ShortDeck).with_iterations(iterations).with_seed(6)
}

fn odds(hands: &[&str], board: Option<&str>, options: &Options) -> Result<Odds, EquityError> {
    let hands: Vec<CardGroup> = hands.iter().map(|h| group(h)).collect();
    let board = board.map(group);
    calculate(&hands, board.as_ref(), options)
}

#[test]
fn no_board() {
    let o = odds(&["AcAh", "JdTd"], None, &short(10_000)).unwrap();
    let eq = o.equities();
    assert!((61..=67).contains(&eq[0].equity()), "{eq:?}");
    assert!((34..=38).contains(&eq[1].equity()), "{eq:?}");
}

#[test]
fn exact_flop_and_turn_odds() {
    let o = odds(&["AhQd", "JsTs"], Some("9s9h8c"), &short(10_000)).unwrap();
    let eq = o.equities();
    assert_eq!((eq[0].equity(), eq[0].tie_percentage()), (35, 2));
    assert_eq!((eq[1].equity(), eq[1].tie_percentage()), (63, 2));

    let o = odds(&["AhQd", "JsTs"], Some("9s9h8c8s"), &short(500)).unwrap();
    assert_eq!(o.iterations(), 28);
    let eq = o.equities();
    assert_eq!((eq[0].equity(), eq[0].tie_percentage()), (29, 14));
    assert_eq!((eq[1].equity(), eq[1].tie_percentage()), (57, 14));
}

#[test]
fn flush_beats_full_house() {
    let o = odds(&["7d6d", "KhKc"], Some("Kd9dAdTsAs"), &short(1)).unwrap();
    assert_eq!(o.equities()[0].equity(), 100);
    assert_eq!(o.equities()[1].equity(), 0);
    assert_eq!(o.hand_rank(0).unwrap().category, Category::Flush);
    assert_eq!(o.hand_rank(1).unwrap().category, Category::FullHouse);

    // Same cards, standard ranking
    let full = Options::default().with_iterations(1);
    let o = odds(&["7d6d", "KhKc"], Some("Kd9dAdTsAs"), &full).unwrap();
    assert_eq!(o.equities()[1].equity(), 100);
}

#[test]
fn ace_six_through_nine_is_a_straight() {
    let cards = group("7d6d").concat(&group("8d9cAdJsAs"));
    let e = evaluate(&SHORT_DECK, cards.as_slice()).unwrap();
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tie_break_ranks(), [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Ace]);
    assert_eq!(e.to_string(), "Nine high straight");

    let e = evaluate(&STANDARD, cards.as_slice()).unwrap();
    assert_eq!(e.category, Category::Pair);
}

#[test]
fn ace_six_through_nine_suited_is_a_straight_flush() {
    let cards = group("7d6d").concat(&group("8d9dAdTsAs"));
    let e = evaluate(&SHORT_DECK, cards.as_slice()).unwrap();
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tie_break_ranks(), [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Ace]);
    assert_eq!(e.to_string(), "Nine high straight flush");
}

#[test]
fn low_cards_are_out_of_range() {
    let err = odds(&["AcAh", "Jd5d"], None, &short(100)).unwrap_err();
    assert!(matches!(err, EquityError::RankOutOfRange { min: Rank::Six, .. }));
    assert!(err.to_string().contains("only ranks 6 through A are valid"));

    let err = odds(&["KsQs", "AdTd"], Some("JsTs5c"), &short(100)).unwrap_err();
    assert_eq!(
        err,
        EquityError::RankOutOfRange { card: "5c".parse().unwrap(), min: Rank::Six }
    );
}

#[test]
fn deck_only_has_six_through_ace() {
    let deck = Deck::for_rules(&SHORT_DECK);
    assert_eq!(deck.len(), 36);
    assert!(deck.as_slice().iter().all(|c| c.rank() >= Rank::Six));
}
