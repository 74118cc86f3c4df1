use poker_odds::cards::Rank;
use poker_odds::evaluator::{evaluate, Category, Evaluation};
use poker_odds::hand::CardGroup;
use poker_odds::variants::STANDARD;

fn eval(hand: &str, board: &str) -> Evaluation {
    let hand: CardGroup = hand.parse().expect("valid hand");
    let board: CardGroup = board.parse().expect("valid board");
    evaluate(&STANDARD, hand.concat(&board).as_slice()).expect("5-7 cards")
}

fn ranks(e: &Evaluation) -> String {
    e.tie_break_ranks().iter().map(|r| r.to_char()).collect()
}

#[test]
fn category_royal_flush() {
    let e = eval("KdJd", "Ad,Ah,Qd,Td,9h");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(ranks(&e), "AKQJT");
    assert_eq!(e.to_string(), "Royal flush");
}

#[test]
fn category_straight_flush() {
    let e = eval("5d6d", "3d,4d,7d,4s,Ts");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(ranks(&e), "76543");

    let e = eval("6d2d", "3d4dTcAs5d");
    assert_eq!(ranks(&e), "65432");
    assert_eq!(e.to_string(), "Six high straight flush");

    let e = eval("5s6s", "4s7s8d8s2s");
    assert_eq!(ranks(&e), "87654");
    assert_eq!(e.to_string(), "Eight high straight flush");
}

#[test]
fn category_ace_low_straight_flush() {
    for (hand, board) in [("Ad5d", "3d,4d,7s,4s,2d"), ("Kd3d", "Ad,4d,5d,5c,2d"), ("As2s", "3s4s5s7h6d")] {
        let e = eval(hand, board);
        assert_eq!(e.category, Category::StraightFlush, "{hand} {board}");
        assert_eq!(e.tie_break_ranks()[4], Rank::Ace);
        assert_eq!(ranks(&e), "5432A");
        assert_eq!(e.to_string(), "Five high straight flush");
    }
}

#[test]
fn category_four_of_a_kind() {
    let e = eval("4h4c", "2s,4d,7d,4s,Ts");
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(ranks(&e), "4444T");
    assert_eq!(e.to_string(), "Quad fours (T high)");
}

#[test]
fn category_full_house() {
    let e = eval("ThTd", "2s,4d,7d,4s,Ts");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(ranks(&e), "TTT44");
    assert_eq!(e.to_string(), "Full house: tens full of fours");

    let e = eval("8h8d", "4s7s8c4h7h");
    assert_eq!(ranks(&e), "88877");
    assert_eq!(e.to_string(), "Full house: eights full of sevens");

    // Two sets of trips
    let e = eval("8h8d", "4s7s8c7d7h");
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(ranks(&e), "88877");
    assert_eq!(e.to_string(), "Full house: eights full of sevens");
}

#[test]
fn category_flush() {
    let e = eval("JdQd", "2d,7d,Ts,9d,Th");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(ranks(&e), "QJ972");
    assert_eq!(e.to_string(), "Queen high flush");

    let e = eval("5s6s", "4s7s8c2c2s");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(ranks(&e), "76542");
    assert_eq!(e.to_string(), "Seven high flush");

    let e = eval("As2s", "3s4s5c8s6d");
    assert_eq!(e.category, Category::Flush);
    assert_eq!(ranks(&e), "A8432");
    assert_eq!(e.to_string(), "Ace high flush");
}

#[test]
fn category_straight() {
    let e = eval("8s6h", "2d,7d,Ts,9d,Th");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(ranks(&e), "T9876");

    let e = eval("6s2d", "3d4sTcAs5s");
    assert_eq!(ranks(&e), "65432");
    assert_eq!(e.to_string(), "Six high straight");
}

#[test]
fn category_ace_low_straight() {
    let e = eval("Ad2d", "3d4s9s7s5s");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(ranks(&e), "5432A");
    assert_eq!(e.to_string(), "Five high straight");
}

#[test]
fn category_three_of_a_kind() {
    let e = eval("TcJc", "2d,7d,Ts,9d,Th");
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(ranks(&e), "TTTJ9");
    assert_eq!(e.to_string(), "Trip tens (J,9 high)");
}

#[test]
fn category_two_pair() {
    let e = eval("TcJc", "2d,7d,Ts,9d,Jh");
    assert_eq!(e.category, Category::TwoPair);
    assert_eq!(ranks(&e), "JJTT9");

    let e = eval("AcJc", "2d,7d,7s,Jh");
    assert_eq!(ranks(&e), "JJ77A");
    assert_eq!(e.to_string(), "Two pairs: jacks and sevens (A high)");

    // The third pair is outranked by the six kicker
    let e = eval("JdJc", "5h,5s,7c,6c,7d");
    assert_eq!(ranks(&e), "JJ776");
    assert_eq!(e.to_string(), "Two pairs: jacks and sevens (6 high)");
}

#[test]
fn category_pair() {
    let e = eval("TcJc", "2d,7d,Ts,9d,6s");
    assert_eq!(e.category, Category::Pair);
    assert_eq!(ranks(&e), "TTJ97");

    let e = eval("JdJh", "2d,7d,Ts,9d,6s");
    assert_eq!(ranks(&e), "JJT97");
    assert_eq!(e.to_string(), "Pair of jacks (T,9,7 high)");
}

#[test]
fn category_high_card() {
    let e = eval("KcQc", "2c,4c,Jd,9d,6d");
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(ranks(&e), "KQJ96");
    assert_eq!(e.to_string(), "High card (K,Q,J,9,6 high)");
}

#[test]
fn suit_restricted_straight_flush() {
    // Nine-high straight across suits, eight-high straight flush in spades
    let e = eval("9h8s", "7s6s5s4s3s");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(ranks(&e), "87654");
}
