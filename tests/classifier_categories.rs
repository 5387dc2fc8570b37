use hand_rank::classifier::{classify, RankCategory};
use hand_rank::hand::parse_hand;

fn classify_tokens(tokens: [&str; 5]) -> RankCategory {
    classify(&parse_hand(&tokens).unwrap())
}

#[test]
fn category_straight_flush() {
    assert_eq!(classify_tokens(["4♥", "5♥", "6♥", "7♥", "8♥"]), RankCategory::StraightFlush);
}

#[test]
fn category_straight_flush_wheel() {
    assert_eq!(classify_tokens(["A♠", "4♠", "3♠", "5♠", "2♠"]), RankCategory::StraightFlush);
}

#[test]
fn category_four_of_kind() {
    assert_eq!(classify_tokens(["4♣", "4♦", "4♥", "4♠", "10♥"]), RankCategory::FourOfKind);
}

#[test]
fn category_full_house() {
    assert_eq!(classify_tokens(["4♣", "4♦", "5♦", "5♠", "5♥"]), RankCategory::FullHouse);
}

#[test]
fn category_flush() {
    // Not a straight: gap between 7 and Q.
    assert_eq!(classify_tokens(["4♣", "5♣", "6♣", "7♣", "Q♣"]), RankCategory::Flush);
}

#[test]
fn category_straight() {
    assert_eq!(classify_tokens(["2♠", "3♥", "4♥", "5♥", "6♥"]), RankCategory::Straight);
}

#[test]
fn category_straight_wheel() {
    assert_eq!(classify_tokens(["2♥", "4♦", "5♥", "A♦", "3♠"]), RankCategory::Straight);
}

#[test]
fn category_three_of_kind() {
    assert_eq!(classify_tokens(["2♥", "2♠", "2♦", "7♥", "A♥"]), RankCategory::ThreeOfKind);
}

#[test]
fn category_two_pairs() {
    assert_eq!(classify_tokens(["2♥", "4♦", "4♥", "A♦", "A♠"]), RankCategory::TwoPairs);
}

#[test]
fn category_one_pair() {
    assert_eq!(classify_tokens(["3♥", "4♥", "10♥", "3♦", "A♠"]), RankCategory::OnePair);
}

#[test]
fn category_high_card() {
    // Mixed suits, gap between 3 and Q.
    assert_eq!(classify_tokens(["A♥", "K♥", "Q♥", "2♦", "3♠"]), RankCategory::HighCard);
}
