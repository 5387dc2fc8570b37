use crate::cards::Rank;
use crate::hand::{Hand, HAND_SIZE};
use std::fmt;

/// Hand categories from weakest to strongest.
///
/// The discriminants fix the precedence order used by [`classify`]; the
/// derived `Ord` follows them, so `TwoPairs < FullHouse` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RankCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl RankCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            RankCategory::HighCard => "high card",
            RankCategory::OnePair => "one pair",
            RankCategory::TwoPairs => "two pairs",
            RankCategory::ThreeOfKind => "three of a kind",
            RankCategory::Straight => "straight",
            RankCategory::Flush => "flush",
            RankCategory::FullHouse => "full house",
            RankCategory::FourOfKind => "four of a kind",
            RankCategory::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for RankCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rank multiplicities for one hand, keyed by [`Rank::index`].
/// Counts always sum to five.
fn rank_counts(hand: &Hand) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in hand.cards() {
        counts[c.rank().index()] += 1;
    }
    counts
}

/// Suit multiplicities for one hand, keyed by [`crate::cards::Suit::index`].
fn suit_counts(hand: &Hand) -> [u8; 4] {
    let mut counts = [0u8; 4];
    for c in hand.cards() {
        counts[c.suit().index()] += 1;
    }
    counts
}

/// All five cards share one suit.
fn is_flush(suit_counts: &[u8; 4]) -> bool {
    suit_counts.contains(&(HAND_SIZE as u8))
}

/// The wheel: A-2-3-4-5, the only straight where Ace counts low.
///
/// Kept separate from the consecutive-rank test so Ace's canonical (high)
/// ordering is never touched.
fn is_wheel(sorted: &[Rank; HAND_SIZE]) -> bool {
    *sorted == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace]
}

/// Five consecutive rank values under the canonical order. Covers the high
/// straight 10-J-Q-K-A; the wheel is the caller's separate case.
fn is_consecutive(sorted: &[Rank; HAND_SIZE]) -> bool {
    sorted.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

/// Classify a five-card hand into its single best category.
///
/// Pure and total: a [`Hand`] is valid by construction, so there is no
/// failure path here. Multiple predicates can hold at once (a straight flush
/// is also a straight and a flush); the strict precedence order below picks
/// the strongest, first match wins.
///
/// ```
/// use hand_rank::classifier::{classify, RankCategory};
/// use hand_rank::hand::parse_hand;
///
/// let hand = parse_hand(&["A♠", "4♠", "3♠", "5♠", "2♠"]).unwrap();
/// assert_eq!(classify(&hand), RankCategory::StraightFlush);
/// ```
pub fn classify(hand: &Hand) -> RankCategory {
    let mut sorted = hand.cards().map(|c| c.rank());
    sorted.sort_unstable();

    let ranks = rank_counts(hand);
    let suits = suit_counts(hand);

    let flush = is_flush(&suits);
    let straight = is_consecutive(&sorted) || is_wheel(&sorted);

    let fours = ranks.iter().filter(|&&c| c == 4).count();
    let threes = ranks.iter().filter(|&&c| c == 3).count();
    let pairs = ranks.iter().filter(|&&c| c == 2).count();

    if straight && flush {
        RankCategory::StraightFlush
    } else if fours == 1 {
        RankCategory::FourOfKind
    } else if threes == 1 && pairs == 1 {
        RankCategory::FullHouse
    } else if flush {
        RankCategory::Flush
    } else if straight {
        RankCategory::Straight
    } else if threes == 1 {
        RankCategory::ThreeOfKind
    } else if pairs == 2 {
        RankCategory::TwoPairs
    } else if pairs == 1 {
        RankCategory::OnePair
    } else {
        RankCategory::HighCard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::parse_hand;

    fn classify_tokens(tokens: [&str; 5]) -> RankCategory {
        classify(&parse_hand(&tokens).unwrap())
    }

    #[test]
    fn category_order_matches_precedence() {
        assert!(RankCategory::HighCard < RankCategory::OnePair);
        assert!(RankCategory::TwoPairs < RankCategory::ThreeOfKind);
        assert!(RankCategory::Straight < RankCategory::Flush);
        assert!(RankCategory::FullHouse < RankCategory::FourOfKind);
        assert!(RankCategory::FourOfKind < RankCategory::StraightFlush);
        assert_eq!(RankCategory::StraightFlush.ordinal(), 8);
    }

    #[test]
    fn wheel_is_a_straight_not_high_card() {
        assert_eq!(classify_tokens(["2♥", "4♦", "5♥", "A♦", "3♠"]), RankCategory::Straight);
    }

    #[test]
    fn suited_wheel_is_a_straight_flush() {
        assert_eq!(classify_tokens(["A♠", "4♠", "3♠", "5♠", "2♠"]), RankCategory::StraightFlush);
    }

    #[test]
    fn high_straight_needs_no_special_case() {
        assert_eq!(classify_tokens(["10♣", "J♦", "Q♥", "K♠", "A♣"]), RankCategory::Straight);
    }

    #[test]
    fn trips_plus_pair_is_a_full_house() {
        assert_eq!(classify_tokens(["4♣", "4♦", "5♦", "5♠", "5♥"]), RankCategory::FullHouse);
    }

    #[test]
    fn king_high_wraparound_is_not_a_straight() {
        // J-Q-K-A-2 does not wrap.
        assert_eq!(classify_tokens(["J♣", "Q♦", "K♥", "A♠", "2♣"]), RankCategory::HighCard);
    }

    #[test]
    fn ace_high_with_gap_is_high_card() {
        assert_eq!(classify_tokens(["A♥", "K♥", "Q♥", "2♦", "3♠"]), RankCategory::HighCard);
    }
}
