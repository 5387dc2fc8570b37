use crate::cards::{parse_cards, Card, MalformedCardError, Rank, Suit};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A hand that is not exactly five distinct cards.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidHandError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    CardCount(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Any failure while turning raw tokens into a [`Hand`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error(transparent)]
    Malformed(#[from] MalformedCardError),
    #[error(transparent)]
    Invalid(#[from] InvalidHandError),
}

/// Exactly five distinct cards, in the order they were given.
///
/// Validity (five cards, no duplicate) is established at construction, so a
/// `Hand` handed to the classifier never needs re-checking.
///
/// ```
/// use hand_rank::cards::{Card, Rank, Suit};
/// use hand_rank::hand::Hand;
///
/// let hand = Hand::try_new([
///     Card::new(Rank::Four, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Six, Suit::Hearts),
///     Card::new(Rank::Seven, Suit::Hearts),
///     Card::new(Rank::Eight, Suit::Hearts),
/// ]).unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, InvalidHandError> {
        for i in 1..cards.len() {
            if cards[..i].contains(&cards[i]) {
                return Err(InvalidHandError::DuplicateCard(cards[i]));
            }
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, InvalidHandError> {
        let fixed: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| InvalidHandError::CardCount(cards.len()))?;
        Self::try_new(fixed)
    }

    /// Cards in their original input order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The (rank, suit) pairs in input order; inverse of parsing.
    pub fn to_tuples(&self) -> [(Rank, Suit); HAND_SIZE] {
        self.cards.map(Card::to_tuple)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Parse five card tokens into a [`Hand`].
///
/// Each token is a rank followed by a suit, e.g. `"10♥"` or `"A♠"`.
/// An unknown rank or suit fails with [`MalformedCardError`]; a wrong token
/// count or a repeated card fails with [`InvalidHandError`].
///
/// ```
/// use hand_rank::hand::parse_hand;
///
/// let hand = parse_hand(&["4♥", "5♥", "6♥", "7♥", "8♥"]).unwrap();
/// assert_eq!(hand.to_string(), "4♥ 5♥ 6♥ 7♥ 8♥");
/// ```
pub fn parse_hand<S: AsRef<str>>(tokens: &[S]) -> Result<Hand, HandError> {
    let cards = tokens
        .iter()
        .map(|t| Card::from_str(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(HandError::Malformed)?;
    Hand::from_slice(&cards).map_err(HandError::Invalid)
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(HandError::Malformed)?;
        Hand::from_slice(&cards).map_err(HandError::Invalid)
    }
}
